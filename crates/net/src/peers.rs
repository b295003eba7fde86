use modlink_domain::ids::PeerId;

/// Session property key carrying a peer's Steam account id.
pub const STEAM_ID_PROPERTY: &str = "SteamID";

/// Narrow view of a session peer's property map.
pub trait PeerHandle {
    /// The string property stored under `key`, if present.
    fn property(&self, key: &str) -> Option<&str>;
}

/// Identity extraction on top of [`PeerHandle`].
pub trait PeerHandleExt: PeerHandle {
    /// The peer's Steam identity, if the property is present and parses as
    /// an unsigned 64-bit integer. Never panics.
    fn steam_id(&self) -> Option<PeerId> {
        self.property(STEAM_ID_PROPERTY)?.parse::<u64>().ok().map(PeerId)
    }
}

impl<P: PeerHandle + ?Sized> PeerHandleExt for P {}
