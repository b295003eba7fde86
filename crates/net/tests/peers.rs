use fxhash::FxHashMap;
use modlink_domain::ids::PeerId;
use modlink_net::{PeerHandle, PeerHandleExt, STEAM_ID_PROPERTY};

#[derive(Default)]
struct TestPeer {
    properties: FxHashMap<String, String>,
}

impl TestPeer {
    fn with(key: &str, value: &str) -> Self {
        let mut peer = Self::default();
        peer.properties.insert(key.to_owned(), value.to_owned());
        peer
    }
}

impl PeerHandle for TestPeer {
    fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

#[test]
fn steam_id_parses_from_the_property_map() {
    let peer = TestPeer::with(STEAM_ID_PROPERTY, "76561198000000000");
    assert_eq!(peer.steam_id(), Some(PeerId(76_561_198_000_000_000)));
}

#[test]
fn missing_property_yields_none() {
    assert_eq!(TestPeer::default().steam_id(), None);
}

#[test]
fn non_numeric_property_yields_none() {
    assert_eq!(TestPeer::with(STEAM_ID_PROPERTY, "not-a-steam-id").steam_id(), None);
    assert_eq!(TestPeer::with(STEAM_ID_PROPERTY, "-5").steam_id(), None);
    assert_eq!(TestPeer::with(STEAM_ID_PROPERTY, "").steam_id(), None);
}
