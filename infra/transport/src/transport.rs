use modlink_domain::ids::{ModuleId, ObjectId, PeerId};
use serde::{Deserialize, Serialize};

/// Invocation arguments, already shaped for the wire.
pub type Args = Vec<serde_json::Value>;

/// Transport-level delivery-guarantee selector.
///
/// Passed through to the session layer untouched; the extension API attaches
/// no semantics of its own to the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reliability {
    /// Ordered, retransmitted until acknowledged.
    Reliable,
    /// Best effort.
    Unreliable,
    /// Best effort, skips send batching.
    UnreliableNoDelay,
}

/// Outbound half of the session's RPC layer.
///
/// All calls are fire-and-forget: the implementation owns queuing, delivery,
/// and its own failure reporting. Identities are scoped by the owning mod's
/// [`ModuleId`]; instance-scoped components add the [`ObjectId`] of their
/// world object, singletons pass `None`.
pub trait Transport: Send + Sync + 'static {
    /// Establishes `(module, object)` as an addressable identity.
    fn register_object(&self, module: ModuleId, object: Option<ObjectId>);

    /// Withdraws a previously registered identity.
    fn deregister_object(&self, module: ModuleId, object: Option<ObjectId>);

    /// Broadcasts `method` to every peer in the session.
    fn invoke(
        &self,
        module: ModuleId,
        method: &str,
        reliability: Reliability,
        object: Option<ObjectId>,
        args: Args,
    );

    /// Delivers `method` to a single peer.
    fn invoke_targeted(
        &self,
        module: ModuleId,
        method: &str,
        peer: PeerId,
        reliability: Reliability,
        object: Option<ObjectId>,
        args: Args,
    );
}
