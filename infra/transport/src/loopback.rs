use crate::transport::{Args, Reliability, Transport};
use fxhash::FxHashSet;
use modlink_domain::ids::{ModuleId, ObjectId, PeerId};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::trace;

/// A safe default for the delivery buffer.
/// 128 is usually enough for a single host frame's worth of traffic.
const DEFAULT_CAPACITY: usize = 128;

/// One observed invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub module: ModuleId,
    pub method: String,
    pub reliability: Reliability,
    /// `None` for singleton-scoped traffic.
    pub object: Option<ObjectId>,
    /// `None` for broadcasts.
    pub target: Option<PeerId>,
    pub args: Args,
}

/// In-process [`Transport`] implementation.
///
/// Registered identities are kept in a live set plus an append-only call
/// ledger, and every invocation is fanned out to subscribers. There is no
/// wire: "delivery" means handing the [`Delivery`] record to whoever
/// subscribed, which is exactly what tests and offline hosts need.
#[derive(Debug)]
pub struct LoopbackTransport {
    live: RwLock<FxHashSet<(ModuleId, Option<ObjectId>)>>,
    register_log: RwLock<Vec<(ModuleId, Option<ObjectId>)>>,
    sender: broadcast::Sender<Arc<Delivery>>,
}

impl Default for LoopbackTransport {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl LoopbackTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose delivery buffer holds `capacity` records per
    /// subscriber before older ones are dropped.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            live: RwLock::default(),
            register_log: RwLock::default(),
            sender,
        }
    }

    /// Receives every future invocation, broadcast and targeted alike.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Delivery>> {
        self.sender.subscribe()
    }

    /// Whether `(module, object)` is currently registered.
    #[must_use]
    pub fn is_registered(&self, module: ModuleId, object: Option<ObjectId>) -> bool {
        self.live.read().contains(&(module, object))
    }

    /// Every `register_object` call ever made, in call order.
    #[must_use]
    pub fn register_calls(&self) -> Vec<(ModuleId, Option<ObjectId>)> {
        self.register_log.read().clone()
    }

    fn deliver(&self, delivery: Delivery) {
        let method = delivery.method.clone();
        match self.sender.send(Arc::new(delivery)) {
            Ok(count) => trace!(method = %method, count, "Invocation dispatched"),
            Err(_) => trace!(method = %method, "Invocation dropped: no active subscribers"),
        }
    }
}

impl Transport for LoopbackTransport {
    fn register_object(&self, module: ModuleId, object: Option<ObjectId>) {
        trace!(module = %module, object = ?object, "Registering network object");
        self.live.write().insert((module, object));
        self.register_log.write().push((module, object));
    }

    fn deregister_object(&self, module: ModuleId, object: Option<ObjectId>) {
        trace!(module = %module, object = ?object, "Deregistering network object");
        self.live.write().remove(&(module, object));
    }

    fn invoke(
        &self,
        module: ModuleId,
        method: &str,
        reliability: Reliability,
        object: Option<ObjectId>,
        args: Args,
    ) {
        self.deliver(Delivery {
            module,
            method: method.to_owned(),
            reliability,
            object,
            target: None,
            args,
        });
    }

    fn invoke_targeted(
        &self,
        module: ModuleId,
        method: &str,
        peer: PeerId,
        reliability: Reliability,
        object: Option<ObjectId>,
        args: Args,
    ) {
        self.deliver(Delivery {
            module,
            method: method.to_owned(),
            reliability,
            object,
            target: Some(peer),
            args,
        });
    }
}
