use crate::singleton::SingletonSlot;
use fxhash::FxHashMap;
use modlink_kernel::log::ScopedLog;
use modlink_transport::Transport;
use parking_lot::RwLock;
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// The networked-component runtime.
///
/// Owns the transport handle and the per-type singleton slots. Hosts create
/// one per session and hand clones to extensions; cloning shares the same
/// underlying state.
#[derive(Clone)]
pub struct Net {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) singletons: Arc<RwLock<FxHashMap<TypeId, SingletonSlot>>>,
    pub(crate) log: ScopedLog,
}

impl Net {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport, singletons: Arc::default(), log: ScopedLog::new("Net") }
    }

    /// The transport this runtime routes through.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }
}

impl fmt::Debug for Net {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Net").field("singletons", &self.singletons.read().len()).finish_non_exhaustive()
    }
}
