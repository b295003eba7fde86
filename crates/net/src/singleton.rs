use crate::error::NetError;
use crate::net::Net;
use crate::short_name;
use modlink_domain::ids::{ModuleId, PeerId};
use modlink_transport::{Args, Reliability};
use std::any::{Any, TypeId};
use std::sync::Arc;

/// A process-wide networked handler, not tied to any world object.
///
/// At most one live instance per type; the [`Net`] runtime owns it for the
/// life of the process, so scene teardown and host save systems never reclaim
/// it. Traffic is addressed by module id alone.
pub trait SingletonPart: Any + Send + Sync {
    /// The owning mod's namespace on the transport.
    const MODULE: ModuleId;

    /// Invoked once the instance is recorded and registered.
    fn on_activated(&mut self) {}
}

#[derive(Debug)]
pub(crate) struct SingletonSlot {
    pub(crate) module: ModuleId,
    pub(crate) instance: Option<Arc<dyn Any + Send + Sync>>,
}

impl Net {
    /// Activates the process-wide instance of `S`.
    ///
    /// If one is already active the new instance is rejected before `build`
    /// runs: a warning is logged, nothing registers, and `None` comes back.
    /// Otherwise the slot is recorded, `S::MODULE` is registered with the
    /// transport (no per-object identity), and `on_activated` runs.
    /// Singleton sends already work from inside the hook.
    pub fn activate<S: SingletonPart>(&self, build: impl FnOnce() -> S) -> Option<Arc<S>> {
        let type_id = TypeId::of::<S>();
        let log = self.log.child(short_name::<S>());

        if self.singletons.read().contains_key(&type_id) {
            log.warning("This singleton already exists. Discarding the new instance");
            return None;
        }

        let mut instance = build();
        self.singletons
            .write()
            .insert(type_id, SingletonSlot { module: S::MODULE, instance: None });
        self.transport.register_object(S::MODULE, None);
        instance.on_activated();

        let instance = Arc::new(instance);
        if let Some(slot) = self.singletons.write().get_mut(&type_id) {
            slot.instance = Some(instance.clone());
        }
        Some(instance)
    }

    /// Tears down the active instance of `S`, deregistering its module.
    ///
    /// Returns whether an instance was actually active.
    pub fn deactivate<S: SingletonPart>(&self) -> bool {
        let Some(slot) = self.singletons.write().remove(&TypeId::of::<S>()) else {
            return false;
        };
        self.transport.deregister_object(slot.module, None);
        true
    }

    /// The active instance of `S`, if any.
    #[must_use]
    pub fn singleton<S: SingletonPart>(&self) -> Option<Arc<S>> {
        let slots = self.singletons.read();
        let instance = slots.get(&TypeId::of::<S>())?.instance.clone()?;
        drop(slots);
        instance.downcast::<S>().ok()
    }

    /// Broadcasts `method` to all peers under the active instance's module.
    ///
    /// # Errors
    /// [`NetError::SingletonInactive`] when no instance of `S` is active;
    /// there is no fallback identity, so this is fatal to the caller's logic.
    pub fn send<S: SingletonPart>(
        &self,
        method: &str,
        reliability: Reliability,
        args: Args,
    ) -> Result<(), NetError> {
        let module = self.active_module::<S>()?;
        self.transport.invoke(module, method, reliability, None, args);
        Ok(())
    }

    /// Like [`Net::send`], delivered to a single peer.
    ///
    /// # Errors
    /// [`NetError::SingletonInactive`] when no instance of `S` is active.
    pub fn send_target<S: SingletonPart>(
        &self,
        method: &str,
        peer: PeerId,
        reliability: Reliability,
        args: Args,
    ) -> Result<(), NetError> {
        let module = self.active_module::<S>()?;
        self.transport.invoke_targeted(module, method, peer, reliability, None, args);
        Ok(())
    }

    fn active_module<S: SingletonPart>(&self) -> Result<ModuleId, NetError> {
        self.singletons
            .read()
            .get(&TypeId::of::<S>())
            .map(|slot| slot.module)
            .ok_or(NetError::SingletonInactive { type_name: short_name::<S>() })
    }
}
