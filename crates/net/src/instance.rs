use crate::entity::{Entity, EntityExt};
use crate::net::Net;
use crate::short_name;
use modlink_domain::ids::{ModuleId, ObjectId, PeerId};
use modlink_kernel::log::ScopedLog;
use modlink_transport::{Args, Reliability};
use std::any::{Any, TypeId};

/// An instance-scoped networked handler.
///
/// Implementors embed the [`NetLink`] handed to them by [`Net::attach`]; it
/// carries the identity the handler was registered under and deregisters it
/// on drop. The required co-located part is declared as `Anchor`.
pub trait NetPart: Any + Send + Sync {
    /// Co-located part this handler requires on its entity.
    type Anchor: Any;

    /// The owning mod's namespace on the transport.
    const MODULE: ModuleId;

    /// The link this handler was built around.
    fn link(&self) -> &NetLink;

    /// Invoked once registration with the transport has succeeded.
    fn on_registered(&mut self) {}
}

/// Identity of one registered instance-scoped handler.
///
/// The object id is resolved once at attachment time and never changes; a
/// non-nil id means the transport registration succeeded and will be
/// withdrawn when the link drops.
#[derive(Debug)]
pub struct NetLink {
    module: ModuleId,
    object: ObjectId,
    net: Net,
    log: ScopedLog,
}

impl NetLink {
    #[must_use]
    pub const fn module_id(&self) -> ModuleId {
        self.module
    }

    #[must_use]
    pub const fn object_id(&self) -> ObjectId {
        self.object
    }

    /// Logging facade bound to the handler's type name.
    #[must_use]
    pub const fn log(&self) -> &ScopedLog {
        &self.log
    }
}

impl Drop for NetLink {
    fn drop(&mut self) {
        if !self.object.is_nil() {
            self.net.transport.deregister_object(self.module, Some(self.object));
        }
    }
}

impl Net {
    /// Attaches a handler to a world object.
    ///
    /// Requires the declared anchor part on the entity and a network identity
    /// from the entity's identity-bearing ancestor; if either is missing the
    /// handler is discarded (error log, `None`, nothing registered). On
    /// success the identity is registered with the transport, the handler is
    /// built around its immutable link, and `on_registered` runs.
    ///
    /// The host owns attachment storage: keep the returned handler on the
    /// entity so masked sends can find it.
    pub fn attach<H: NetPart>(
        &self,
        entity: &dyn Entity,
        build: impl FnOnce(NetLink) -> H,
    ) -> Option<H> {
        let log = self.log.child(short_name::<H>());

        if entity.part_raw(TypeId::of::<H::Anchor>()).is_none() {
            log.error(format!(
                "Could not find the required part of type '{}'. Discarding handler",
                short_name::<H::Anchor>()
            ));
            return None;
        }

        let Some(object) = entity.network_id() else {
            log.error("Could not find a network identity for the entity. Discarding handler");
            return None;
        };

        self.transport.register_object(H::MODULE, Some(object));
        let mut handler = build(NetLink { module: H::MODULE, object, net: self.clone(), log });
        handler.on_registered();
        Some(handler)
    }

    /// Broadcasts `method` to all peers, scoped to the target object's
    /// attached handler of type `H`.
    ///
    /// Returns `false` (with an error log) when the target has no such
    /// handler; the caller decides what to do next.
    pub fn send_masked<H: NetPart>(
        &self,
        target: &dyn Entity,
        method: &str,
        reliability: Reliability,
        args: Args,
    ) -> bool {
        let Some(handler) = target.part::<H>() else {
            self.log
                .child(short_name::<H>())
                .error(format!("Target does not have a '{}' handler", short_name::<H>()));
            return false;
        };

        let link = handler.link();
        self.transport.invoke(link.module, method, reliability, Some(link.object), args);
        true
    }

    /// Like [`Net::send_masked`], delivered to a single peer.
    pub fn send_target_masked<H: NetPart>(
        &self,
        target: &dyn Entity,
        method: &str,
        peer: PeerId,
        reliability: Reliability,
        args: Args,
    ) -> bool {
        let Some(handler) = target.part::<H>() else {
            self.log
                .child(short_name::<H>())
                .error(format!("Target peer does not have a '{}' handler", short_name::<H>()));
            return false;
        };

        let link = handler.link();
        self.transport.invoke_targeted(link.module, method, peer, reliability, Some(link.object), args);
        true
    }
}
