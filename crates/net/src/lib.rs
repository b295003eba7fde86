//! # Networked Components
//!
//! Remote-invocation addressing for host extensions, in two tiers:
//!
//! * **Instance-scoped** ([`NetPart`]): a handler bound to one in-world
//!   object. Attachment resolves the object's network identity once,
//!   registers it with the transport, and sends are addressed through the
//!   target object's own attached handler.
//! * **Singleton** ([`SingletonPart`]): at most one live instance per type
//!   process-wide, addressed by module id alone.
//!
//! Both route through the opaque [`Transport`] boundary; the [`Net`] runtime
//! owns the singleton slots and the transport handle, so there is no ambient
//! global state to poison between sessions.

mod entity;
mod error;
mod instance;
mod net;
mod peers;
mod singleton;

pub use crate::entity::{Entity, EntityExt};
pub use crate::error::NetError;
pub use crate::instance::{NetLink, NetPart};
pub use crate::net::Net;
pub use crate::peers::{PeerHandle, PeerHandleExt, STEAM_ID_PROPERTY};
pub use crate::singleton::SingletonPart;
pub use modlink_transport::{Args, Reliability, Transport};

pub(crate) fn short_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
