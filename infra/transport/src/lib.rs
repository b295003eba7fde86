//! # Transport
//!
//! The boundary between the extension API and whatever carries its traffic.
//!
//! ## Overview
//!
//! Networked components address the session through the [`Transport`] trait:
//! identities are established with `register_object`, and outbound
//! invocations are fire-and-forget `invoke`/`invoke_targeted` calls. Delivery
//! reliability, ordering, and wire serialization all belong to the
//! implementation behind the trait.
//!
//! [`LoopbackTransport`] is the in-process implementation: it keeps a ledger
//! of registered identities and fans deliveries out on a `tokio` broadcast
//! channel. Tests and offline hosts run against it; a real session plugs in
//! its own implementation.
//!
//! # Example
//!
//! ```rust
//! use modlink_domain::ids::{ModuleId, ObjectId};
//! use modlink_transport::{LoopbackTransport, Reliability, Transport};
//! use serde_json::json;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let transport = LoopbackTransport::new();
//!     let mut rx = transport.subscribe();
//!
//!     transport.register_object(ModuleId(0xC0DE), Some(ObjectId(7)));
//!     transport.invoke(ModuleId(0xC0DE), "SyncState", Reliability::Reliable, Some(ObjectId(7)), vec![json!(42)]);
//!
//!     let delivery = rx.recv().await.unwrap();
//!     assert_eq!(delivery.method, "SyncState");
//! }
//! ```

mod loopback;
mod transport;

pub use crate::loopback::{Delivery, LoopbackTransport};
pub use crate::transport::{Args, Reliability, Transport};
