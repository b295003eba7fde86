//! # Feature Registry & Lifecycle
//!
//! Lets independently-authored features plug into a host session without each
//! one re-implementing discovery, enablement, or logging plumbing.
//!
//! A module contributes its features with explicit registration calls; the
//! registry keeps exactly one instance per feature type, in registration
//! order. The [`FeatureManager`] then walks that order once: it binds each
//! feature's configuration section, decides enablement, and invokes
//! initialization with per-feature failure isolation.
//!
//! ```rust
//! use modlink_kernel::config::ConfigFile;
//! use modlink_registry::{Capability, FailurePolicy, Feature, FeatureManager, FeatureRegistry};
//!
//! #[derive(Default)]
//! struct Flashlight;
//!
//! impl Feature for Flashlight {
//!     fn name(&self) -> &str {
//!         "Flashlight"
//!     }
//!     fn description(&self) -> &str {
//!         "A toggleable flashlight"
//!     }
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//!
//! let mut registry = FeatureRegistry::new();
//! registry.register_default::<Flashlight>(Capability::optional());
//!
//! let mut manager = FeatureManager::new(registry, ConfigFile::empty());
//! let report = manager.initialize_all(FailurePolicy::Isolate).unwrap();
//! assert!(report.all_ok());
//! ```

mod error;
mod feature;
mod manager;
mod registry;

pub use crate::error::{BoxError, LifecycleError};
pub use crate::feature::{Capability, Feature, FeaturePack, InitContext};
pub use crate::manager::{FailurePolicy, FeatureManager, LifecycleReport};
pub use crate::registry::{FeatureEntry, FeatureRegistry};
