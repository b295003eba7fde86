//! Facade crate for the modlink extension API.
//! Re-exports the domain/kernel primitives and aggregates feature bootstrap.
//! Keep this crate thin: it should compose other crates, not implement
//! behavior of its own.
//!
//! ## Usage
//! - Extension modules implement [`Feature`] (and optionally
//!   [`registry::FeaturePack`]) and register with a [`FeatureRegistry`].
//! - The host calls [`init`] once at startup to run the lifecycle pass, then
//!   hands features a [`Net`] runtime for session traffic.

pub use modlink_domain as domain;
pub use modlink_kernel as kernel;
pub use modlink_net as net;
pub use modlink_registry as registry;
pub use modlink_transport as transport;

pub use modlink_kernel::config::ConfigFile;
pub use modlink_kernel::log::ScopedLog;
pub use modlink_net::{Net, NetError, Reliability};
pub use modlink_registry::{
    Capability, FailurePolicy, Feature, FeatureManager, FeatureRegistry, LifecycleError,
    LifecycleReport,
};

/// Runs the lifecycle pass over `registry` and returns the manager holding
/// the live feature instances.
///
/// # Errors
/// Under [`FailurePolicy::Abort`], the first failing feature aborts the pass
/// with [`LifecycleError::Feature`]. Under [`FailurePolicy::Isolate`], check
/// [`LifecycleReport::all_ok`] instead.
pub fn init(
    registry: FeatureRegistry,
    config: ConfigFile,
    policy: FailurePolicy,
) -> Result<(FeatureManager, LifecycleReport), LifecycleError> {
    let mut manager = FeatureManager::new(registry, config);
    let report = manager.initialize_all(policy)?;
    Ok((manager, report))
}
