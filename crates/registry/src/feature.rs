use crate::error::BoxError;
use crate::registry::FeatureRegistry;
use modlink_kernel::config::ConfigSection;
use modlink_kernel::log::ScopedLog;
use std::any::Any;

/// Capability marker supplied when a feature is registered.
///
/// `required` features cannot be disabled and get no "Enabled" switch in
/// their config section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capability {
    pub required: bool,
}

impl Capability {
    #[must_use]
    pub const fn optional() -> Self {
        Self { required: false }
    }

    #[must_use]
    pub const fn required() -> Self {
        Self { required: true }
    }
}

/// Context handed to a feature while it initializes.
#[derive(Debug)]
pub struct InitContext {
    log: ScopedLog,
}

impl InitContext {
    pub(crate) const fn new(log: ScopedLog) -> Self {
        Self { log }
    }

    /// Logging facade bound to this feature's name.
    #[must_use]
    pub const fn log(&self) -> &ScopedLog {
        &self.log
    }
}

/// A discoverable host capability.
///
/// One instance per concrete type lives in the registry for its whole
/// lifetime. Hooks default to no-ops; override what the feature needs.
pub trait Feature: Any + Send + Sync {
    /// Stable, human-readable identity; also names the config section.
    fn name(&self) -> &str;

    /// Labels the generated "Enabled" configuration entry.
    fn description(&self) -> &str;

    /// Feature-specific settings binding.
    fn configure(&mut self, _section: &ConfigSection) -> Result<(), BoxError> {
        Ok(())
    }

    /// Invoked at most once, and only when the feature is enabled.
    fn initialize(&mut self, _cx: &InitContext) -> Result<(), BoxError> {
        Ok(())
    }

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

impl std::fmt::Debug for dyn Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feature").field("name", &self.name()).finish_non_exhaustive()
    }
}

/// A module's worth of features, contributed in one call.
///
/// Replaces scanning a compiled unit: each extension module implements this
/// once and lists its registrations, so discovery order is registration order.
pub trait FeaturePack {
    fn register(registry: &mut FeatureRegistry);
}
