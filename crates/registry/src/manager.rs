use crate::error::{BoxError, LifecycleError};
use crate::feature::InitContext;
use crate::registry::{FeatureEntry, FeatureRegistry};
use modlink_kernel::config::ConfigFile;
use modlink_kernel::log::ScopedLog;

/// How a lifecycle pass reacts to a failing feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The first failure aborts the whole pass.
    Abort,
    /// A failing feature is recorded and the pass continues to the next one.
    Isolate,
}

/// Outcome of a lifecycle pass, per feature name.
#[derive(Debug, Default, Clone)]
pub struct LifecycleReport {
    pub initialized: Vec<String>,
    pub disabled: Vec<String>,
    pub failed: Vec<String>,
}

impl LifecycleReport {
    /// Whether every feature completed its per-feature steps without error.
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

enum Outcome {
    Initialized,
    Disabled,
}

/// Walks the registry once: binds configuration, applies the enablement
/// decision, and initializes each enabled feature in registration order.
#[derive(Debug)]
pub struct FeatureManager {
    registry: FeatureRegistry,
    config: ConfigFile,
    log: ScopedLog,
}

impl FeatureManager {
    #[must_use]
    pub fn new(registry: FeatureRegistry, config: ConfigFile) -> Self {
        Self { registry, config, log: ScopedLog::new("FeatureManager") }
    }

    #[must_use]
    pub const fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Releases the registry once the pass is done, for host-side access to
    /// the live feature instances.
    #[must_use]
    pub fn into_registry(self) -> FeatureRegistry {
        self.registry
    }

    /// Runs the per-feature lifecycle steps over every registered feature.
    ///
    /// For each feature, in registration order: a fresh config section named
    /// after the feature, the enablement switch (optional features only), the
    /// feature's own `configure` hook, then `initialize` iff enabled.
    ///
    /// # Errors
    /// Under [`FailurePolicy::Abort`], the first failing feature is returned
    /// as [`LifecycleError::Feature`] and later features are not processed.
    /// Under [`FailurePolicy::Isolate`], failures land in
    /// [`LifecycleReport::failed`] and the pass always completes.
    pub fn initialize_all(
        &mut self,
        policy: FailurePolicy,
    ) -> Result<LifecycleReport, LifecycleError> {
        let mut report = LifecycleReport::default();

        for entry in self.registry.entries_mut() {
            let name = entry.name().to_owned();
            match Self::run_feature(&self.config, &self.log, entry) {
                Ok(Outcome::Initialized) => report.initialized.push(name),
                Ok(Outcome::Disabled) => report.disabled.push(name),
                Err(source) => {
                    self.log
                        .error(format!("There was an error loading feature '{name}': {source}"));
                    match policy {
                        FailurePolicy::Abort => {
                            return Err(LifecycleError::Feature { name, source });
                        },
                        FailurePolicy::Isolate => report.failed.push(name),
                    }
                },
            }
        }

        Ok(report)
    }

    fn run_feature(
        config: &ConfigFile,
        log: &ScopedLog,
        entry: &mut FeatureEntry,
    ) -> Result<Outcome, BoxError> {
        let name = entry.name().to_owned();
        let section = config.section(name.as_str());

        entry.bind_required_config(&section)?;
        entry.feature_mut().configure(&section)?;

        if entry.enabled() {
            if entry.initialized() {
                return Ok(Outcome::Initialized);
            }
            if entry.required() {
                log.info(format!("Feature '{name}' is required. Initializing..."));
            } else {
                log.info(format!("Feature '{name}' is enabled. Initializing..."));
            }
            let cx = InitContext::new(log.child(name));
            entry.feature_mut().initialize(&cx)?;
            entry.mark_initialized();
            Ok(Outcome::Initialized)
        } else {
            log.info(format!("Feature '{name}' is disabled."));
            Ok(Outcome::Disabled)
        }
    }
}
