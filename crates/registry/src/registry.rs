use crate::error::BoxError;
use crate::feature::{Capability, Feature, FeaturePack};
use fxhash::FxHashMap;
use modlink_domain::features::FeatureInfo;
use modlink_kernel::config::{ConfigEntry, ConfigSection};
use modlink_kernel::log::ScopedLog;
use std::any::{TypeId, type_name};

/// One registered feature and its per-type state.
///
/// This record is what used to live in ambient per-type statics: the single
/// instance, its marker, and the bound enablement cell all hang off the
/// registry entry instead.
#[derive(Debug)]
pub struct FeatureEntry {
    feature: Box<dyn Feature>,
    required: bool,
    enabled: Option<ConfigEntry<bool>>,
    initialized: bool,
}

impl FeatureEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        self.feature.name()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.feature.description()
    }

    #[must_use]
    pub const fn required(&self) -> bool {
        self.required
    }

    /// Required features are always enabled; optional ones follow their bound
    /// configuration. An optional feature that has not been through a
    /// lifecycle pass yet counts as disabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        if self.required {
            return true;
        }
        self.enabled.as_ref().is_some_and(ConfigEntry::value)
    }

    #[must_use]
    pub fn info(&self) -> FeatureInfo {
        FeatureInfo {
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            required: self.required,
            enabled: self.enabled(),
        }
    }

    #[must_use]
    pub fn feature(&self) -> &dyn Feature {
        self.feature.as_ref()
    }

    /// Binds the enablement switch for optional features. Required features
    /// get no disable entry at all.
    pub(crate) fn bind_required_config(&mut self, section: &ConfigSection) -> Result<(), BoxError> {
        if !self.required {
            let description = format!("Enables feature: {}", self.description());
            self.enabled = Some(section.bind("Enabled", true, description)?);
        }
        Ok(())
    }

    pub(crate) fn feature_mut(&mut self) -> &mut dyn Feature {
        self.feature.as_mut()
    }

    /// Whether `initialize` has already run for this entry.
    #[must_use]
    pub const fn initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) const fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}

/// Holds the single live instance of every registered feature type.
///
/// Insertion order is registration order and doubles as initialization order.
/// Entries are never removed; the registry lives as long as the host session.
#[derive(Debug)]
pub struct FeatureRegistry {
    entries: Vec<FeatureEntry>,
    index: FxHashMap<TypeId, usize>,
    log: ScopedLog,
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: FxHashMap::default(), log: ScopedLog::new("FeatureRegistry") }
    }

    /// Registers a feature type, constructing its single instance.
    ///
    /// Returns whether the feature was retained. A type registered twice is
    /// skipped, as is a factory that fails to construct; both paths are
    /// logged at debug level and are not errors.
    pub fn register<F: Feature>(
        &mut self,
        marker: Capability,
        factory: impl FnOnce() -> Result<F, BoxError>,
    ) -> bool {
        let type_id = TypeId::of::<F>();
        if self.index.contains_key(&type_id) {
            self.log.debug(format!("Feature type {} already registered, skipping", type_name::<F>()));
            return false;
        }

        let feature = match factory() {
            Ok(feature) => feature,
            Err(e) => {
                self.log.debug(format!("Feature type {} failed to construct, skipping: {e}", type_name::<F>()));
                return false;
            },
        };

        self.log.debug(format!("Discovered and registered feature: {}", feature.name()));
        self.index.insert(type_id, self.entries.len());
        self.entries.push(FeatureEntry {
            feature: Box::new(feature),
            required: marker.required,
            enabled: None,
            initialized: false,
        });
        true
    }

    /// Registers a default-constructed feature.
    pub fn register_default<F: Feature + Default>(&mut self, marker: Capability) -> bool {
        self.register(marker, || Ok(F::default()))
    }

    /// Lets a module contribute all of its features in one call.
    pub fn install<P: FeaturePack>(&mut self) {
        self.log.debug("Scanning for features...");
        P::register(self);
    }

    /// Typed access to the live instance of `F`, if registered.
    #[must_use]
    pub fn get<F: Feature>(&self) -> Option<&F> {
        let idx = *self.index.get(&TypeId::of::<F>())?;
        self.entries[idx].feature().as_any().downcast_ref::<F>()
    }

    /// Entry state for the feature named `name`.
    #[must_use]
    pub fn entry_by_name(&self, name: &str) -> Option<&FeatureEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// All entries, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[FeatureEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [FeatureEntry] {
        &mut self.entries
    }

    /// Snapshot of every registered feature.
    #[must_use]
    pub fn infos(&self) -> Vec<FeatureInfo> {
        self.entries.iter().map(FeatureEntry::info).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
