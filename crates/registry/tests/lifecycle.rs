use modlink_kernel::config::{ConfigFile, ConfigSection};
use modlink_registry::{
    BoxError, Capability, FailurePolicy, Feature, FeatureManager, FeatureRegistry, InitContext,
    LifecycleError,
};
use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared counters a fixture feature bumps from its hooks.
#[derive(Clone, Default)]
struct Probe {
    configured: Arc<AtomicUsize>,
    initialized: Arc<AtomicUsize>,
}

impl Probe {
    fn configured(&self) -> usize {
        self.configured.load(Ordering::SeqCst)
    }
    fn initialized(&self) -> usize {
        self.initialized.load(Ordering::SeqCst)
    }
}

struct Flashlight {
    probe: Probe,
}

impl Feature for Flashlight {
    fn name(&self) -> &str {
        "Flashlight"
    }
    fn description(&self) -> &str {
        "A toggleable flashlight"
    }
    fn configure(&mut self, _section: &ConfigSection) -> Result<(), BoxError> {
        self.probe.configured.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
    fn initialize(&mut self, cx: &InitContext) -> Result<(), BoxError> {
        cx.log().debug("wiring flashlight input");
        self.probe.initialized.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct VoiceChat {
    probe: Probe,
}

impl Feature for VoiceChat {
    fn name(&self) -> &str {
        "VoiceChat"
    }
    fn description(&self) -> &str {
        "Proximity voice chat"
    }
    fn configure(&mut self, _section: &ConfigSection) -> Result<(), BoxError> {
        self.probe.configured.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
    fn initialize(&mut self, _cx: &InitContext) -> Result<(), BoxError> {
        self.probe.initialized.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Default)]
struct Faulty;

impl Feature for Faulty {
    fn name(&self) -> &str {
        "Faulty"
    }
    fn description(&self) -> &str {
        "Always fails to initialize"
    }
    fn initialize(&mut self, _cx: &InitContext) -> Result<(), BoxError> {
        Err("no audio device".into())
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn manager_with(config: ConfigFile, build: impl FnOnce(&mut FeatureRegistry)) -> FeatureManager {
    let mut registry = FeatureRegistry::new();
    build(&mut registry);
    FeatureManager::new(registry, config)
}

#[test]
fn required_features_get_no_enabled_switch() {
    let probe = Probe::default();
    let p = probe.clone();
    let mut manager = manager_with(ConfigFile::empty(), |r| {
        r.register(Capability::required(), move || Ok(Flashlight { probe: p }));
    });

    let report = manager.initialize_all(FailurePolicy::Isolate).unwrap();

    assert!(report.all_ok());
    assert_eq!(probe.initialized(), 1);
    assert!(manager.registry().entry_by_name("Flashlight").unwrap().enabled());
    assert!(!manager.config().has_entry("Flashlight", "Enabled"));
}

#[test]
fn optional_features_default_to_enabled() {
    let probe = Probe::default();
    let p = probe.clone();
    let mut manager = manager_with(ConfigFile::empty(), |r| {
        r.register(Capability::optional(), move || Ok(Flashlight { probe: p }));
    });

    let report = manager.initialize_all(FailurePolicy::Isolate).unwrap();

    assert!(report.all_ok());
    assert_eq!(report.initialized, ["Flashlight"]);
    assert_eq!(probe.initialized(), 1);
    assert!(manager.config().has_entry("Flashlight", "Enabled"));

    let defs = manager.config().definitions();
    assert_eq!(defs[0].description, "Enables feature: A toggleable flashlight");
}

#[test]
fn stored_false_disables_the_feature() {
    let config = ConfigFile::from_toml("[Flashlight]\nEnabled = false").unwrap();
    let probe = Probe::default();
    let p = probe.clone();
    let mut manager = manager_with(config, |r| {
        r.register(Capability::optional(), move || Ok(Flashlight { probe: p }));
    });

    let report = manager.initialize_all(FailurePolicy::Isolate).unwrap();

    assert_eq!(report.disabled, ["Flashlight"]);
    assert_eq!(probe.configured(), 1);
    assert_eq!(probe.initialized(), 0);
    assert!(!manager.registry().entry_by_name("Flashlight").unwrap().enabled());
}

#[test]
fn isolate_policy_records_the_failure_and_continues() {
    let probe = Probe::default();
    let p = probe.clone();
    let mut manager = manager_with(ConfigFile::empty(), |r| {
        r.register_default::<Faulty>(Capability::optional());
        r.register(Capability::optional(), move || Ok(VoiceChat { probe: p }));
    });

    let report = manager.initialize_all(FailurePolicy::Isolate).unwrap();

    assert!(!report.all_ok());
    assert_eq!(report.failed, ["Faulty"]);
    assert_eq!(report.initialized, ["VoiceChat"]);
    assert_eq!(probe.configured(), 1);
    assert_eq!(probe.initialized(), 1);
}

#[test]
fn abort_policy_stops_at_the_first_failure() {
    let probe = Probe::default();
    let p = probe.clone();
    let mut manager = manager_with(ConfigFile::empty(), |r| {
        r.register_default::<Faulty>(Capability::optional());
        r.register(Capability::optional(), move || Ok(VoiceChat { probe: p }));
    });

    let err = manager.initialize_all(FailurePolicy::Abort).unwrap_err();
    let LifecycleError::Feature { name, .. } = err;
    assert_eq!(name, "Faulty");

    // The feature after the faulting one was never processed.
    assert_eq!(probe.configured(), 0);
    assert_eq!(probe.initialized(), 0);
}

#[test]
fn initialize_runs_at_most_once() {
    let probe = Probe::default();
    let p = probe.clone();
    let mut manager = manager_with(ConfigFile::empty(), |r| {
        r.register(Capability::optional(), move || Ok(Flashlight { probe: p }));
    });

    manager.initialize_all(FailurePolicy::Isolate).unwrap();
    manager.initialize_all(FailurePolicy::Isolate).unwrap();

    assert_eq!(probe.initialized(), 1);
}

#[test]
fn config_binding_failure_is_isolated_like_any_other() {
    // A stored "Enabled" of the wrong type fails the binding step.
    let config = ConfigFile::from_toml("[Faulty]\nEnabled = \"definitely\"").unwrap();
    let probe = Probe::default();
    let p = probe.clone();
    let mut manager = manager_with(config, |r| {
        r.register_default::<Faulty>(Capability::optional());
        r.register(Capability::optional(), move || Ok(VoiceChat { probe: p }));
    });

    let report = manager.initialize_all(FailurePolicy::Isolate).unwrap();

    assert_eq!(report.failed, ["Faulty"]);
    assert_eq!(probe.initialized(), 1);
}
