use config::{Config, Environment, File, FileFormat};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Custom error type for the configuration store.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failure in the underlying configuration source (parse error, stored
    /// value of the wrong type, malformed environment override).
    #[error("config source error: {0}")]
    Source(#[from] config::ConfigError),
}

/// A bound entry definition, kept for introspection and config-file generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDef {
    pub section: String,
    pub key: String,
    pub description: String,
}

/// Persisted key/value settings with per-feature named sections.
///
/// Values come from a layered lookup: a base file (TOML et al.) overlaid with
/// `MODLINK__SECTION__KEY` environment variables, the same strategy the rest
/// of the platform uses for service configuration. Entries bound through a
/// [`ConfigSection`] fall back to their declared default when the store holds
/// no value.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    source: Arc<Config>,
    definitions: Arc<RwLock<Vec<EntryDef>>>,
}

impl ConfigFile {
    /// Loads settings from `path` (defaulting to a `modlink` file in the
    /// working directory) overlaid with `MODLINK__`-prefixed environment
    /// variables. A missing file is not an error; a fresh host starts with
    /// defaults only.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let effective_path = path.unwrap_or_else(|| PathBuf::from("modlink"));

        let builder = Config::builder()
            .add_source(File::from(effective_path.as_path()).required(false))
            .add_source(
                Environment::with_prefix("MODLINK")
                    .separator("__")
                    .convert_case(config::Case::Snake),
            );

        info!("Loading config from {}", effective_path.display());

        Ok(Self { source: Arc::new(builder.build()?), definitions: Arc::default() })
    }

    /// Builds a store from an in-memory TOML document. No environment overlay.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let source = Config::builder().add_source(File::from_str(toml, FileFormat::Toml)).build()?;
        Ok(Self { source: Arc::new(source), definitions: Arc::default() })
    }

    /// A store with no persisted values; every bound entry takes its default.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fresh view of the named section.
    #[must_use]
    pub fn section(&self, name: impl Into<String>) -> ConfigSection {
        ConfigSection { file: self.clone(), name: name.into() }
    }

    /// Whether an entry has been bound under `section`/`key`.
    #[must_use]
    pub fn has_entry(&self, section: &str, key: &str) -> bool {
        self.definitions.read().iter().any(|d| d.section == section && d.key == key)
    }

    /// All entry definitions bound so far, in binding order.
    #[must_use]
    pub fn definitions(&self) -> Vec<EntryDef> {
        self.definitions.read().clone()
    }
}

/// A named grouping of settings bound to one feature.
#[derive(Debug, Clone)]
pub struct ConfigSection {
    file: ConfigFile,
    name: String,
}

impl ConfigSection {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binds `key` to a settable value cell.
    ///
    /// The stored value wins over `default`; a missing value is not an error.
    /// The entry is recorded with its `description` so the host can label the
    /// generated configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Source`] when the store holds a value of the
    /// wrong type for `T`.
    pub fn bind<T>(
        &self,
        key: impl Into<String>,
        default: T,
        description: impl Into<String>,
    ) -> Result<ConfigEntry<T>, ConfigError>
    where
        T: DeserializeOwned + Clone + Send + Sync,
    {
        let key = key.into();
        let description = description.into();

        let value = match self.file.source.get::<T>(&format!("{}.{}", self.name, key)) {
            Ok(stored) => stored,
            Err(config::ConfigError::NotFound(_)) => default,
            Err(e) => return Err(e.into()),
        };

        self.file.definitions.write().push(EntryDef {
            section: self.name.clone(),
            key: key.clone(),
            description: description.clone(),
        });

        Ok(ConfigEntry { cell: Arc::new(RwLock::new(value)), key, description })
    }

    /// Raw stored value under `key`, if any. Defaults are not consulted.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.file.source.get::<T>(&format!("{}.{}", self.name, key)).ok()
    }
}

/// A settable value cell produced by [`ConfigSection::bind`].
#[derive(Debug, Clone)]
pub struct ConfigEntry<T> {
    cell: Arc<RwLock<T>>,
    key: String,
    description: String,
}

impl<T: Clone> ConfigEntry<T> {
    /// The current value: stored, set, or default.
    #[must_use]
    pub fn value(&self) -> T {
        self.cell.read().clone()
    }

    /// Replaces the live value. Persistence is the host's concern.
    pub fn set(&self, value: T) {
        *self.cell.write() = value;
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
