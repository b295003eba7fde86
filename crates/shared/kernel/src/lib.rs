//! Kernel utilities shared across the extension API.
//! Keep this crate lightweight; it provides the per-feature configuration
//! store and the scoped logging facade the rest of the workspace builds on.
//!
//! ## Config binding
//! ```rust
//! use modlink_kernel::config::ConfigFile;
//!
//! let file = ConfigFile::from_toml("[Flashlight]\nEnabled = false").unwrap();
//! let section = file.section("Flashlight");
//! let enabled = section.bind("Enabled", true, "Enables feature: Flashlight").unwrap();
//! assert!(!enabled.value());
//! ```
//!
//! ## Scoped logging
//! ```rust
//! use modlink_kernel::log::ScopedLog;
//!
//! let log = ScopedLog::new("FeatureManager");
//! log.info("Scanning for features...");
//! let bound = log.child("Flashlight");
//! bound.warning("battery low");
//! ```

pub mod config;
pub mod log;

pub use modlink_domain as domain;
