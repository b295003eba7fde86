use serde::{Deserialize, Serialize};

/// Snapshot of a registered feature, for host introspection.
///
/// `enabled` reflects the last lifecycle pass: required features are always
/// enabled, optional ones follow their bound configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureInfo {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub enabled: bool,
}
