/// Error type features report from their hooks.
///
/// Feature crates define their own error enums; the lifecycle boundary only
/// needs something printable it can attribute to a feature name.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by a lifecycle pass.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// A feature failed during config binding or initialization while the
    /// pass was running under [`FailurePolicy::Abort`](crate::FailurePolicy::Abort).
    #[error("feature '{name}' failed to load: {source}")]
    Feature {
        name: String,
        #[source]
        source: BoxError,
    },
}
