use std::borrow::Cow;
use std::fmt::Display;

/// Leveled logging facade tagged with a source name and an optional scope.
///
/// The host's subsystems create one per source (`ScopedLog::new("FeatureManager")`)
/// and hand features a narrower binding via [`ScopedLog::child`], so every
/// record carries who emitted it without threading strings through call sites.
/// Records flow into the global `tracing` subscriber.
#[derive(Debug, Clone)]
pub struct ScopedLog {
    source: Cow<'static, str>,
    scope: Option<Cow<'static, str>>,
}

impl ScopedLog {
    #[must_use]
    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        Self { source: source.into(), scope: None }
    }

    /// The same source, re-bound to a narrower scope (a feature or component name).
    #[must_use]
    pub fn child(&self, scope: impl Into<Cow<'static, str>>) -> Self {
        Self { source: self.source.clone(), scope: Some(scope.into()) }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    fn scope_str(&self) -> &str {
        self.scope.as_deref().unwrap_or("")
    }

    pub fn debug(&self, msg: impl Display) {
        tracing::debug!(source = %self.source, scope = %self.scope_str(), "{}", msg);
    }

    /// Plain host-console message; carries no severity beyond info.
    pub fn message(&self, msg: impl Display) {
        tracing::info!(source = %self.source, scope = %self.scope_str(), "{}", msg);
    }

    pub fn info(&self, msg: impl Display) {
        tracing::info!(source = %self.source, scope = %self.scope_str(), "{}", msg);
    }

    pub fn warning(&self, msg: impl Display) {
        tracing::warn!(source = %self.source, scope = %self.scope_str(), "{}", msg);
    }

    pub fn error(&self, msg: impl Display) {
        tracing::error!(source = %self.source, scope = %self.scope_str(), "{}", msg);
    }

    /// An error the emitting feature cannot continue past.
    pub fn fatal(&self, msg: impl Display) {
        tracing::error!(source = %self.source, scope = %self.scope_str(), fatal = true, "{}", msg);
    }
}
