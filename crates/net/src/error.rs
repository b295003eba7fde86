/// Errors raised by the networked-component runtime.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// A singleton send with no active instance. There is no fallback
    /// identity to address, so this propagates instead of soft-failing.
    #[error("'{type_name}' is not initialized, cannot send")]
    SingletonInactive { type_name: &'static str },
}
