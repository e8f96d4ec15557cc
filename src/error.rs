use thiserror::Error;

/// Failures a portal operation can report back to the webview.
///
/// The canned sources never produce `Timeout` or `Upstream`; those exist for
/// real backends plugged in behind the same state machines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("{0}")]
    Validation(String),
    #[error("{operation} did not finish within {after_ms}ms")]
    Timeout { operation: String, after_ms: u64 },
    #[error("upstream service failed: {0}")]
    Upstream(String),
    #[error("operation cancelled")]
    Cancelled,
}

impl OperationError {
    pub fn validation(message: impl Into<String>) -> Self {
        OperationError::Validation(message.into())
    }

    /// Whether the user should see this error as a toast.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, OperationError::Cancelled)
    }
}
