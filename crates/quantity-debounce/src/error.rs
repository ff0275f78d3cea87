//! Flush error.

use thiserror::Error;

/// A failed flush.
///
/// The controller never classifies failures; the transport's reason is kept
/// verbatim so the UI can show it next to the Retry/Dismiss actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("flush failed: {message}")]
pub struct FlushError {
    message: String,
}

impl FlushError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable reason reported by the transport
    pub fn message(&self) -> &str {
        &self.message
    }
}
