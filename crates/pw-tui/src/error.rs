//! TUI-specific error types.

use thiserror::Error;

/// Errors that can occur in the TUI.
///
/// Load failures are not errors at this level: they are shown in the
/// dashboard and the application keeps running.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TuiError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
