//! Check error types.

use thiserror::Error;

/// Errors that can fail a whole check run.
///
/// Per-alert problems (an unresolvable span) never surface here; those
/// are dropped where decorations are bound. A `CheckError` always means
/// the run produced no usable result and prior results stay in place.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The linter could not be invoked or exited abnormally.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The linter's report could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
