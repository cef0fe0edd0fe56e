//! Error types for moltool core operations.
//!
//! Every failure except [`MolToolError::InputClosed`] is recoverable: the
//! prompt loops print it and ask again. The CLI layer decides what to do
//! with the unrecoverable kind.

use thiserror::Error;

/// Result type alias for moltool operations.
pub type Result<T> = std::result::Result<T, MolToolError>;

/// Core error type for moltool operations.
#[derive(Debug, Error)]
pub enum MolToolError {
    /// The input stream ended (or failed) while a prompt was waiting
    #[error("got nil response. Program exited.")]
    InputClosed,

    /// Filesystem or console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed file contents reported by a format reader
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl MolToolError {
    /// Whether a prompt loop may print this error and ask again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, MolToolError::InputClosed)
    }
}

impl From<serde_json::Error> for MolToolError {
    fn from(err: serde_json::Error) -> Self {
        MolToolError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_closed_is_not_recoverable() {
        assert!(!MolToolError::InputClosed.is_recoverable());
        assert!(MolToolError::Parse("bad".into()).is_recoverable());
    }

    #[test]
    fn test_io_error_display() {
        let err: MolToolError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
