//! Error types for task log handling

use thiserror::Error;

/// Result type alias for tasklog operations
pub type Result<T> = std::result::Result<T, TaskLogError>;

/// Errors produced while loading or parsing task logs
#[derive(Debug, Error)]
pub enum TaskLogError {
    /// Failed to read a log file from disk
    #[error("Read error: {0}")]
    ReadError(String),

    /// Input ended inside a quoted span (strict mode only)
    #[error("Unclosed quote opened at byte {position}")]
    UnclosedQuote {
        /// Byte offset of the opening quote character
        position: usize,
    },
}
