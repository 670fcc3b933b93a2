//! Error types for the document model.

use thiserror::Error;

/// Result type for document model operations
pub type Result<T> = std::result::Result<T, IniError>;

/// Errors raised synchronously by document and boolean-table configuration
///
/// Missing or unparsable values are never errors; typed getters fall back
/// to the caller's default instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IniError {
    /// A required argument cannot be used
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A boolean-word table lacks a true word or a false word
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
