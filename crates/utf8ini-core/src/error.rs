//! Error types for loading, saving and configuring documents.

use thiserror::Error;
use utf8ini_ast::IniError;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, writing or configuring a document
#[derive(Debug, Error)]
pub enum Error {
    /// Document configuration was rejected
    #[error(transparent)]
    Document(#[from] IniError),

    /// The underlying stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An options file is not valid TOML for [`IniOptions`](crate::IniOptions)
    #[error("Options error: {0}")]
    Config(#[from] toml::de::Error),
}
