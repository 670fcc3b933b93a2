//! utf8ini-core - INI settings, line by line
//!
//! Core library for utf8ini, providing the INI parser and generator for
//! `utf8ini_ast::Document`.
//!
//! # Example
//!
//! ```
//! use utf8ini_core::{generate, parse_str};
//!
//! let doc = parse_str("[Server]\nport=8080\nverbose=yes\n");
//! assert_eq!(doc.get_setting("server", "PORT", 0), 8080);
//! assert!(doc.get_setting("Server", "verbose", false));
//!
//! let text = generate(&doc);
//! assert_eq!(text, "[Server]\nport=8080\nverbose=yes\n");
//! ```
//!
//! # Features
//!
//! - `async` (default): [`load_async`] and [`save_async`] over tokio's
//!   `AsyncBufRead` / `AsyncWrite`

pub mod error;
pub mod generator;
pub mod options;
pub mod parser;
#[cfg(feature = "async")]
pub mod stream;

// Re-export main types and functions
pub use error::{Error, Result};
pub use generator::{
    generate, generate_with_config, save, save_with_config, GeneratorConfig, IniGenerator,
    LineEnding,
};
pub use options::{BooleanOptions, IniOptions};
pub use parser::{load, load_str, parse_str, LineParser};
#[cfg(feature = "async")]
pub use stream::{load_async, save_async, save_async_with_config};

pub use utf8ini_ast as ast;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
