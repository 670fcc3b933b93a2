//! utf8ini-ast - In-memory INI document model
//!
//! This crate provides the types used by utf8ini to represent settings:
//! a [`Document`] of ordered [`Section`]s, each an ordered collection of
//! [`Setting`]s, plus the [`BoolWords`] table used for boolean values.
//!
//! # Example
//!
//! ```
//! use utf8ini_ast::Document;
//!
//! let mut doc = Document::new();
//! doc.set_setting("Window", "Width", 800);
//! doc.set_setting("Window", "Maximized", true);
//!
//! assert_eq!(doc.get_setting("window", "width", 0), 800);
//! assert!(doc.get_setting("Window", "Maximized", false));
//! assert_eq!(doc.get_setting("Window", "Height", 600), 600);
//! ```

pub mod comparison;
pub mod document;
pub mod error;
pub mod keyed;
pub mod section;
pub mod setting;
pub mod value;
pub mod words;

pub use comparison::NameComparison;
pub use document::{Document, DEFAULT_COMMENT_MARKER, DEFAULT_DATETIME_FORMAT};
pub use error::{IniError, Result};
pub use keyed::KeyedMap;
pub use section::{Section, DEFAULT_SECTION};
pub use setting::Setting;
pub use value::{FromSetting, ToSetting, ValueFormat};
pub use words::{BoolWord, BoolWords, DEFAULT_BOOL_WORDS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
