//! Document options
//!
//! Options can be written as TOML and turned into a configured, empty
//! [`Document`]:
//!
//! ```toml
//! comment_marker = "#"
//! datetime_format = "%d.%m.%Y %H:%M"
//! name_comparison = "ordinal"
//! line_ending = "crlf"
//!
//! [booleans]
//! non_zero_numbers_are_true = false
//! words = [
//!     { word = "vraie", value = true },
//!     { word = "faux", value = false },
//! ]
//! ```
//!
//! Every key is optional; missing keys keep the document defaults.

use serde::{Deserialize, Serialize};
use utf8ini_ast::{
    BoolWord, BoolWords, Document, NameComparison, DEFAULT_COMMENT_MARKER,
    DEFAULT_DATETIME_FORMAT,
};

use crate::error::Result;
use crate::generator::{GeneratorConfig, LineEnding};

/// Options for building and saving a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IniOptions {
    /// Character that starts a comment line
    pub comment_marker: char,
    /// strftime pattern for datetime values
    pub datetime_format: String,
    /// Comparison for section and setting names
    pub name_comparison: NameComparison,
    /// Line terminator used when saving
    pub line_ending: LineEnding,
    /// Boolean-word table
    pub booleans: BooleanOptions,
}

impl Default for IniOptions {
    fn default() -> Self {
        Self {
            comment_marker: DEFAULT_COMMENT_MARKER,
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            name_comparison: NameComparison::default(),
            line_ending: LineEnding::default(),
            booleans: BooleanOptions::default(),
        }
    }
}

/// Boolean-word table options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BooleanOptions {
    /// Whether integers outside the word list decode as `value != 0`
    pub non_zero_numbers_are_true: bool,
    /// Comparison for word lookup
    pub comparison: NameComparison,
    /// Replacement word list; empty keeps the default words
    pub words: Vec<BoolWord>,
}

impl Default for BooleanOptions {
    fn default() -> Self {
        Self {
            non_zero_numbers_are_true: true,
            comparison: NameComparison::default(),
            words: Vec::new(),
        }
    }
}

impl BooleanOptions {
    /// Build the word table
    pub fn build(&self) -> Result<BoolWords> {
        let mut words = BoolWords::with_comparison(self.comparison);
        if !self.words.is_empty() {
            words.set_words(self.words.iter().cloned())?;
        }
        words.set_non_zero_numbers_are_true(self.non_zero_numbers_are_true);
        Ok(words)
    }
}

impl IniOptions {
    /// Parse options from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Build an empty document configured with these options
    ///
    /// # Errors
    ///
    /// Fails if the comment marker or datetime format is rejected, or the
    /// word list lacks a true or false word.
    pub fn build_document(&self) -> Result<Document> {
        let mut doc = Document::with_comparison(self.name_comparison);
        doc.set_comment_marker(self.comment_marker)?;
        doc.set_datetime_format(self.datetime_format.as_str())?;
        doc.set_bool_words(self.booleans.build()?);
        Ok(doc)
    }

    /// Generator configuration matching these options
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            line_ending: self.line_ending,
        }
    }
}
