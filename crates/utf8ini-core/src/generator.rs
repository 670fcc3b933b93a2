//! INI Generator
//!
//! This module renders a `utf8ini_ast::Document` as INI text.
//!
//! Output is canonical rather than a copy of the original layout: all
//! comments come first, then each section that has at least one setting,
//! separated by a blank line.
//!
//! # Example
//!
//! ```
//! use utf8ini_ast::Document;
//! use utf8ini_core::generate;
//!
//! let mut doc = Document::new();
//! doc.push_comment(" saved by the app");
//! doc.set_setting("Window", "Width", 800);
//! doc.add_section("Empty");
//!
//! assert_eq!(generate(&doc), "; saved by the app\n\n[Window]\nWidth=800\n");
//! ```

use std::fmt::{self, Write as _};
use std::io;
use std::iter;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utf8ini_ast::{Document, Setting};

/// Line terminator written after every output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator text
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// INI generator configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Terminator for each line
    pub line_ending: LineEnding,
}

/// One output line, without its terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Comment marker followed by the comment text
    Comment(char, &'a str),
    /// Separator before a section
    Blank,
    /// `[name]`
    Header(&'a str),
    /// `name=value`
    Setting(&'a Setting),
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Comment(marker, text) => write!(f, "{}{}", marker, text),
            Line::Blank => Ok(()),
            Line::Header(name) => write!(f, "[{}]", name),
            Line::Setting(setting) => write!(f, "{}", setting),
        }
    }
}

/// The lines of a document's canonical text, in output order
pub fn lines(doc: &Document) -> impl Iterator<Item = Line<'_>> + '_ {
    let marker = doc.comment_marker();
    let comments = doc
        .comments()
        .iter()
        .map(move |text| Line::Comment(marker, text.as_str()));

    let mut emitted = !doc.comments().is_empty();
    let sections = doc
        .iter()
        .filter(|section| !section.is_empty())
        .flat_map(move |section| {
            let separator = std::mem::replace(&mut emitted, true).then_some(Line::Blank);
            separator
                .into_iter()
                .chain(iter::once(Line::Header(section.name())))
                .chain(section.settings().map(Line::Setting))
        });

    comments.chain(sections)
}

/// INI generator
pub struct IniGenerator {
    config: GeneratorConfig,
}

impl IniGenerator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate INI text for a document
    pub fn generate(&self, doc: &Document) -> String {
        let eol = self.config.line_ending.as_str();
        let mut output = String::new();
        for line in lines(doc) {
            // Formatting into a String cannot fail.
            let _ = write!(output, "{}{}", line, eol);
        }
        output
    }

    /// Write INI text for a document to `writer`, then flush it
    pub fn write_to<W: io::Write>(&self, doc: &Document, mut writer: W) -> io::Result<()> {
        let eol = self.config.line_ending.as_str();
        let mut sections = 0;
        let mut settings = 0;

        for line in lines(doc) {
            match line {
                Line::Header(_) => sections += 1,
                Line::Setting(_) => settings += 1,
                _ => {}
            }
            write!(writer, "{}{}", line, eol)?;
        }
        writer.flush()?;

        debug!("Saved {} sections with {} settings", sections, settings);
        Ok(())
    }
}

impl Default for IniGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate INI text with default configuration
pub fn generate(doc: &Document) -> String {
    IniGenerator::new().generate(doc)
}

/// Generate INI text with custom configuration
pub fn generate_with_config(doc: &Document, config: GeneratorConfig) -> String {
    IniGenerator::with_config(config).generate(doc)
}

/// Write a document to `writer` with default configuration
///
/// # Errors
///
/// Write errors are returned unchanged as [`Error::Io`](crate::Error::Io).
pub fn save<W: io::Write>(doc: &Document, writer: W) -> crate::Result<()> {
    save_with_config(doc, writer, GeneratorConfig::default())
}

/// Write a document to `writer` with custom configuration
pub fn save_with_config<W: io::Write>(
    doc: &Document,
    writer: W,
    config: GeneratorConfig,
) -> crate::Result<()> {
    IniGenerator::with_config(config).write_to(doc, writer)?;
    Ok(())
}
