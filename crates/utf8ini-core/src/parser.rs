//! INI Parser
//!
//! This module reads INI text line by line into a `utf8ini_ast::Document`.
//!
//! # Line Rules
//!
//! Leading whitespace is skipped, then the first character decides:
//!
//! - Comment marker (default `;`): the rest of the line is stored as a comment
//! - `[`: a section header; the name runs to the next `]` or the end of line
//! - Anything else: a setting, `name=value` or a bare `name`
//!
//! Names are trimmed; values are kept exactly as written after the first
//! `=`. Settings before any header go to the [`DEFAULT_SECTION`]. Lines
//! that yield an empty name are ignored.
//!
//! # Example
//!
//! ```
//! use utf8ini_core::parser;
//!
//! let doc = parser::parse_str("; app settings\n[Window]\nWidth = 800\n");
//! assert_eq!(doc.comments(), &[" app settings"]);
//! assert_eq!(doc.get_setting("Window", "Width", 0), 800);
//! assert_eq!(doc.get_string("Window", "Width"), Some(" 800"));
//! ```

use std::io::BufRead;

use tracing::{debug, trace};
use utf8ini_ast::{Document, DEFAULT_SECTION};

use crate::error::Result;

/// Line-at-a-time parser state
///
/// The only state carried between lines is the current section, so a
/// document fed the same lines ends up identical however the lines were
/// obtained.
pub struct LineParser<'a> {
    doc: &'a mut Document,
    marker: char,
    current: Option<String>,
    line_number: usize,
}

impl<'a> LineParser<'a> {
    /// Start loading into `doc`, clearing its sections and comments
    pub fn new(doc: &'a mut Document) -> Self {
        doc.clear();
        let marker = doc.comment_marker();
        Self {
            doc,
            marker,
            current: None,
            line_number: 0,
        }
    }

    /// Process one line, without its line terminator
    pub fn feed(&mut self, line: &str) {
        self.line_number += 1;

        let content = line.trim_start();
        let Some(first) = content.chars().next() else {
            trace!(line = self.line_number, "skipping blank line");
            return;
        };

        if first == self.marker {
            self.doc.push_comment(&content[first.len_utf8()..]);
        } else if first == '[' {
            self.open_section(&content[1..]);
        } else {
            self.add_setting(content);
        }
    }

    /// Finish loading
    pub fn finish(self) {
        debug!(
            "Loaded {} sections and {} comments from {} lines",
            self.doc.len(),
            self.doc.comments().len(),
            self.line_number
        );
    }

    fn open_section(&mut self, rest: &str) {
        let name = match rest.find(']') {
            Some(end) => &rest[..end],
            None => rest,
        }
        .trim();

        if name.is_empty() {
            trace!(line = self.line_number, "ignoring section header without a name");
            return;
        }

        self.doc.add_section(name);
        self.current = Some(name.to_string());
    }

    fn add_setting(&mut self, content: &str) {
        let (name, value) = match content.split_once('=') {
            Some((name, value)) => (name.trim(), value),
            None => (content.trim(), ""),
        };

        if name.is_empty() {
            trace!(line = self.line_number, "ignoring setting without a name");
            return;
        }

        let section = self
            .current
            .get_or_insert_with(|| DEFAULT_SECTION.to_string());
        if self.doc.add_section(section).set(name, value) {
            debug!(
                line = self.line_number,
                "Setting {}.{} overrides an earlier value", section, name
            );
        }
    }
}

/// Load INI text from a buffered reader into `doc`
///
/// The document is cleared first; its options are kept. Lines may end in
/// `\n` or `\r\n`.
///
/// # Errors
///
/// Any read error, including invalid UTF-8, is returned as
/// [`Error::Io`](crate::Error::Io). Lines read before the failure remain
/// in the document.
pub fn load<R: BufRead>(doc: &mut Document, reader: R) -> Result<()> {
    let mut parser = LineParser::new(doc);
    for line in reader.lines() {
        parser.feed(&line?);
    }
    parser.finish();
    Ok(())
}

/// Load INI text from a string into `doc`
pub fn load_str(doc: &mut Document, text: &str) {
    let mut parser = LineParser::new(doc);
    for line in text.lines() {
        parser.feed(line);
    }
    parser.finish();
}

/// Parse INI text into a new document with default options
pub fn parse_str(text: &str) -> Document {
    let mut doc = Document::new();
    load_str(&mut doc, text);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(doc: &Document, section: &str) -> Vec<String> {
        doc.section_settings(section).map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_default_section() {
        let doc = parse_str("a=1\nb\n");
        assert_eq!(doc.sections().collect::<Vec<_>>(), vec![DEFAULT_SECTION]);
        assert_eq!(doc.get_string(DEFAULT_SECTION, "a"), Some("1"));
        assert_eq!(doc.get_string(DEFAULT_SECTION, "b"), Some(""));
    }

    #[test]
    fn test_value_is_not_trimmed() {
        let doc = parse_str("  key  =  spaced value \n");
        assert_eq!(doc.get_string(DEFAULT_SECTION, "key"), Some("  spaced value "));
    }

    #[test]
    fn test_value_keeps_later_equals() {
        let doc = parse_str("a = b = c");
        assert_eq!(doc.get_string(DEFAULT_SECTION, "a"), Some(" b = c"));
    }

    #[test]
    fn test_unterminated_header() {
        let doc = parse_str("[ Open Section \nx=1");
        assert_eq!(doc.sections().collect::<Vec<_>>(), vec!["Open Section"]);
        assert_eq!(names(&doc, "open section"), vec!["x"]);
    }

    #[test]
    fn test_header_trailing_text_ignored() {
        let doc = parse_str("[Name] trailing ; stuff\nx=1");
        assert_eq!(doc.sections().collect::<Vec<_>>(), vec!["Name"]);
    }

    #[test]
    fn test_empty_header_keeps_current_section() {
        let doc = parse_str("[A]\nx=1\n[]\ny=2\n[   ]\nz=3");
        assert_eq!(doc.len(), 1);
        assert_eq!(names(&doc, "A"), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_name_ignored() {
        let doc = parse_str("=orphan\n   = also\n\t\n");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_comment_not_trimmed() {
        let doc = parse_str("   ;  indented comment  \n;\n");
        assert_eq!(doc.comments(), &["  indented comment  ", ""]);
    }

    #[test]
    fn test_reload_clears() {
        let mut doc = parse_str(";c\n[A]\nx=1");
        load_str(&mut doc, "[B]\ny=2");
        assert_eq!(doc.sections().collect::<Vec<_>>(), vec!["B"]);
        assert!(doc.comments().is_empty());
    }

    #[test]
    fn test_load_from_reader() {
        let input = b"[A]\r\nx=1\r\ny = two\r\n" as &[u8];
        let mut doc = Document::new();
        load(&mut doc, input).unwrap();
        assert_eq!(doc.get_string("A", "x"), Some("1"));
        assert_eq!(doc.get_string("A", "y"), Some(" two"));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let input = b"[A]\nx=\xff\xfe\n" as &[u8];
        let mut doc = Document::new();
        let err = load(&mut doc, input).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
        // Lines before the failure are kept
        assert!(doc.has_section("A"));
    }
}
