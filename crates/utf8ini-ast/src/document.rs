//! Document root
//!
//! A [`Document`] is an ordered collection of sections plus the leading
//! comment block, together with the options that govern how typed values
//! are written and read.

use crate::comparison::NameComparison;
use crate::error::{IniError, Result};
use crate::keyed::KeyedMap;
use crate::section::Section;
use crate::setting::Setting;
use crate::value::{is_valid_datetime_format, FromSetting, ToSetting, ValueFormat};
use crate::words::BoolWords;

/// Marker that starts a comment line unless configured otherwise
pub const DEFAULT_COMMENT_MARKER: char = ';';

/// strftime equivalent of `yyyy-MM-dd HH:mm:ss.fff`
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// An INI document
#[derive(Debug, Clone)]
pub struct Document {
    sections: KeyedMap<Section>,
    comments: Vec<String>,
    bool_words: BoolWords,
    comment_marker: char,
    datetime_format: String,
}

impl Document {
    /// Create an empty document with case-insensitive names
    pub fn new() -> Self {
        Self::with_comparison(NameComparison::default())
    }

    /// Create an empty document comparing section and setting names with
    /// `comparison`
    pub fn with_comparison(comparison: NameComparison) -> Self {
        Self {
            sections: KeyedMap::new(comparison),
            comments: Vec::new(),
            bool_words: BoolWords::new(),
            comment_marker: DEFAULT_COMMENT_MARKER,
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }

    /// Comparison used for section and setting names
    pub fn name_comparison(&self) -> NameComparison {
        self.sections.comparison()
    }

    // ==================== OPTIONS ====================

    /// Character that starts a comment line
    pub fn comment_marker(&self) -> char {
        self.comment_marker
    }

    /// Change the comment marker
    ///
    /// # Errors
    ///
    /// Whitespace can never start a line after indentation is skipped, so
    /// it is rejected with [`IniError::InvalidArgument`].
    pub fn set_comment_marker(&mut self, marker: char) -> Result<()> {
        if marker.is_whitespace() {
            return Err(IniError::InvalidArgument(format!(
                "comment marker {marker:?} is whitespace"
            )));
        }
        self.comment_marker = marker;
        Ok(())
    }

    /// strftime pattern for datetime values
    pub fn datetime_format(&self) -> &str {
        &self.datetime_format
    }

    /// Change the datetime pattern
    ///
    /// # Errors
    ///
    /// Returns [`IniError::InvalidArgument`] if the pattern is empty or
    /// cannot format a date and time.
    pub fn set_datetime_format(&mut self, pattern: impl Into<String>) -> Result<()> {
        let pattern = pattern.into();
        if !is_valid_datetime_format(&pattern) {
            return Err(IniError::InvalidArgument(format!(
                "unsupported datetime format {pattern:?}"
            )));
        }
        self.datetime_format = pattern;
        Ok(())
    }

    /// Boolean-word table for `bool` values
    pub fn bool_words(&self) -> &BoolWords {
        &self.bool_words
    }

    /// Boolean-word table for modification
    pub fn bool_words_mut(&mut self) -> &mut BoolWords {
        &mut self.bool_words
    }

    /// Replace the boolean-word table
    pub fn set_bool_words(&mut self, words: BoolWords) {
        self.bool_words = words;
    }

    /// Conversion context for typed values
    pub fn value_format(&self) -> ValueFormat<'_> {
        ValueFormat::new(&self.bool_words, &self.datetime_format)
    }

    // ==================== COMMENTS ====================

    /// Comment lines, without their marker
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Append a comment line
    pub fn push_comment(&mut self, text: impl Into<String>) {
        self.comments.push(text.into());
    }

    /// Replace all comments; `None` entries are stored as empty lines
    pub fn set_comments<I, S>(&mut self, comments: I)
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.comments = comments
            .into_iter()
            .map(|c| c.map(Into::into).unwrap_or_default())
            .collect();
    }

    // ==================== SECTIONS ====================

    /// Section names in insertion order
    pub fn sections(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.sections.values().map(Section::name)
    }

    /// Sections in insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Section> + ExactSizeIterator + '_ {
        self.sections.values()
    }

    /// Look up a section
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Look up a section for modification
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Return the named section, appending it if it does not exist
    pub fn add_section(&mut self, name: &str) -> &mut Section {
        let comparison = self.sections.comparison();
        self.sections
            .get_or_insert_with(name, || Section::new(name, comparison))
    }

    /// Check whether a section exists
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains(name)
    }

    /// Settings of a section in insertion order; empty if it does not exist
    pub fn section_settings(&self, section: &str) -> impl Iterator<Item = &Setting> + '_ {
        self.sections
            .get(section)
            .into_iter()
            .flat_map(|section| section.settings())
    }

    /// Remove a section and its settings, returning whether it existed
    pub fn delete_section(&mut self, name: &str) -> bool {
        self.sections.remove(name).is_some()
    }

    // ==================== SETTINGS ====================

    /// Check whether a setting exists
    pub fn has_setting(&self, section: &str, name: &str) -> bool {
        self.section(section).is_some_and(|s| s.contains(name))
    }

    /// Raw value of a setting, or `None` if the section or setting is missing
    pub fn get_string(&self, section: &str, name: &str) -> Option<&str> {
        self.section(section)?.value(name)
    }

    /// Typed value of a setting
    ///
    /// Returns `default` if the section or setting is missing or the value
    /// does not parse as `T`.
    pub fn get_setting<T: FromSetting>(&self, section: &str, name: &str, default: T) -> T {
        self.get_string(section, name)
            .and_then(|text| T::from_setting(text, &self.value_format()))
            .unwrap_or(default)
    }

    /// Write a typed value, creating the section and setting as needed
    pub fn set_setting<V: ToSetting>(&mut self, section: &str, name: &str, value: V) {
        let text = value.to_setting(&self.value_format());
        self.add_section(section).set(name, text);
    }

    /// Remove one setting, returning whether it existed
    ///
    /// An emptied section stays in the document.
    pub fn delete_setting(&mut self, section: &str, name: &str) -> bool {
        self.section_mut(section).is_some_and(|s| s.remove(name))
    }

    // ==================== WHOLE DOCUMENT ====================

    /// Remove all sections and comments, keeping options
    pub fn clear(&mut self) {
        self.sections.clear();
        self.comments.clear();
    }

    /// Check if the document has no sections and no comments
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.comments.is_empty()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::DEFAULT_SECTION;
    use crate::words::BoolWord;
    use chrono::{NaiveDate, NaiveDateTime};

    fn sample_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 58, 250)
            .unwrap()
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.comment_marker(), ';');
        assert_eq!(doc.datetime_format(), DEFAULT_DATETIME_FORMAT);
    }

    #[test]
    fn test_typed_round_trip() {
        let mut doc = Document::new();
        let dt = sample_datetime();
        doc.set_setting("Values", "text", "hello world");
        doc.set_setting("Values", "int", -7);
        doc.set_setting("Values", "float", 2.75);
        doc.set_setting("Values", "flag", true);
        doc.set_setting("Values", "when", dt);

        assert_eq!(doc.get_string("Values", "text"), Some("hello world"));
        assert_eq!(doc.get_setting("Values", "int", 0), -7);
        assert_eq!(doc.get_setting("Values", "float", 0.0), 2.75);
        assert!(doc.get_setting("Values", "flag", false));
        assert_eq!(doc.get_setting("Values", "when", NaiveDateTime::default()), dt);
        assert_eq!(doc.get_string("Values", "when"), Some("2021-12-31 23:59:58.250"));
    }

    #[test]
    fn test_default_on_miss() {
        let mut doc = Document::new();
        doc.set_setting("S", "word", "not a number");

        assert_eq!(doc.get_setting("Missing", "x", 5), 5);
        assert_eq!(doc.get_setting("S", "missing", 5), 5);
        assert_eq!(doc.get_setting("S", "word", 5), 5);
        assert_eq!(doc.get_setting("S", "word", 1.5), 1.5);
        assert!(doc.get_setting("S", "word", true));
        assert_eq!(
            doc.get_setting("S", "word", sample_datetime()),
            sample_datetime()
        );
        assert_eq!(
            doc.get_setting("S", "missing", "fallback".to_string()),
            "fallback"
        );
        assert_eq!(doc.get_string("S", "missing"), None);
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let mut doc = Document::new();
        doc.set_setting("Section", "Key", 1);
        doc.set_setting("SECTION", "KEY", 2);

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.section_settings("section").count(), 1);
        assert_eq!(doc.get_setting("section", "key", 0), 2);
        assert_eq!(doc.sections().collect::<Vec<_>>(), vec!["Section"]);
    }

    #[test]
    fn test_ordinal_comparison() {
        let mut doc = Document::with_comparison(NameComparison::Ordinal);
        doc.set_setting("Section", "Key", 1);
        doc.set_setting("Section", "KEY", 2);

        assert_eq!(doc.get_setting("Section", "Key", 0), 1);
        assert_eq!(doc.get_setting("Section", "KEY", 0), 2);
        assert_eq!(doc.get_setting("section", "Key", 0), 0);
    }

    #[test]
    fn test_insertion_order() {
        let mut doc = Document::new();
        doc.set_setting("B", "z", 1);
        doc.set_setting("A", "y", 1);
        doc.set_setting("B", "a", 2);
        doc.set_setting("C", "x", 1);
        doc.set_setting("B", "z", 3);

        assert_eq!(doc.sections().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        let names: Vec<_> = doc.section_settings("B").map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
        assert_eq!(doc.get_string("B", "z"), Some("3"));
    }

    #[test]
    fn test_section_settings_of_missing_section() {
        let doc = Document::new();
        assert_eq!(doc.section_settings("nope").count(), 0);
    }

    #[test]
    fn test_delete() {
        let mut doc = Document::new();
        doc.set_setting("A", "x", 1);
        doc.set_setting("B", "y", 2);

        assert!(doc.delete_setting("A", "x"));
        assert!(!doc.delete_setting("A", "x"));
        assert!(!doc.delete_setting("Missing", "x"));
        assert!(doc.has_section("A"));
        assert_eq!(doc.section_settings("A").count(), 0);

        assert!(doc.delete_section("b"));
        assert!(!doc.delete_section("B"));
        assert_eq!(doc.sections().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_clear_keeps_options() {
        let mut doc = Document::with_comparison(NameComparison::Ordinal);
        doc.set_comment_marker('#').unwrap();
        doc.set_datetime_format("%Y-%m-%d").unwrap();
        doc.push_comment("header");
        doc.set_setting(DEFAULT_SECTION, "k", "v");

        doc.clear();

        assert!(doc.is_empty());
        assert_eq!(doc.sections().count(), 0);
        assert_eq!(doc.comment_marker(), '#');
        assert_eq!(doc.datetime_format(), "%Y-%m-%d");
        assert_eq!(doc.name_comparison(), NameComparison::Ordinal);
    }

    #[test]
    fn test_custom_bool_words() {
        let mut doc = Document::new();
        let mut words = BoolWords::new();
        words
            .set_words([BoolWord::new("vraie", true), BoolWord::new("faux", false)])
            .unwrap();
        words.set_non_zero_numbers_are_true(false);
        doc.set_bool_words(words);

        doc.set_setting("Section", "Setting1", "vraie");
        doc.set_setting("Section", "Setting2", "1");
        doc.set_setting("Section", "Setting3", false);

        assert!(doc.get_setting("Section", "Setting1", false));
        assert!(!doc.get_setting("Section", "Setting2", false));
        assert_eq!(doc.get_string("Section", "Setting3"), Some("faux"));
    }

    #[test]
    fn test_comments() {
        let mut doc = Document::new();
        doc.push_comment(" first");
        doc.set_comments([Some("a"), None, Some("c")]);
        assert_eq!(doc.comments(), &["a", "", "c"]);
    }

    #[test]
    fn test_invalid_options() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.set_comment_marker(' '),
            Err(IniError::InvalidArgument(_))
        ));
        assert!(matches!(
            doc.set_datetime_format(""),
            Err(IniError::InvalidArgument(_))
        ));
        assert!(matches!(
            doc.set_datetime_format("%Y-%m-%d %z"),
            Err(IniError::InvalidArgument(_))
        ));
        assert_eq!(doc.comment_marker(), ';');
        assert_eq!(doc.datetime_format(), DEFAULT_DATETIME_FORMAT);
    }

    #[test]
    fn test_pattern_that_cannot_read_back_is_rejected() {
        let mut doc = Document::new();
        for pattern in ["%Y-%m-%d %H", "%H:%M:%S", "%Y-%m"] {
            assert!(
                matches!(
                    doc.set_datetime_format(pattern),
                    Err(IniError::InvalidArgument(_))
                ),
                "pattern {pattern}"
            );
        }
        assert_eq!(doc.datetime_format(), DEFAULT_DATETIME_FORMAT);
    }

    #[test]
    fn test_hour_minute_pattern_reads_back_written_value() {
        let mut doc = Document::new();
        doc.set_datetime_format("%Y-%m-%d %H:%M").unwrap();
        let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 0)
            .unwrap();
        doc.set_setting("S", "when", dt);

        assert_eq!(doc.get_string("S", "when"), Some("2024-03-05 14:07"));
        assert_eq!(doc.get_setting("S", "when", NaiveDateTime::default()), dt);
    }
}
