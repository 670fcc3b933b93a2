//! Boolean-word table
//!
//! Translates between boolean values and the words used to write them.
//! Decoding accepts every word in the table; encoding always produces the
//! canonical true or false word.
//!
//! # Example
//!
//! ```
//! use utf8ini_ast::{BoolWord, BoolWords};
//!
//! let mut words = BoolWords::new();
//! assert_eq!(words.try_decode("Yes"), Some(true));
//! assert_eq!(words.try_decode("42"), Some(true));
//!
//! words
//!     .set_words([BoolWord::new("vraie", true), BoolWord::new("faux", false)])
//!     .unwrap();
//! assert_eq!(words.encode(false), "faux");
//! assert_eq!(words.try_decode("yes"), None);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::comparison::NameComparison;
use crate::error::{IniError, Result};

/// Words recognized by a default table, canonical words first
pub const DEFAULT_BOOL_WORDS: [(&str, bool); 8] = [
    ("true", true),
    ("false", false),
    ("yes", true),
    ("no", false),
    ("on", true),
    ("off", false),
    ("1", true),
    ("0", false),
];

/// A word and the boolean it stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolWord {
    /// The word as written in a value
    pub word: String,
    /// The boolean it decodes to
    pub value: bool,
}

impl BoolWord {
    /// Create a word entry
    pub fn new(word: impl Into<String>, value: bool) -> Self {
        Self {
            word: word.into(),
            value,
        }
    }
}

/// Configurable string/boolean translation
#[derive(Debug, Clone)]
pub struct BoolWords {
    comparison: NameComparison,
    words: Vec<BoolWord>,
    lookup: HashMap<String, bool>,
    true_word: String,
    false_word: String,
    non_zero_numbers_are_true: bool,
}

impl BoolWords {
    /// Create the default table with case-insensitive lookup
    pub fn new() -> Self {
        Self::with_comparison(NameComparison::default())
    }

    /// Create the default table with the given lookup comparison
    pub fn with_comparison(comparison: NameComparison) -> Self {
        let words: Vec<BoolWord> = DEFAULT_BOOL_WORDS
            .iter()
            .map(|&(word, value)| BoolWord::new(word, value))
            .collect();
        let lookup = build_lookup(comparison, &words);

        Self {
            comparison,
            words,
            lookup,
            true_word: "true".to_string(),
            false_word: "false".to_string(),
            non_zero_numbers_are_true: true,
        }
    }

    /// Replace the whole table
    ///
    /// The first word of each polarity becomes canonical. Later duplicates
    /// of a word override earlier ones for decoding.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::InvalidConfiguration`] if no word maps to `true`
    /// or none maps to `false`. The table is left unchanged.
    pub fn set_words<I>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = BoolWord>,
    {
        let words: Vec<BoolWord> = words.into_iter().collect();

        let true_word = words
            .iter()
            .find(|w| w.value)
            .map(|w| w.word.clone())
            .ok_or_else(|| {
                IniError::InvalidConfiguration("no boolean word maps to true".to_string())
            })?;
        let false_word = words
            .iter()
            .find(|w| !w.value)
            .map(|w| w.word.clone())
            .ok_or_else(|| {
                IniError::InvalidConfiguration("no boolean word maps to false".to_string())
            })?;

        self.lookup = build_lookup(self.comparison, &words);
        self.words = words;
        self.true_word = true_word;
        self.false_word = false_word;
        Ok(())
    }

    /// The words of the table, in the order they were supplied
    pub fn words(&self) -> &[BoolWord] {
        &self.words
    }

    /// The comparison used for word lookup
    pub fn comparison(&self) -> NameComparison {
        self.comparison
    }

    /// Canonical word for `true`
    pub fn true_word(&self) -> &str {
        &self.true_word
    }

    /// Canonical word for `false`
    pub fn false_word(&self) -> &str {
        &self.false_word
    }

    /// Whether integers outside the table decode as `value != 0`
    pub fn non_zero_numbers_are_true(&self) -> bool {
        self.non_zero_numbers_are_true
    }

    /// Enable or disable the numeric fallback
    pub fn set_non_zero_numbers_are_true(&mut self, enabled: bool) {
        self.non_zero_numbers_are_true = enabled;
    }

    /// Encode a boolean as its canonical word
    pub fn encode(&self, value: bool) -> &str {
        if value {
            &self.true_word
        } else {
            &self.false_word
        }
    }

    /// Decode a word, returning `None` if it is not recognized
    ///
    /// Surrounding whitespace is ignored.
    pub fn try_decode(&self, word: &str) -> Option<bool> {
        let word = word.trim();
        if let Some(&value) = self.lookup.get(self.comparison.normalize(word).as_ref()) {
            return Some(value);
        }
        if self.non_zero_numbers_are_true {
            if let Ok(number) = word.parse::<i64>() {
                return Some(number != 0);
            }
        }
        None
    }
}

impl Default for BoolWords {
    fn default() -> Self {
        Self::new()
    }
}

fn build_lookup(comparison: NameComparison, words: &[BoolWord]) -> HashMap<String, bool> {
    words
        .iter()
        .map(|w| (comparison.normalize(&w.word).into_owned(), w.value))
        .collect()
}
