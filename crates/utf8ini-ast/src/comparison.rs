//! Name comparison rules for sections, settings and boolean words.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How two names are compared when looking them up
///
/// Lookups hash the normalized form of a name, so two names are equal
/// exactly when their normalized forms are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameComparison {
    /// Case-insensitive, using Unicode lowercase mapping
    #[default]
    IgnoreCase,
    /// Exact, case-sensitive comparison
    Ordinal,
}

impl NameComparison {
    /// Return the lookup key for a name
    pub fn normalize<'a>(self, name: &'a str) -> Cow<'a, str> {
        match self {
            NameComparison::Ordinal => Cow::Borrowed(name),
            NameComparison::IgnoreCase => {
                if name.bytes().all(|b| b.is_ascii() && !b.is_ascii_uppercase()) {
                    Cow::Borrowed(name)
                } else {
                    Cow::Owned(name.to_lowercase())
                }
            }
        }
    }

    /// Check whether two names refer to the same entry
    pub fn matches(self, a: &str, b: &str) -> bool {
        self.normalize(a) == self.normalize(b)
    }
}
