//! Name/value pairs

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single `name=value` entry within a section
///
/// The value is always text; typed access converts on the way in and out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Setting {
    /// Setting name as first written
    pub name: String,
    /// Raw value text, empty when no value was given
    pub value: String,
}

impl Setting {
    /// Create a setting
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Setting::new("key", " spaced ").to_string(), "key= spaced ");
        assert_eq!(Setting::new("flag", "").to_string(), "flag=");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Setting::new("a", "1")).unwrap();
        assert_eq!(json, r#"{"name":"a","value":"1"}"#);

        let back: Setting = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Setting::new("a", "1"));
    }
}
