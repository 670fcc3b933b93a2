//! Named groups of settings

use crate::comparison::NameComparison;
use crate::keyed::KeyedMap;
use crate::setting::Setting;

/// Section that receives settings appearing before any `[header]`
pub const DEFAULT_SECTION: &str = "General";

/// A named, ordered group of settings
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    settings: KeyedMap<Setting>,
}

impl Section {
    /// Create an empty section whose setting names use `comparison`
    pub fn new(name: impl Into<String>, comparison: NameComparison) -> Self {
        Self {
            name: name.into(),
            settings: KeyedMap::new(comparison),
        }
    }

    /// Section name as first written
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a setting
    pub fn get(&self, name: &str) -> Option<&Setting> {
        self.settings.get(name)
    }

    /// Look up a setting's raw value
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|s| s.value.as_str())
    }

    /// Check whether a setting exists
    pub fn contains(&self, name: &str) -> bool {
        self.settings.contains(name)
    }

    /// Set a setting's raw value
    ///
    /// A new setting is appended; an existing one keeps its position and
    /// original name. Returns `true` if an existing value was overwritten.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let mut created = false;
        let setting = self.settings.get_or_insert_with(name, || {
            created = true;
            Setting::new(name, String::new())
        });
        setting.value = value.into();
        !created
    }

    /// Remove a setting, returning whether it existed
    pub fn remove(&mut self, name: &str) -> bool {
        self.settings.remove(name).is_some()
    }

    /// Iterate settings in insertion order
    pub fn settings(&self) -> impl DoubleEndedIterator<Item = &Setting> + ExactSizeIterator + '_ {
        self.settings.values()
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Check if the section has no settings
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}
