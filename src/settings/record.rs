use super::defaults::DEFAULTS;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The persisted settings record
///
/// A flat JSON object, keys kept in insertion order: recognized keys in
/// [`DEFAULTS`] order for a fresh record, file order for a loaded one with
/// backfilled keys appended. Values are not type-checked: typed accessors return
/// `None` when a key is absent or holds a value of another type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(Map<String, Value>);

impl Settings {
    /// Record holding exactly the recognized keys at their defaults
    #[must_use]
    pub fn defaults() -> Self {
        let map = DEFAULTS
            .iter()
            .map(|d| (d.key.to_string(), d.value.to_json()))
            .collect();
        Self(map)
    }

    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Insert the default for every recognized key that is missing
    ///
    /// Returns the number of keys inserted. Existing values are never touched.
    pub fn backfill(&mut self) -> usize {
        let mut inserted = 0;
        for d in DEFAULTS {
            if !self.0.contains_key(d.key) {
                self.0.insert(d.key.to_string(), d.value.to_json());
                inserted += 1;
            }
        }
        inserted
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a value, returning the previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    /// Transcription model name
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.get_str("model")
    }

    #[must_use]
    pub fn mute_beeps(&self) -> Option<bool> {
        self.get_bool("mute_beeps")
    }

    #[must_use]
    pub fn mic_enabled(&self) -> Option<bool> {
        self.get_bool("mic_enabled")
    }

    /// Push-to-talk hotkey
    #[must_use]
    pub fn hotkey(&self) -> Option<&str> {
        self.get_str("hotkey")
    }

    #[must_use]
    pub fn window_x(&self) -> Option<i64> {
        self.get_i64("window_x")
    }

    #[must_use]
    pub fn window_y(&self) -> Option<i64> {
        self.get_i64("window_y")
    }

    /// Whether the main window is expanded
    #[must_use]
    pub fn expanded(&self) -> Option<bool> {
        self.get_bool("expanded")
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
