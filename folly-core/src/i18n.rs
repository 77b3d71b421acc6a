//! Translation table backing localized dialogue lookups.
//!
//! Loaded from the add-on's `i18n/<locale>.json`, a flat JSON object of
//! dotted keys to strings.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FollyError, Result};
use crate::host::DialogueSource;

/// Flat key → string translation table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON translation object.
    ///
    /// # Errors
    /// Returns `FollyError::Translation` if the JSON is not a flat string map.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FollyError::Translation(e.to_string()))
    }

    /// Load a JSON translation file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Add or replace a single entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a key. Empty strings count as missing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DialogueSource for Translations {
    fn line(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_object() {
        let t = Translations::from_json(
            r#"{ "talk.egg_gift.abigail": "An egg? For me?", "talk.egg_gift.sam": "" }"#,
        )
        .expect("valid json");
        assert_eq!(t.len(), 2);
        assert_eq!(t.line("talk.egg_gift.abigail").as_deref(), Some("An egg? For me?"));
        assert_eq!(t.line("talk.egg_gift.sam"), None);
        assert_eq!(t.line("talk.egg_gift.pierre"), None);
    }

    #[test]
    fn nested_json_is_rejected() {
        let err = Translations::from_json(r#"{ "talk": { "egg": "x" } }"#).expect_err("nested");
        assert!(matches!(err, FollyError::Translation(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("default.json");
        std::fs::write(&path, r#"{ "talk.egg_gift.leah": "Lovely." }"#).expect("write");
        let t = Translations::from_file(&path).expect("load");
        assert_eq!(t.get("talk.egg_gift.leah"), Some("Lovely."));
    }
}
