//! Localized display strings.
//!
//! Catalog names and display codes are lookup keys here; the catalogs never
//! call into this module themselves. A lookup walks the requested language,
//! then [`PRIMARY_FALLBACK`], then [`SECONDARY_FALLBACK`], and finally
//! returns the key itself.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    English,
    /// German.
    German,
    /// French.
    French,
    /// Spanish.
    Spanish,
    /// Polish.
    Polish,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 5] = [
        Self::English,
        Self::German,
        Self::French,
        Self::Spanish,
        Self::Polish,
    ];

    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::Polish => "pl",
        }
    }

    /// Look up a language by its ISO 639-1 code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// First language tried after the requested one.
pub const PRIMARY_FALLBACK: Language = Language::English;

/// Last language tried before returning the raw key.
pub const SECONDARY_FALLBACK: Language = Language::German;

type Table = HashMap<Language, HashMap<String, String>>;

/// Thread-safe string table.
///
/// Lookups share a read lock; loading a language takes the write lock.
#[derive(Debug, Default)]
pub struct StringTable {
    tables: RwLock<Table>,
}

impl StringTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Localized text for `key`, following the fallback chain.
    #[must_use]
    pub fn text(&self, key: &str, language: Language) -> String {
        let tables = self.read();
        [language, PRIMARY_FALLBACK, SECONDARY_FALLBACK]
            .into_iter()
            .find_map(|lang| tables.get(&lang).and_then(|strings| strings.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Whether `language` has its own entry for `key`.
    #[must_use]
    pub fn has(&self, key: &str, language: Language) -> bool {
        self.read()
            .get(&language)
            .is_some_and(|strings| strings.contains_key(key))
    }

    /// Add or replace a single string.
    pub fn insert(&self, language: Language, key: impl Into<String>, text: impl Into<String>) {
        self.write()
            .entry(language)
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Merge a JSON object of `key: text` pairs into a language.
    ///
    /// Returns the number of strings read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the text is not a flat JSON object
    /// of strings; the table is left unchanged.
    pub fn load_language_json(&self, language: Language, json: &str) -> Result<usize, ConfigError> {
        let strings: HashMap<String, String> = serde_json::from_str(json)?;
        let count = strings.len();
        self.write().entry(language).or_default().extend(strings);
        Ok(count)
    }

    /// Load every `<code>.json` file in `dir`.
    ///
    /// Files for unknown languages are ignored. Unreadable or malformed files
    /// are logged and skipped. Returns the number of languages loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] only if the directory itself cannot be read.
    pub fn load_dir(&self, dir: &Path) -> Result<usize, ConfigError> {
        let entries = fs::read_dir(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut loaded = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(language) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(Language::from_code)
            else {
                tracing::debug!(path = %path.display(), "ignoring strings for unknown language");
                continue;
            };

            let result = fs::read_to_string(&path)
                .map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })
                .and_then(|json| self.load_language_json(language, &json));
            match result {
                Ok(count) => {
                    tracing::info!(%language, count, "loaded strings");
                    loaded += 1;
                }
                Err(e) => tracing::warn!(%language, error = %e, "skipping string file"),
            }
        }
        Ok(loaded)
    }

    // Tables hold only owned strings; a writer that panicked mid-insert
    // leaves them usable.
    fn read(&self) -> RwLockReadGuard<'_, Table> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StringTable {
        let table = StringTable::new();
        table.insert(Language::English, "House", "House");
        table.insert(Language::German, "House", "Haus");
        table.insert(Language::German, "Well", "Brunnen");
        table.insert(Language::French, "House", "Maison");
        table
    }

    #[test]
    fn test_requested_language_first() {
        assert_eq!(table().text("House", Language::French), "Maison");
    }

    #[test]
    fn test_primary_fallback() {
        assert_eq!(table().text("House", Language::Polish), "House");
    }

    #[test]
    fn test_secondary_fallback() {
        assert_eq!(table().text("Well", Language::Spanish), "Brunnen");
        assert!(!table().has("Well", Language::Spanish));
    }

    #[test]
    fn test_raw_key_last() {
        assert_eq!(table().text("Cathedral", Language::English), "Cathedral");
    }

    #[test]
    fn test_language_codes() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn test_load_language_json() {
        let table = StringTable::new();
        let count = table
            .load_language_json(Language::Polish, r#"{"House": "Dom", "Well": "Studnia"}"#)
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(table.text("Well", Language::Polish), "Studnia");

        assert!(table.load_language_json(Language::Polish, "[]").is_err());
        assert_eq!(table.text("House", Language::Polish), "Dom");
    }

    #[test]
    fn test_load_dir_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"House": "House"}"#).unwrap();
        fs::write(dir.path().join("de.json"), "not json").unwrap();
        fs::write(dir.path().join("xx.json"), r#"{"House": "?"}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let table = StringTable::new();
        assert_eq!(table.load_dir(dir.path()).unwrap(), 1);
        assert_eq!(table.text("House", Language::German), "House");
    }

    #[test]
    fn test_load_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        let table = StringTable::new();
        assert!(table.load_dir(&dir.path().join("nope")).is_err());
    }
}
