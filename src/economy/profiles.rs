//! Starting stock profiles.
//!
//! Profiles are read from a JSON object keyed by profile name:
//!
//! ```json
//! { "solo": { "stone": 20, "wood": 30, "iron": 5, "gold": 100 } }
//! ```
//!
//! Any JSON number is accepted as an amount and clamped into the stock's
//! range: negative amounts become zero, amounts past `u32::MAX` saturate,
//! and fractions are truncated. Only a non-numeric amount rejects the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Number;

use crate::economy::ResourceStock;
use crate::error::ConfigError;

/// Profile amounts as written in the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawProfile {
    stone: Option<Number>,
    wood: Option<Number>,
    iron: Option<Number>,
    gold: Option<Number>,
}

impl From<RawProfile> for ResourceStock {
    fn from(raw: RawProfile) -> Self {
        ResourceStock::from_signed(
            signed_amount(raw.stone.as_ref()),
            signed_amount(raw.wood.as_ref()),
            signed_amount(raw.iron.as_ref()),
            signed_amount(raw.gold.as_ref()),
        )
    }
}

/// Saturate any JSON number into `i64`; fractions truncate toward zero.
#[allow(clippy::cast_possible_truncation)]
fn signed_amount(amount: Option<&Number>) -> i64 {
    let Some(amount) = amount else {
        return 0;
    };
    if let Some(value) = amount.as_i64() {
        value
    } else if amount.as_u64().is_some() {
        i64::MAX
    } else {
        // Float casts saturate at the bounds.
        amount.as_f64().map_or(0, |value| value as i64)
    }
}

/// Named starting stocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartingProfiles {
    profiles: BTreeMap<String, ResourceStock>,
}

impl StartingProfiles {
    /// Create an empty profile set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Profiles shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        let mut profiles = Self::new();
        profiles.insert("solo", ResourceStock::new(20, 30, 5, 100));
        profiles.insert("sandbox", ResourceStock::new(10_000, 10_000, 10_000, 10_000));
        profiles
    }

    /// Parse profiles from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the text is not a JSON object of
    /// profile objects.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, RawProfile> = serde_json::from_str(json)?;
        Ok(Self {
            profiles: raw
                .into_iter()
                .map(|(name, profile)| (name, profile.into()))
                .collect(),
        })
    }

    /// Load profiles from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let profiles = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), count = profiles.len(), "loaded starting profiles");
        Ok(profiles)
    }

    /// Load profiles from a JSON file, or return an empty set on failure.
    ///
    /// The failure is logged; every profile then resolves to zero stock.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "starting profiles unavailable, using zero stock");
            Self::new()
        })
    }

    /// Add or replace a profile.
    pub fn insert(&mut self, name: impl Into<String>, stock: ResourceStock) {
        self.profiles.insert(name.into(), stock);
    }

    /// Starting stock for a profile; zero for unknown profiles.
    #[must_use]
    pub fn starting_resources(&self, profile: &str) -> ResourceStock {
        self.profiles.get(profile).copied().unwrap_or_else(|| {
            tracing::debug!(profile, "unknown starting profile");
            ResourceStock::ZERO
        })
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether there are no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_clamp() {
        let profiles = StartingProfiles::from_json_str(
            r#"{ "solo": { "stone": 20, "wood": -3, "gold": 100 }, "hard": {} }"#,
        )
        .unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(
            profiles.starting_resources("solo"),
            ResourceStock::new(20, 0, 0, 100)
        );
        assert_eq!(profiles.starting_resources("hard"), ResourceStock::ZERO);
    }

    #[test]
    fn test_out_of_range_and_fractional_amounts_clamp() {
        let profiles = StartingProfiles::from_json_str(
            r#"{ "big": {
                "stone": 5.0,
                "wood": 18446744073709551615,
                "iron": 1e30,
                "gold": -1e30
            }, "frac": { "stone": 2.9, "wood": -0.5 } }"#,
        )
        .unwrap();
        assert_eq!(
            profiles.starting_resources("big"),
            ResourceStock::new(5, u32::MAX, u32::MAX, 0)
        );
        assert_eq!(profiles.starting_resources("frac"), ResourceStock::new(2, 0, 0, 0));
    }

    #[test]
    fn test_non_numeric_amount_rejects_file() {
        assert!(matches!(
            StartingProfiles::from_json_str(r#"{ "solo": { "stone": "lots" } }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_unknown_profile_is_zero() {
        let profiles = StartingProfiles::builtin();
        assert_eq!(profiles.starting_resources("coop"), ResourceStock::ZERO);
        assert!(!profiles.starting_resources("solo").is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            StartingProfiles::from_json_str("[1, 2]"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(&path, r#"{ "solo": { "stone": 7 } }"#).unwrap();

        let profiles = StartingProfiles::load(&path).unwrap();
        assert_eq!(profiles.starting_resources("solo").stone, 7);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert!(matches!(
            StartingProfiles::load(&path),
            Err(ConfigError::Io { .. })
        ));
        let profiles = StartingProfiles::load_or_empty(&path);
        assert!(profiles.is_empty());
        assert_eq!(profiles.starting_resources("solo"), ResourceStock::ZERO);
    }

    #[test]
    fn test_names_sorted() {
        let profiles = StartingProfiles::builtin();
        assert_eq!(profiles.names().collect::<Vec<_>>(), ["sandbox", "solo"]);
    }
}
