//! Hit point configuration keyed by object id.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::ObjectId;
use crate::catalog::defaults::{DEFAULT_HEALTH, reject_default};
use crate::catalog::fallback::UNKNOWN_HEALTH;
use crate::error::RegistrationError;

/// Damage levels and HP per level of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectHealthConfig {
    levels: u32,
    hp_per_level: u32,
}

impl ObjectHealthConfig {
    /// One level of one HP, the smallest valid configuration.
    pub const MINIMUM: ObjectHealthConfig = ObjectHealthConfig {
        levels: 1,
        hp_per_level: 1,
    };

    /// Create a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidHealth`] if either value is zero.
    pub fn new(levels: u32, hp_per_level: u32) -> Result<Self, RegistrationError> {
        if levels == 0 || hp_per_level == 0 {
            return Err(RegistrationError::InvalidHealth {
                levels,
                hp_per_level,
            });
        }
        Ok(Self {
            levels,
            hp_per_level,
        })
    }

    /// Number of damage levels.
    #[must_use]
    pub const fn levels(&self) -> u32 {
        self.levels
    }

    /// Hit points per level.
    #[must_use]
    pub const fn hp_per_level(&self) -> u32 {
        self.hp_per_level
    }

    /// Total hit points (`levels * hp_per_level`).
    #[must_use]
    pub const fn total_hp(&self) -> u64 {
        self.levels as u64 * self.hp_per_level as u64
    }
}

/// Registry of health configuration.
#[derive(Debug, Clone, Default)]
pub struct ObjectHealth {
    configs: HashMap<ObjectId, ObjectHealthConfig>,
}

impl ObjectHealth {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the default health table.
    ///
    /// Invalid rows are skipped and logged; debug builds panic on them.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut health = Self::new();
        for &(id, levels, hp_per_level) in DEFAULT_HEALTH {
            match ObjectHealthConfig::new(levels, hp_per_level) {
                Ok(config) => health.set(id, config),
                Err(e) => reject_default("health", id, &e),
            }
        }
        tracing::info!(count = health.len(), "registered object health");
        health
    }

    /// Register or replace the health of an object.
    pub fn set(&mut self, id: impl Into<ObjectId>, config: ObjectHealthConfig) {
        let id = id.into();
        if let Some(previous) = self.configs.insert(id.clone(), config) {
            tracing::debug!(%id, ?previous, ?config, "replaced health config");
        }
    }

    /// Registered health of an object, if any.
    #[must_use]
    pub fn config(&self, id: &str) -> Option<ObjectHealthConfig> {
        self.configs.get(id).copied()
    }

    /// Health of an object, or [`UNKNOWN_HEALTH`] if none is registered.
    #[must_use]
    pub fn config_or_default(&self, id: &str) -> ObjectHealthConfig {
        self.config(id).unwrap_or(UNKNOWN_HEALTH)
    }

    /// Total hit points of an object, using the default for unknown ids.
    #[must_use]
    pub fn total_hp(&self, id: &str) -> u64 {
        self.config_or_default(id).total_hp()
    }

    /// Number of registered configurations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Iterate over all registered ids and configurations in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &ObjectHealthConfig)> {
        self.configs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values_rejected() {
        assert!(ObjectHealthConfig::new(0, 10).is_err());
        assert!(ObjectHealthConfig::new(3, 0).is_err());
    }

    #[test]
    fn test_total_hp() {
        let config = ObjectHealthConfig::new(5, 500).unwrap();
        assert_eq!(config.total_hp(), 2500);

        let huge = ObjectHealthConfig::new(u32::MAX, u32::MAX).unwrap();
        assert_eq!(huge.total_hp(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_unknown_uses_default() {
        let health = ObjectHealth::with_defaults();
        assert_eq!(health.config("object_moat"), None);
        assert_eq!(health.config_or_default("object_moat"), UNKNOWN_HEALTH);
        assert_eq!(health.total_hp("object_moat"), 1);
    }

    #[test]
    fn test_default_castle() {
        let health = ObjectHealth::with_defaults();
        let castle = health.config("object_castle").unwrap();
        assert_eq!(castle.levels(), 5);
        assert_eq!(castle.hp_per_level(), 500);
    }

    #[test]
    fn test_set_upserts() {
        let mut health = ObjectHealth::new();
        health.set("object_well", ObjectHealthConfig::new(1, 10).unwrap());
        health.set("object_well", ObjectHealthConfig::new(2, 10).unwrap());
        assert_eq!(health.len(), 1);
        assert_eq!(health.total_hp("object_well"), 20);
    }
}
