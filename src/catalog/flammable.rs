//! Flammability keyed by object id.
//!
//! Presence in the registry means the object burns; absence means it is
//! immune to fire.

use std::collections::BTreeMap;

use crate::catalog::ObjectId;
use crate::catalog::defaults::{DEFAULT_FLAMMABLE, reject_default};
use crate::catalog::fallback::UNKNOWN_FIRE_DAMAGE;
use crate::error::RegistrationError;

/// Fire damage an object takes per tick while burning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlammableEntry {
    object_id: ObjectId,
    fire_damage_per_tick: u32,
}

impl FlammableEntry {
    /// Create an entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidFireDamage`] if the damage is
    /// zero; an object that takes no damage is simply not flammable.
    pub fn new(
        object_id: impl Into<ObjectId>,
        fire_damage_per_tick: u32,
    ) -> Result<Self, RegistrationError> {
        let object_id = object_id.into();
        if fire_damage_per_tick == 0 {
            return Err(RegistrationError::InvalidFireDamage(object_id));
        }
        Ok(Self {
            object_id,
            fire_damage_per_tick,
        })
    }

    /// The flammable object.
    #[must_use]
    pub fn object_id(&self) -> &ObjectId {
        &self.object_id
    }

    /// Damage per tick.
    #[must_use]
    pub const fn fire_damage_per_tick(&self) -> u32 {
        self.fire_damage_per_tick
    }
}

/// Registry of flammable objects, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct FlammableCatalog {
    entries: BTreeMap<ObjectId, u32>,
}

impl FlammableCatalog {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the default flammability table.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for &(id, damage) in DEFAULT_FLAMMABLE {
            match FlammableEntry::new(id, damage) {
                Ok(entry) => catalog.set(entry),
                Err(e) => reject_default("flammable", id, &e),
            }
        }
        tracing::info!(count = catalog.len(), "registered flammable objects");
        catalog
    }

    /// Register or replace an entry.
    pub fn set(&mut self, entry: FlammableEntry) {
        let FlammableEntry {
            object_id,
            fire_damage_per_tick,
        } = entry;
        if let Some(previous) = self.entries.insert(object_id.clone(), fire_damage_per_tick) {
            tracing::debug!(id = %object_id, previous, fire_damage_per_tick, "replaced flammable entry");
        }
    }

    /// Whether the object burns.
    #[must_use]
    pub fn is_flammable(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Fire damage per tick, or [`UNKNOWN_FIRE_DAMAGE`] if the object does not burn.
    #[must_use]
    pub fn fire_damage_per_tick(&self, id: &str) -> u32 {
        self.entries.get(id).copied().unwrap_or(UNKNOWN_FIRE_DAMAGE)
    }

    /// All flammable ids in lexicographic order.
    #[must_use]
    pub fn flammable_object_ids(&self) -> Vec<ObjectId> {
        self.entries.keys().cloned().collect()
    }

    /// Iterate over entries in lexicographic id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, u32)> {
        self.entries.iter().map(|(id, damage)| (id, *damage))
    }

    /// Number of flammable objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing burns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
