//! The object catalog: every placeable descriptor, grouped by category.

use std::collections::HashMap;

use crate::catalog::defaults::{DEFAULT_OBJECTS, reject_default};
use crate::catalog::{GameObject, ObjectCategory};

/// Registry of object descriptors grouped by category.
///
/// Ids are not required to be unique. [`ObjectCatalog::object`] returns the
/// first match walking [`ObjectCategory::ALL`] in order and each bucket in
/// insertion order; callers must not rely on shadowing a descriptor by
/// adding another with the same id.
#[derive(Debug, Clone, Default)]
pub struct ObjectCatalog {
    buckets: HashMap<ObjectCategory, Vec<GameObject>>,
}

impl ObjectCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the default objects.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.reload_defaults();
        catalog
    }

    /// Replace the whole catalog with the default objects.
    ///
    /// Any prior edits are discarded. Invalid default entries are skipped
    /// and logged in release builds; debug builds panic on them.
    pub fn reload_defaults(&mut self) {
        self.buckets.clear();
        for def in DEFAULT_OBJECTS {
            let object = def.to_object();
            match object.validate() {
                Ok(()) => self.bucket_mut(object.category).push(object),
                Err(e) => reject_default("object", def.id, &e),
            }
        }
        tracing::info!(count = self.len(), "loaded default object catalog");
    }

    /// Objects of a category in registration order.
    #[must_use]
    pub fn objects(&self, category: ObjectCategory) -> &[GameObject] {
        self.buckets.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Look up an object by id.
    #[must_use]
    pub fn object(&self, id: &str) -> Option<&GameObject> {
        self.iter().find(|object| object.id.as_str() == id)
    }

    /// Whether any object has the given id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.object(id).is_some()
    }

    /// Append an object to its category.
    ///
    /// Duplicate ids are accepted and logged; lookups keep returning the
    /// first registered match.
    pub fn add(&mut self, object: GameObject) {
        if let Some(existing) = self.object(object.id.as_str()) {
            tracing::warn!(
                id = %object.id,
                existing = %existing.category,
                added = %object.category,
                "duplicate object id, lookups resolve to the first match"
            );
        }
        self.bucket_mut(object.category).push(object);
    }

    /// Remove every object with the given id from every category.
    ///
    /// Returns the number of objects removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let mut removed = 0;
        for bucket in self.buckets.values_mut() {
            let before = bucket.len();
            bucket.retain(|object| object.id.as_str() != id);
            removed += before - bucket.len();
        }
        self.buckets.retain(|_, bucket| !bucket.is_empty());
        removed
    }

    /// All objects, walking categories in [`ObjectCategory::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
        ObjectCategory::ALL
            .into_iter()
            .flat_map(move |category| self.objects(category))
    }

    /// Categories holding at least one object, in iteration order.
    pub fn categories(&self) -> impl Iterator<Item = ObjectCategory> + '_ {
        ObjectCategory::ALL
            .into_iter()
            .filter(move |category| !self.objects(*category).is_empty())
    }

    /// Total number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether the catalog holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, category: ObjectCategory) -> &mut Vec<GameObject> {
        self.buckets.entry(category).or_default()
    }
}
