//! Build costs keyed by object id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ObjectId;
use crate::catalog::defaults::DEFAULT_COSTS;
use crate::catalog::fallback::UNKNOWN_COST;

/// Resources needed to construct an object.
///
/// Gold is never part of a build cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildCost {
    /// Stone required.
    pub stone: u32,
    /// Wood required.
    pub wood: u32,
    /// Iron required.
    pub iron: u32,
}

impl BuildCost {
    /// The empty cost.
    pub const ZERO: BuildCost = BuildCost {
        stone: 0,
        wood: 0,
        iron: 0,
    };

    /// Create a cost.
    #[must_use]
    pub const fn new(stone: u32, wood: u32, iron: u32) -> Self {
        Self { stone, wood, iron }
    }

    /// Whether building this costs nothing.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.stone == 0 && self.wood == 0 && self.iron == 0
    }
}

/// Registry of build costs.
///
/// Unregistered objects are free. This keeps half-configured content
/// buildable, at the price of also making mistyped ids free.
#[derive(Debug, Clone, Default)]
pub struct BuildCosts {
    costs: HashMap<ObjectId, BuildCost>,
}

impl BuildCosts {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the default costs.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut costs = Self::new();
        for (id, cost) in DEFAULT_COSTS {
            costs.set(*id, *cost);
        }
        tracing::info!(count = costs.len(), "registered build costs");
        costs
    }

    /// Register or replace the cost of an object.
    pub fn set(&mut self, id: impl Into<ObjectId>, cost: BuildCost) {
        let id = id.into();
        if let Some(previous) = self.costs.insert(id.clone(), cost) {
            tracing::debug!(%id, ?previous, ?cost, "replaced build cost");
        }
    }

    /// Cost of an object, or [`UNKNOWN_COST`] if none is registered.
    #[must_use]
    pub fn cost(&self, id: &str) -> BuildCost {
        self.get(id).unwrap_or(UNKNOWN_COST)
    }

    /// Registered cost of an object, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<BuildCost> {
        self.costs.get(id).copied()
    }

    /// Whether a cost is registered for the object.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.costs.contains_key(id)
    }

    /// Number of registered costs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Whether no costs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterate over all registered ids and costs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &BuildCost)> {
        self.costs.iter()
    }
}
