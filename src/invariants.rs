//! Catalog invariants - sanity checks that detect content bugs.
//!
//! Every check here describes a state the runtime tolerates (dangling ids
//! resolve to defaults, duplicate ids resolve to the first match) but that
//! shipped content should never contain. Default content passes all of them.

use std::collections::HashSet;

use crate::catalog::ObjectId;
use crate::session::Session;
use crate::variants::{self, TowerVariant, Variant, WallVariant};

/// Sanity bound: no single object should have more hit points than this.
pub const SANITY_MAX_TOTAL_HP: u64 = 100_000;

/// Sanity bound: no single resource in a build cost should exceed this.
pub const SANITY_MAX_COST: u32 = 10_000;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all catalog invariants.
///
/// Returns the violations found in a deterministic order, or an empty list
/// if all invariants hold.
#[must_use]
pub fn check_invariants(session: &Session) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let objects = session.objects();

    // Descriptor validity and id uniqueness
    let mut seen = HashSet::new();
    for object in objects.iter() {
        if let Err(e) = object.validate() {
            violations.push(InvariantViolation::new(format!("Invalid object: {e}")));
        }
        if !seen.insert(object.id.as_str()) {
            violations.push(InvariantViolation::new(format!(
                "Duplicate object id {} (lookups resolve to the first match)",
                object.id
            )));
        }
    }

    // Attribute entries for objects the catalog does not describe
    let mut dangling = |kind: &str, mut ids: Vec<&ObjectId>| {
        ids.sort();
        for id in ids {
            if !objects.contains(id.as_str()) {
                violations.push(InvariantViolation::new(format!(
                    "{kind} registered for unknown object {id}"
                )));
            }
        }
    };
    dangling("Build cost", session.costs().iter().map(|(id, _)| id).collect());
    dangling("Health", session.health().iter().map(|(id, _)| id).collect());
    dangling(
        "Flammability",
        session.flammable().iter().map(|(id, _)| id).collect(),
    );

    // Variant families must point at real objects
    check_variants::<WallVariant>("Wall", session, &mut violations);
    check_variants::<TowerVariant>("Tower", session, &mut violations);

    // Attribute bounds
    let mut health: Vec<_> = session.health().iter().collect();
    health.sort_by_key(|(id, _)| *id);
    for (id, config) in health {
        if config.total_hp() > SANITY_MAX_TOTAL_HP {
            violations.push(InvariantViolation::new(format!(
                "Object {id} has {} hp > sanity max {SANITY_MAX_TOTAL_HP}",
                config.total_hp()
            )));
        }
    }

    let mut costs: Vec<_> = session.costs().iter().collect();
    costs.sort_by_key(|(id, _)| *id);
    for (id, cost) in costs {
        let largest = cost.stone.max(cost.wood).max(cost.iron);
        if largest > SANITY_MAX_COST {
            violations.push(InvariantViolation::new(format!(
                "Object {id} costs {largest} of one resource > sanity max {SANITY_MAX_COST}"
            )));
        }
    }

    violations
}

fn check_variants<V: Variant>(
    family: &str,
    session: &Session,
    violations: &mut Vec<InvariantViolation>,
) {
    for id in variants::ids::<V>() {
        if !session.objects().contains(id) {
            violations.push(InvariantViolation::new(format!(
                "{family} variant {id} has no catalog entry"
            )));
        }
    }
}

/// Assert all catalog invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(session: &Session) {
    let violations = check_invariants(session);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Catalog invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_session: &Session) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        BuildCost, BuildCosts, FlammableCatalog, FlammableEntry, Footprint, GameObject,
        ObjectCatalog, ObjectCategory, ObjectHealth, ObjectHealthConfig,
    };
    use crate::economy::ResourceStock;

    fn session_with(
        objects: ObjectCatalog,
        costs: BuildCosts,
        health: ObjectHealth,
        flammable: FlammableCatalog,
    ) -> Session {
        Session::from_parts(objects, costs, health, flammable, ResourceStock::ZERO)
    }

    #[test]
    fn test_default_content_passes() {
        let violations = check_invariants(&Session::default());
        assert!(violations.is_empty(), "{violations:?}");
        assert_invariants(&Session::default());
    }

    #[test]
    fn test_duplicate_id_detected() {
        let mut session = Session::default();
        session.objects_mut().add(GameObject::new(
            "object_house",
            "Second House",
            ObjectCategory::Misc,
            Footprint::new(2, 2),
            "H2",
        ));

        let violations = check_invariants(&session);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Duplicate object id object_house"));
    }

    #[test]
    fn test_invalid_added_object_detected() {
        let mut session = Session::default();
        session.objects_mut().add(GameObject::new(
            "object_pit",
            "Pit",
            ObjectCategory::Misc,
            Footprint::new(0, 1),
            "PT",
        ));

        let violations = check_invariants(&session);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("footprint"));
    }

    #[test]
    fn test_dangling_attributes_detected() {
        let mut costs = BuildCosts::with_defaults();
        costs.set("object_moat", BuildCost::new(1, 0, 0));
        let mut health = ObjectHealth::with_defaults();
        health.set("object_moat", ObjectHealthConfig::new(1, 1).unwrap());
        let mut flammable = FlammableCatalog::with_defaults();
        flammable.set(FlammableEntry::new("object_moat", 1).unwrap());

        let session = session_with(ObjectCatalog::with_defaults(), costs, health, flammable);
        let messages: Vec<_> = check_invariants(&session)
            .into_iter()
            .map(|v| v.message)
            .collect();
        assert_eq!(
            messages,
            [
                "Build cost registered for unknown object object_moat",
                "Health registered for unknown object object_moat",
                "Flammability registered for unknown object object_moat",
            ]
        );
    }

    #[test]
    fn test_missing_variant_detected() {
        let mut session = Session::default();
        session.objects_mut().remove("object_wall_stone");

        let violations = check_invariants(&session);
        // The stone wall's cost and health now dangle too.
        assert!(
            violations
                .iter()
                .any(|v| v.message == "Wall variant object_wall_stone has no catalog entry")
        );
    }

    #[test]
    fn test_hp_exactly_at_max_passes() {
        let mut health = ObjectHealth::new();
        health.set(
            "object_castle",
            ObjectHealthConfig::new(1, u32::try_from(SANITY_MAX_TOTAL_HP).unwrap()).unwrap(),
        );
        let session = session_with(
            ObjectCatalog::with_defaults(),
            BuildCosts::with_defaults(),
            health,
            FlammableCatalog::new(),
        );
        assert!(check_invariants(&session).is_empty());
    }

    #[test]
    fn test_hp_one_above_max_fails() {
        let mut health = ObjectHealth::new();
        health.set(
            "object_castle",
            ObjectHealthConfig::new(1, u32::try_from(SANITY_MAX_TOTAL_HP + 1).unwrap()).unwrap(),
        );
        let session = session_with(
            ObjectCatalog::with_defaults(),
            BuildCosts::with_defaults(),
            health,
            FlammableCatalog::new(),
        );
        let violations = check_invariants(&session);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("hp"));
    }

    #[test]
    fn test_cost_one_above_max_fails() {
        let mut costs = BuildCosts::new();
        costs.set("object_house", BuildCost::new(0, SANITY_MAX_COST + 1, 0));
        costs.set("object_well", BuildCost::new(SANITY_MAX_COST, 0, 0));
        let session = session_with(
            ObjectCatalog::with_defaults(),
            costs,
            ObjectHealth::new(),
            FlammableCatalog::new(),
        );
        let violations = check_invariants(&session);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("object_house"));
    }
}
