//! Output formatting utilities for CLI.

use std::fmt::Write;

use citadel::{BuildCost, GameObject, Session};
use serde::Serialize;

/// JSON-serializable object row.
#[derive(Debug, Serialize)]
pub(super) struct JsonObject {
    /// Object id.
    pub(super) id: String,
    /// Display name.
    pub(super) name: String,
    /// Category key.
    pub(super) category: &'static str,
    /// Footprint width in cells.
    pub(super) width: u32,
    /// Footprint height in cells.
    pub(super) height: u32,
    /// Map overview code.
    pub(super) display_code: String,
    /// Model asset name (null if none).
    pub(super) model: Option<String>,
    /// Build cost (zero if unregistered).
    pub(super) cost: BuildCost,
    /// Damage levels.
    pub(super) levels: u32,
    /// HP per level.
    pub(super) hp_per_level: u32,
    /// Total hit points.
    pub(super) total_hp: u64,
    /// Fire damage per tick (null if not flammable).
    pub(super) fire_damage_per_tick: Option<u32>,
}

impl JsonObject {
    /// Collect every attribute of an object from the session.
    pub(super) fn from_object(session: &Session, object: &GameObject) -> Self {
        let id = object.id.as_str();
        let health = session.health().config_or_default(id);
        let flammable = session.flammable();
        Self {
            id: id.to_string(),
            name: object.name.clone(),
            category: object.category.key(),
            width: object.footprint.width,
            height: object.footprint.height,
            display_code: object.display_code.clone(),
            model: object.model.clone(),
            cost: session.costs().cost(id),
            levels: health.levels(),
            hp_per_level: health.hp_per_level(),
            total_hp: health.total_hp(),
            fire_damage_per_tick: flammable
                .is_flammable(id)
                .then(|| flammable.fire_damage_per_tick(id)),
        }
    }
}

/// Format a cost for display, or `free` if it is zero.
pub(super) fn format_cost(cost: &BuildCost) -> String {
    if cost.is_free() {
        return "free".to_string();
    }
    format!("{} stone, {} wood, {} iron", cost.stone, cost.wood, cost.iron)
}

/// Format an object row as one line of text.
pub(super) fn format_text(row: &JsonObject) -> String {
    let mut line = format!(
        "  [{:<2}] {:<24} {:>2}x{:<2} {:>5} hp  {}",
        row.display_code,
        row.id,
        row.width,
        row.height,
        row.total_hp,
        format_cost(&row.cost)
    );
    if let Some(damage) = row.fire_damage_per_tick {
        let _ = write!(line, "  (burns {damage}/tick)");
    }
    line
}
