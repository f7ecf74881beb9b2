//! Static registration tables for the default game content.
//!
//! The order of `DEFAULT_OBJECTS` within a category is the order the build
//! menu shows. Ids must stay stable: save games and string tables key on them.

use crate::catalog::{BuildCost, Footprint, GameObject, ObjectCategory};
use crate::error::RegistrationError;

/// Compile-time definition of a placeable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectDef {
    /// Object id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Gameplay category.
    pub category: ObjectCategory,
    /// Footprint width in cells.
    pub width: u32,
    /// Footprint height in cells.
    pub height: u32,
    /// Map overview code.
    pub code: &'static str,
    /// Model asset name.
    pub model: Option<&'static str>,
}

/// Skip an invalid row of a default table.
///
/// Shipped tables must be valid, so debug builds panic here; release builds
/// log the row and carry on without it.
pub(super) fn reject_default(table: &'static str, id: &str, error: &RegistrationError) {
    tracing::error!(table, id, %error, "skipping invalid default entry");
    debug_assert!(false, "invalid default {table} entry {id}: {error}");
}

impl ObjectDef {
    /// Build the runtime descriptor.
    #[must_use]
    pub fn to_object(&self) -> GameObject {
        GameObject {
            id: self.id.into(),
            name: self.name.to_string(),
            category: self.category,
            footprint: Footprint::new(self.width, self.height),
            display_code: self.code.to_string(),
            model: self.model.map(str::to_string),
        }
    }
}

const fn def(
    id: &'static str,
    name: &'static str,
    category: ObjectCategory,
    size: (u32, u32),
    code: &'static str,
    model: Option<&'static str>,
) -> ObjectDef {
    ObjectDef {
        id,
        name,
        category,
        width: size.0,
        height: size.1,
        code,
        model,
    }
}

use ObjectCategory::{
    Castle, Farms, Food, Industry, Military, Misc, Religion, Resources, Soldiers, Storage, Workers,
};

/// Every placeable object shipped with the game.
pub const DEFAULT_OBJECTS: &[ObjectDef] = &[
    def("object_stockpile", "Stockpile", Storage, (3, 3), "SP", Some("stockpile")),
    def("object_granary", "Granary", Storage, (2, 2), "GR", Some("granary")),
    def("object_armory", "Armory", Storage, (2, 2), "AR", Some("armory")),
    def("object_quarry", "Quarry", Resources, (3, 3), "QU", Some("quarry")),
    def("object_woodcutter", "Woodcutter", Resources, (2, 2), "WC", Some("woodcutter")),
    def("object_iron_mine", "Iron Mine", Resources, (3, 3), "IM", Some("iron_mine")),
    def("object_bakery", "Bakery", Food, (2, 2), "BA", Some("bakery")),
    def("object_brewery", "Brewery", Food, (2, 2), "BR", Some("brewery")),
    def("object_mill", "Mill", Food, (2, 2), "MI", Some("mill")),
    def("object_wheat_farm", "Wheat Farm", Farms, (4, 4), "WF", Some("wheat_farm")),
    def("object_apple_orchard", "Apple Orchard", Farms, (4, 4), "AO", Some("apple_orchard")),
    def("object_dairy_farm", "Dairy Farm", Farms, (4, 4), "DF", None),
    def("object_barracks", "Barracks", Military, (3, 3), "BK", Some("barracks")),
    def("object_armourer", "Armourer", Military, (2, 2), "AM", None),
    def("object_fletcher", "Fletcher", Military, (2, 2), "FL", None),
    def("object_chapel", "Chapel", Religion, (2, 2), "CH", Some("chapel")),
    def("object_church", "Church", Religion, (3, 3), "CU", Some("church")),
    def("object_cathedral", "Cathedral", Religion, (4, 4), "CT", Some("cathedral")),
    def("object_castle", "Castle", Castle, (4, 4), "CA", Some("castle")),
    def("object_wall_wood", "Wooden Wall", Castle, (1, 1), "W1", Some("wall_wood")),
    def("object_wall_stone", "Stone Wall", Castle, (1, 1), "W2", Some("wall_stone")),
    def("object_wall_fortified", "Fortified Wall", Castle, (1, 1), "W3", Some("wall_fortified")),
    def("object_tower_lookout", "Lookout Tower", Castle, (1, 1), "T1", Some("tower_lookout")),
    def("object_tower_defense", "Defense Tower", Castle, (2, 2), "T2", Some("tower_defense")),
    def("object_tower_great", "Great Tower", Castle, (3, 3), "T3", Some("tower_great")),
    def("object_gatehouse", "Gatehouse", Castle, (3, 2), "GH", Some("gatehouse")),
    def("object_archer", "Archer", Soldiers, (1, 1), "A", Some("archer")),
    def("object_spearman", "Spearman", Soldiers, (1, 1), "S", Some("spearman")),
    def("object_knight", "Knight", Soldiers, (1, 1), "K", Some("knight")),
    def("object_peasant", "Peasant", Workers, (1, 1), "P", Some("peasant")),
    def("object_builder", "Builder", Workers, (1, 1), "B", None),
    def("object_smithy", "Smithy", Industry, (2, 2), "SM", Some("smithy")),
    def("object_tannery", "Tannery", Industry, (2, 2), "TA", None),
    def("object_house", "House", Misc, (2, 2), "HO", Some("house")),
    def("object_well", "Well", Misc, (1, 1), "WE", Some("well")),
    def("object_market", "Market", Misc, (3, 3), "MA", Some("market")),
];

const fn cost(stone: u32, wood: u32, iron: u32) -> BuildCost {
    BuildCost { stone, wood, iron }
}

/// Build costs. Units and the base wall tier are free.
pub const DEFAULT_COSTS: &[(&str, BuildCost)] = &[
    ("object_stockpile", cost(0, 4, 0)),
    ("object_granary", cost(2, 6, 0)),
    ("object_armory", cost(4, 4, 1)),
    ("object_quarry", cost(0, 8, 0)),
    ("object_woodcutter", cost(0, 3, 0)),
    ("object_iron_mine", cost(4, 10, 0)),
    ("object_bakery", cost(2, 4, 0)),
    ("object_brewery", cost(2, 5, 0)),
    ("object_mill", cost(3, 8, 0)),
    ("object_wheat_farm", cost(0, 6, 0)),
    ("object_apple_orchard", cost(0, 5, 0)),
    ("object_dairy_farm", cost(0, 6, 0)),
    ("object_barracks", cost(12, 6, 2)),
    ("object_armourer", cost(2, 6, 2)),
    ("object_fletcher", cost(0, 8, 0)),
    ("object_chapel", cost(6, 4, 0)),
    ("object_church", cost(15, 8, 0)),
    ("object_cathedral", cost(40, 20, 4)),
    ("object_castle", cost(10, 5, 2)),
    ("object_wall_wood", cost(0, 0, 0)),
    ("object_wall_stone", cost(1, 0, 0)),
    ("object_wall_fortified", cost(2, 0, 1)),
    ("object_tower_lookout", cost(0, 5, 0)),
    ("object_tower_defense", cost(10, 2, 0)),
    ("object_tower_great", cost(25, 4, 2)),
    ("object_gatehouse", cost(15, 5, 1)),
    ("object_smithy", cost(4, 6, 2)),
    ("object_tannery", cost(0, 6, 0)),
    ("object_house", cost(2, 2, 0)),
    ("object_well", cost(3, 0, 0)),
    ("object_market", cost(5, 10, 0)),
];

/// Health as `(id, levels, hp_per_level)`.
pub const DEFAULT_HEALTH: &[(&str, u32, u32)] = &[
    ("object_stockpile", 1, 100),
    ("object_granary", 2, 100),
    ("object_armory", 2, 150),
    ("object_quarry", 2, 150),
    ("object_woodcutter", 1, 100),
    ("object_iron_mine", 2, 200),
    ("object_bakery", 1, 120),
    ("object_brewery", 1, 120),
    ("object_mill", 2, 120),
    ("object_wheat_farm", 1, 80),
    ("object_apple_orchard", 1, 80),
    ("object_dairy_farm", 1, 80),
    ("object_barracks", 3, 200),
    ("object_armourer", 2, 150),
    ("object_fletcher", 1, 120),
    ("object_chapel", 2, 150),
    ("object_church", 3, 200),
    ("object_cathedral", 4, 300),
    ("object_castle", 5, 500),
    ("object_wall_wood", 1, 150),
    ("object_wall_stone", 2, 300),
    ("object_wall_fortified", 3, 400),
    ("object_tower_lookout", 1, 200),
    ("object_tower_defense", 2, 400),
    ("object_tower_great", 3, 600),
    ("object_gatehouse", 3, 450),
    ("object_archer", 1, 40),
    ("object_spearman", 1, 60),
    ("object_knight", 2, 80),
    ("object_peasant", 1, 20),
    ("object_builder", 1, 25),
    ("object_smithy", 2, 150),
    ("object_tannery", 1, 120),
    ("object_house", 1, 100),
    ("object_well", 1, 60),
    ("object_market", 2, 150),
];

/// Fire damage per tick for everything that burns.
pub const DEFAULT_FLAMMABLE: &[(&str, u32)] = &[
    ("object_wall_wood", 3),
    ("object_tower_lookout", 3),
    ("object_fletcher", 3),
    ("object_stockpile", 2),
    ("object_granary", 2),
    ("object_woodcutter", 2),
    ("object_bakery", 2),
    ("object_brewery", 2),
    ("object_mill", 2),
    ("object_house", 2),
    ("object_tannery", 2),
    ("object_market", 2),
    ("object_wheat_farm", 1),
    ("object_apple_orchard", 1),
    ("object_dairy_farm", 1),
    ("object_chapel", 1),
    ("object_barracks", 1),
];
