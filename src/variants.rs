//! Per-variant constants for closed families of object types.
//!
//! Rendering and placement code look up a structure's height or tier by
//! object id without matching on concrete ids. Each family is a sum type
//! listing its members once in [`Variant::ALL`], with the constants for a
//! member written beside its definition.

use serde::Serialize;

use crate::catalog::fallback::UNKNOWN_VARIANT;

/// Constants shared by every member of a variant family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VariantAttributes {
    /// Structure height in world units.
    pub height: f32,
    /// Tier of this member, starting at 1.
    pub level: u8,
    /// Highest tier in the family.
    pub max_level: u8,
}

/// A closed family of object types.
pub trait Variant: Copy + 'static {
    /// Every member, in lookup order.
    const ALL: &'static [Self];

    /// Object id of this member.
    fn id(self) -> &'static str;

    /// Constants of this member.
    fn attributes(self) -> VariantAttributes;
}

/// Find the member registered under `id`.
#[must_use]
pub fn find<V: Variant>(id: &str) -> Option<V> {
    V::ALL.iter().copied().find(|variant| variant.id() == id)
}

/// Whether `id` belongs to the family.
#[must_use]
pub fn is_variant<V: Variant>(id: &str) -> bool {
    find::<V>(id).is_some()
}

/// Attributes of the member registered under `id`, or [`UNKNOWN_VARIANT`].
#[must_use]
pub fn attributes_for<V: Variant>(id: &str) -> VariantAttributes {
    find::<V>(id).map_or(UNKNOWN_VARIANT, V::attributes)
}

/// Height of the member registered under `id`, or the fallback height.
#[must_use]
pub fn height_for<V: Variant>(id: &str) -> f32 {
    attributes_for::<V>(id).height
}

/// Ids of every member of the family, in lookup order.
#[must_use]
pub fn ids<V: Variant>() -> Vec<&'static str> {
    V::ALL.iter().map(|variant| variant.id()).collect()
}

/// Wall tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallVariant {
    /// Palisade, the free base tier.
    Wood,
    /// Stone wall.
    Stone,
    /// Fortified stone wall.
    Fortified,
}

impl Variant for WallVariant {
    const ALL: &'static [Self] = &[Self::Wood, Self::Stone, Self::Fortified];

    fn id(self) -> &'static str {
        match self {
            Self::Wood => "object_wall_wood",
            Self::Stone => "object_wall_stone",
            Self::Fortified => "object_wall_fortified",
        }
    }

    fn attributes(self) -> VariantAttributes {
        match self {
            Self::Wood => VariantAttributes {
                height: 1.5,
                level: 1,
                max_level: 3,
            },
            Self::Stone => VariantAttributes {
                height: 2.5,
                level: 2,
                max_level: 3,
            },
            Self::Fortified => VariantAttributes {
                height: 3.5,
                level: 3,
                max_level: 3,
            },
        }
    }
}

/// Tower tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TowerVariant {
    /// Wooden lookout.
    Lookout,
    /// Stone defense tower.
    Defense,
    /// Great tower.
    Great,
}

impl Variant for TowerVariant {
    const ALL: &'static [Self] = &[Self::Lookout, Self::Defense, Self::Great];

    fn id(self) -> &'static str {
        match self {
            Self::Lookout => "object_tower_lookout",
            Self::Defense => "object_tower_defense",
            Self::Great => "object_tower_great",
        }
    }

    fn attributes(self) -> VariantAttributes {
        match self {
            Self::Lookout => VariantAttributes {
                height: 4.0,
                level: 1,
                max_level: 3,
            },
            Self::Defense => VariantAttributes {
                height: 6.0,
                level: 2,
                max_level: 3,
            },
            Self::Great => VariantAttributes {
                height: 9.0,
                level: 3,
                max_level: 3,
            },
        }
    }
}
