//! Values returned for ids no catalog knows about.
//!
//! Incomplete content degrades instead of failing: an unregistered object
//! is free to build, has a single hit point, does not burn and renders with
//! the generic variant attributes. Tests assert against these constants
//! rather than re-deriving them per catalog.

use crate::catalog::{BuildCost, ObjectHealthConfig};
use crate::variants::VariantAttributes;

/// Build cost of an unregistered object.
pub const UNKNOWN_COST: BuildCost = BuildCost::ZERO;

/// Health of an unregistered object: one level of one HP.
pub const UNKNOWN_HEALTH: ObjectHealthConfig = ObjectHealthConfig::MINIMUM;

/// Fire damage per tick of an unregistered object.
pub const UNKNOWN_FIRE_DAMAGE: u32 = 0;

/// Attributes of an id that matches no registered variant.
pub const UNKNOWN_VARIANT: VariantAttributes = VariantAttributes {
    height: 1.0,
    level: 0,
    max_level: 0,
};
