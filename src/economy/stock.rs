//! Resource stock values.

use serde::{Deserialize, Serialize};

use crate::catalog::BuildCost;

/// Amounts of each resource.
///
/// Unsigned fields make a negative balance unrepresentable; every
/// subtraction saturates at zero and every addition at `u32::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceStock {
    /// Stone.
    #[serde(default)]
    pub stone: u32,
    /// Wood.
    #[serde(default)]
    pub wood: u32,
    /// Iron.
    #[serde(default)]
    pub iron: u32,
    /// Gold. Never part of a build cost.
    #[serde(default)]
    pub gold: u32,
}

impl ResourceStock {
    /// The empty stock.
    pub const ZERO: ResourceStock = ResourceStock {
        stone: 0,
        wood: 0,
        iron: 0,
        gold: 0,
    };

    /// Create a stock.
    #[must_use]
    pub const fn new(stone: u32, wood: u32, iron: u32, gold: u32) -> Self {
        Self {
            stone,
            wood,
            iron,
            gold,
        }
    }

    /// Create a stock from signed amounts, clamping into `0..=u32::MAX`.
    #[must_use]
    pub fn from_signed(stone: i64, wood: i64, iron: i64, gold: i64) -> Self {
        fn clamp(value: i64) -> u32 {
            u32::try_from(value.max(0)).unwrap_or(u32::MAX)
        }
        Self::new(clamp(stone), clamp(wood), clamp(iron), clamp(gold))
    }

    /// Whether this stock covers `cost`. Gold is not considered.
    #[must_use]
    pub const fn covers(&self, cost: &BuildCost) -> bool {
        self.stone >= cost.stone && self.wood >= cost.wood && self.iron >= cost.iron
    }

    /// What is missing to pay `cost`; zero in every field this stock covers.
    #[must_use]
    pub const fn shortfall(&self, cost: &BuildCost) -> BuildCost {
        BuildCost {
            stone: cost.stone.saturating_sub(self.stone),
            wood: cost.wood.saturating_sub(self.wood),
            iron: cost.iron.saturating_sub(self.iron),
        }
    }

    /// Subtract a build cost, flooring each field at zero.
    #[must_use]
    pub const fn saturating_sub_cost(self, cost: &BuildCost) -> Self {
        Self {
            stone: self.stone.saturating_sub(cost.stone),
            wood: self.wood.saturating_sub(cost.wood),
            iron: self.iron.saturating_sub(cost.iron),
            gold: self.gold,
        }
    }

    /// Subtract another stock field by field, flooring at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            stone: self.stone.saturating_sub(other.stone),
            wood: self.wood.saturating_sub(other.wood),
            iron: self.iron.saturating_sub(other.iron),
            gold: self.gold.saturating_sub(other.gold),
        }
    }

    /// Add another stock field by field, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            stone: self.stone.saturating_add(other.stone),
            wood: self.wood.saturating_add(other.wood),
            iron: self.iron.saturating_add(other.iron),
            gold: self.gold.saturating_add(other.gold),
        }
    }

    /// Whether every field is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stone == 0 && self.wood == 0 && self.iron == 0 && self.gold == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_ignores_gold() {
        let stock = ResourceStock::new(2, 2, 0, 0);
        assert!(stock.covers(&BuildCost::new(2, 2, 0)));
        assert!(!stock.covers(&BuildCost::new(2, 3, 0)));
        assert!(stock.covers(&BuildCost::ZERO));
    }

    #[test]
    fn test_shortfall() {
        let stock = ResourceStock::new(2, 1, 0, 50);
        assert_eq!(stock.shortfall(&BuildCost::new(2, 2, 1)), BuildCost::new(0, 1, 1));
        assert!(stock.shortfall(&BuildCost::new(1, 1, 0)).is_free());
    }

    #[test]
    fn test_sub_cost_clamps_and_keeps_gold() {
        let stock = ResourceStock::new(5, 1, 0, 9);
        let after = stock.saturating_sub_cost(&BuildCost::new(3, 4, 2));
        assert_eq!(after, ResourceStock::new(2, 0, 0, 9));
    }

    #[test]
    fn test_add_saturates() {
        let stock = ResourceStock::new(u32::MAX, 0, 0, 0);
        let after = stock.saturating_add(ResourceStock::new(10, 1, 2, 3));
        assert_eq!(after, ResourceStock::new(u32::MAX, 1, 2, 3));
    }

    #[test]
    fn test_from_signed_clamps() {
        assert_eq!(
            ResourceStock::from_signed(-5, 3, i64::MAX, 0),
            ResourceStock::new(0, 3, u32::MAX, 0)
        );
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_zero() {
        let stock: ResourceStock = serde_json::from_str(r#"{"wood": 4}"#).unwrap();
        assert_eq!(stock, ResourceStock::new(0, 4, 0, 0));
    }
}
