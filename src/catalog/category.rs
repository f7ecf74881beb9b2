//! Gameplay categories for placeable objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a `#rrggbb` hex string.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Closed set of gameplay categories.
///
/// Declaration order is the iteration order used by the object catalog,
/// which makes it part of the lookup contract for duplicate ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectCategory {
    /// Stockpiles, granaries and armories.
    Storage,
    /// Raw material producers.
    Resources,
    /// Food processing.
    Food,
    /// Farms and orchards.
    Farms,
    /// Military production.
    Military,
    /// Chapels and churches.
    Religion,
    /// Keeps, walls and towers.
    Castle,
    /// Combat units.
    Soldiers,
    /// Civilian units.
    Workers,
    /// Workshops.
    Industry,
    /// Everything else.
    Misc,
}

impl ObjectCategory {
    /// All categories in iteration order.
    pub const ALL: [ObjectCategory; 11] = [
        Self::Storage,
        Self::Resources,
        Self::Food,
        Self::Farms,
        Self::Military,
        Self::Religion,
        Self::Castle,
        Self::Soldiers,
        Self::Workers,
        Self::Industry,
        Self::Misc,
    ];

    /// Short stable key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Resources => "resources",
            Self::Food => "food",
            Self::Farms => "farms",
            Self::Military => "military",
            Self::Religion => "religion",
            Self::Castle => "castle",
            Self::Soldiers => "soldiers",
            Self::Workers => "workers",
            Self::Industry => "industry",
            Self::Misc => "misc",
        }
    }

    /// Color used for this category in the build menu.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Storage => Color::rgb(0x8b, 0x5a, 0x2b),
            Self::Resources => Color::rgb(0x80, 0x80, 0x80),
            Self::Food => Color::rgb(0xe6, 0xa1, 0x17),
            Self::Farms => Color::rgb(0x4c, 0xaf, 0x50),
            Self::Military => Color::rgb(0xc6, 0x28, 0x28),
            Self::Religion => Color::rgb(0x7e, 0x57, 0xc2),
            Self::Castle => Color::rgb(0x60, 0x7d, 0x8b),
            Self::Soldiers => Color::rgb(0xb7, 0x1c, 0x1c),
            Self::Workers => Color::rgb(0x2e, 0x7d, 0x32),
            Self::Industry => Color::rgb(0x5d, 0x40, 0x37),
            Self::Misc => Color::rgb(0x9e, 0x9e, 0x9e),
        }
    }

    /// Look up a category by its key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown category key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ObjectCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(&s.to_ascii_lowercase()).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
