//! Object descriptors and identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::ObjectCategory;
use crate::error::RegistrationError;

/// Stable identifier of a placeable object type.
///
/// The only key joining the catalogs together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Create an id from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ObjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Spatial footprint in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Footprint {
    /// Create a footprint.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Immutable descriptor of a placeable object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameObject {
    /// Unique id.
    pub id: ObjectId,
    /// Display name (also the localization key).
    pub name: String,
    /// Gameplay category.
    pub category: ObjectCategory,
    /// Size on the map grid.
    pub footprint: Footprint,
    /// One or two character code shown on the map overview.
    pub display_code: String,
    /// Name of the 3D model asset, if the object has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl GameObject {
    /// Create a descriptor without a model.
    #[must_use]
    pub fn new(
        id: impl Into<ObjectId>,
        name: impl Into<String>,
        category: ObjectCategory,
        footprint: Footprint,
        display_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            footprint,
            display_code: display_code.into(),
            model: None,
        }
    }

    /// Attach a model asset name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Check the descriptor's structural invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, either footprint dimension is
    /// zero, or the display code is not 1-2 characters.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.id.as_str().is_empty() {
            return Err(RegistrationError::EmptyId);
        }
        if self.footprint.width == 0 || self.footprint.height == 0 {
            return Err(RegistrationError::InvalidFootprint {
                id: self.id.clone(),
                width: self.footprint.width,
                height: self.footprint.height,
            });
        }
        let chars = self.display_code.chars().count();
        if !(1..=2).contains(&chars) {
            return Err(RegistrationError::InvalidDisplayCode {
                id: self.id.clone(),
                code: self.display_code.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well() -> GameObject {
        GameObject::new(
            "object_well",
            "Well",
            ObjectCategory::Misc,
            Footprint::new(1, 1),
            "WE",
        )
    }

    #[test]
    fn test_valid_object() {
        assert_eq!(well().validate(), Ok(()));
    }

    #[test]
    fn test_zero_footprint_rejected() {
        let mut obj = well();
        obj.footprint = Footprint::new(1, 0);
        assert!(matches!(
            obj.validate(),
            Err(RegistrationError::InvalidFootprint { height: 0, .. })
        ));
    }

    #[test]
    fn test_display_code_length() {
        let mut obj = well();
        obj.display_code = "WEL".to_string();
        assert!(obj.validate().is_err());

        obj.display_code = String::new();
        assert!(obj.validate().is_err());

        obj.display_code = "W".to_string();
        assert!(obj.validate().is_ok());
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut obj = well();
        obj.id = ObjectId::new("");
        assert_eq!(obj.validate(), Err(RegistrationError::EmptyId));
    }

    #[test]
    fn test_footprint_area() {
        assert_eq!(Footprint::new(4, 3).area(), 12);
        assert_eq!(Footprint::new(u32::MAX, 2).area(), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn test_object_id_borrow() {
        let id = ObjectId::from("object_castle");
        let as_str: &str = id.borrow();
        assert_eq!(as_str, "object_castle");
        assert_eq!(id.to_string(), "object_castle");
    }
}
