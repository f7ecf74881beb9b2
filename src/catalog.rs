//! Catalog layer for Citadel.
//!
//! Keyed registries mapping an [`ObjectId`] to gameplay attributes:
//! - Object descriptors grouped by category
//! - Build costs
//! - Health configuration
//! - Flammability
//!
//! Every registry is built once by a deterministic registration pass over
//! the static tables in `defaults` and is read-mostly afterwards. The
//! registries are only coupled through `ObjectId`; a dangling id is legal
//! and resolves to the values in [`fallback`].

mod category;
mod costs;
mod defaults;
pub mod fallback;
mod flammable;
mod health;
mod object;
mod objects;

pub use category::{Color, ObjectCategory, UnknownCategory};
pub use costs::{BuildCost, BuildCosts};
pub use defaults::{
    DEFAULT_COSTS, DEFAULT_FLAMMABLE, DEFAULT_HEALTH, DEFAULT_OBJECTS, ObjectDef,
};
pub use flammable::{FlammableCatalog, FlammableEntry};
pub use health::{ObjectHealth, ObjectHealthConfig};
pub use object::{Footprint, GameObject, ObjectId};
pub use objects::ObjectCatalog;
