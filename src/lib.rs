// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Citadel: catalog and rules engine for a castle-building strategy game.
//!
//! This crate holds the gameplay rules behind the build menu:
//! - Object descriptors grouped by category
//! - Build cost, health and flammability registries keyed by object id
//! - The resource economy that checks affordability and spends stock
//! - Per-variant constants for wall and tower tiers
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Session (composition root)        │
//! ├──────────────────┬──────────────────┤
//! │  GameResources   │  Variant tables  │
//! ├──────────────────┴──────────────────┤
//! │  Catalogs (objects/cost/hp/fire)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! Every catalog lookup is total: an id nobody registered resolves to the
//! values in [`catalog::fallback`] instead of an error.

pub mod assets;
pub mod catalog;
pub mod economy;
pub mod error;
pub mod invariants;
pub mod session;
pub mod strings;
pub mod variants;

pub use error::{ConfigError, RegistrationError};

// Re-export key types at crate root for convenience
pub use catalog::{
    BuildCost, BuildCosts, FlammableCatalog, GameObject, ObjectCatalog, ObjectCategory,
    ObjectHealth, ObjectId,
};
pub use economy::{GameResources, ResourceStock, StartingProfiles};
pub use session::{BuildOutcome, Session};
