//! Resource economy for Citadel.
//!
//! - Stock of stone, wood, iron and gold, never negative
//! - Affordability checks against build costs
//! - Atomic check-then-spend for construction
//! - Starting stock profiles loaded from JSON

mod profiles;
mod resources;
mod stock;

pub use profiles::StartingProfiles;
pub use resources::GameResources;
pub use stock::ResourceStock;
