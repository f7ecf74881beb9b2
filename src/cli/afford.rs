//! Afford command implementation.

use super::CliError;
use super::output::format_cost;
use citadel::{BuildOutcome, Session, StartingProfiles};
use std::path::Path;

/// Execute the afford command.
///
/// Builds the object once in a fresh session started from `profile` and
/// reports the outcome.
///
/// # Errors
///
/// Returns an error if the profiles file cannot be loaded.
pub(crate) fn execute(id: &str, profile: &str, profiles: Option<&Path>) -> Result<(), CliError> {
    let profiles = match profiles {
        Some(path) => StartingProfiles::load(path)?,
        None => StartingProfiles::builtin(),
    };

    let session = Session::with_profile(&profiles, profile);
    let starting = session.resources().snapshot();
    println!(
        "Profile {profile}: {} stone, {} wood, {} iron, {} gold",
        starting.stone, starting.wood, starting.iron, starting.gold
    );
    println!("Cost of {id}: {}", format_cost(&session.costs().cost(id)));

    match session.try_build(id) {
        BuildOutcome::Built(object) => {
            let left = session.resources().snapshot();
            println!(
                "Affordable: {} ({}x{}) leaves {} stone, {} wood, {} iron",
                object.name,
                object.footprint.width,
                object.footprint.height,
                left.stone,
                left.wood,
                left.iron
            );
        }
        BuildOutcome::InsufficientResources { shortfall } => {
            println!("Not affordable: missing {}", format_cost(&shortfall));
        }
        BuildOutcome::UnknownObject => {
            return Err(CliError::new(format!("Unknown object: {id}")));
        }
    }

    Ok(())
}
