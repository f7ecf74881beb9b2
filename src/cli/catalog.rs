//! Catalog listing commands.

use super::output::{JsonObject, format_cost, format_text};
use super::{CliError, OutputFormat};
use citadel::{ObjectCategory, Session};

/// Execute the objects command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn objects(
    category: Option<ObjectCategory>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let session = Session::default();
    let categories: Vec<_> = match category {
        Some(category) => vec![category],
        None => session.objects().categories().collect(),
    };

    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = categories
                .iter()
                .flat_map(|c| session.objects().objects(*c))
                .map(|object| JsonObject::from_object(&session, object))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            for category in categories {
                println!("{category} ({})", category.color().hex());
                for object in session.objects().objects(category) {
                    println!("{}", format_text(&JsonObject::from_object(&session, object)));
                }
            }
        }
    }

    Ok(())
}

/// Execute the cost command.
///
/// Unknown ids print the zero cost, matching the rules engine.
///
/// # Errors
///
/// Never fails; the signature matches the other commands.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn cost(id: &str) -> Result<(), CliError> {
    let session = Session::default();
    let cost = format_cost(&session.costs().cost(id));
    if session.costs().contains(id) {
        println!("{id}: {cost}");
    } else {
        println!("{id}: {cost} (no cost registered)");
    }
    Ok(())
}

/// Execute the flammable command.
///
/// # Errors
///
/// Never fails; the signature matches the other commands.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn flammable() -> Result<(), CliError> {
    let session = Session::default();
    for id in session.flammable().flammable_object_ids() {
        let damage = session.flammable().fire_damage_per_tick(id.as_str());
        println!("{id}: {damage}/tick");
    }
    Ok(())
}
