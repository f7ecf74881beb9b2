//! Catalog check command implementation.

use super::CliError;
use citadel::Session;
use citadel::invariants::check_invariants;

/// Execute the check command.
///
/// # Errors
///
/// Returns an error if any invariant is violated.
pub(crate) fn execute() -> Result<(), CliError> {
    let session = Session::default();
    let violations = check_invariants(&session);

    println!(
        "Checked {} objects, {} costs, {} health entries, {} flammable",
        session.objects().len(),
        session.costs().len(),
        session.health().len(),
        session.flammable().len()
    );

    if violations.is_empty() {
        println!("All invariants hold.");
        return Ok(());
    }

    for violation in &violations {
        println!("  ✗ {}", violation.message);
    }
    Err(CliError::new(format!(
        "{} invariant violation(s)",
        violations.len()
    )))
}
