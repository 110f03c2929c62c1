pub mod check;
pub mod fields;
pub mod replay;

use colored::Colorize;
use insert_form_validation::{EditOutcome, FormSession, SubmitState};

/// Prints one edit result as a status line
pub(crate) fn print_outcome(outcome: &EditOutcome, value: &str) {
    let mark = if outcome.field_valid {
        "✓".green()
    } else {
        "✗".red()
    };
    println!(
        "{} {:<14} {:?}",
        mark,
        outcome.field.input_name(),
        value
    );
}

/// Prints the submit state and the fields still holding it back
pub(crate) fn print_summary(session: &FormSession) {
    println!();
    match session.submit_state() {
        SubmitState::Enabled => println!("Submit: {}", "enabled".green().bold()),
        SubmitState::Disabled => {
            println!("Submit: {}", "disabled".red().bold());
            let pending: Vec<&str> = session
                .registry()
                .invalid_fields()
                .map(|key| key.input_name())
                .collect();
            println!("Invalid: {}", pending.join(", ").yellow());
        }
    }
}
