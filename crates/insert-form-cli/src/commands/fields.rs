use colored::Colorize;
use insert_form_validation::{FieldKey, FormSession};

pub fn execute(session: &FormSession) {
    println!("{}", "Tracked fields".green().bold());
    println!();
    for key in FieldKey::ALL {
        println!(
            "  {:<14} {:<14} {}",
            key.input_name().cyan(),
            key.label(),
            session.rules().describe(key)
        );
    }
}
