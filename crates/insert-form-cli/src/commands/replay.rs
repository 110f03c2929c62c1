use anyhow::{Context, Result};
use insert_form_validation::FormSession;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{print_outcome, print_summary};

/// One line of an edit log
#[derive(Debug, Deserialize, PartialEq)]
pub struct EditEvent {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

fn parse_log(content: &str) -> Result<Vec<EditEvent>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<EditEvent>(line)
                .with_context(|| format!("Invalid edit on line {}", i + 1))
        })
        .collect()
}

fn apply(session: &mut FormSession, events: &[EditEvent]) -> Result<bool> {
    for (i, event) in events.iter().enumerate() {
        let outcome = session
            .on_input_edited(&event.field, &event.value)
            .with_context(|| format!("Edit #{} rejected", i + 1))?;
        print_outcome(&outcome, &event.value);
    }

    print_summary(session);
    Ok(session.all_valid())
}

/// Replays the log through the session and reports whether submit ended up enabled
pub fn execute(session: &mut FormSession, path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read edit log: {:?}", path))?;
    let events = parse_log(&content)?;
    tracing::debug!("Replaying {} edits from {:?}", events.len(), path);
    apply(session, &events)
}
