//! Form session: the single entry point for edit events
//!
//! Each edit runs validate, register and gate in one synchronous call, so the
//! caller sees the submit state that results from exactly that edit.

use crate::error::FormError;
use crate::field::FieldKey;
use crate::field_rules::FieldRules;
use crate::gate::SubmitState;
use crate::registry::ValidityRegistry;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Result of one edit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOutcome {
    pub field: FieldKey,
    pub field_valid: bool,
    pub all_valid: bool,
}

impl EditOutcome {
    pub fn submit_state(&self) -> SubmitState {
        SubmitState::from(self.all_valid)
    }
}

/// Validity state of one form, from page load until submit or teardown
#[derive(Debug, Default)]
pub struct FormSession {
    rules: FieldRules,
    registry: ValidityRegistry,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: FieldRules) -> Self {
        Self {
            rules,
            registry: ValidityRegistry::new(),
        }
    }

    /// Handles an edit of `key` whose input now holds `raw`
    pub fn on_field_edited(&mut self, key: FieldKey, raw: &str) -> EditOutcome {
        let was_valid = self.registry.is_valid(key);
        let was_enabled = self.registry.all_valid();

        let field_valid = self.rules.validate(key, raw);
        self.registry.set_field_validity(key, field_valid);

        if field_valid != was_valid {
            debug!(field = %key, valid = field_valid, "field validity changed");
        }

        let all_valid = self.registry.all_valid();
        if all_valid != was_enabled {
            info!(submit = %SubmitState::from(all_valid), "submit gate changed");
        }

        EditOutcome {
            field: key,
            field_valid,
            all_valid,
        }
    }

    /// Handles an edit addressed by input name (`nap`) or identifier (`postalCode`)
    ///
    /// Unknown names leave the registry untouched.
    pub fn on_input_edited(&mut self, name: &str, raw: &str) -> Result<EditOutcome, FormError> {
        let key = name.parse::<FieldKey>().map_err(|err| {
            warn!(input = name, "edit for unknown form field");
            err
        })?;
        Ok(self.on_field_edited(key, raw))
    }

    pub fn all_valid(&self) -> bool {
        self.registry.all_valid()
    }

    pub fn submit_state(&self) -> SubmitState {
        SubmitState::evaluate(&self.registry)
    }

    pub fn is_field_valid(&self, key: FieldKey) -> bool {
        self.registry.is_valid(key)
    }

    pub fn registry(&self) -> &ValidityRegistry {
        &self.registry
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    pub fn snapshot(&self) -> BTreeMap<FieldKey, bool> {
        self.registry.snapshot()
    }

    /// Starts over as if the page had just loaded
    pub fn reset(&mut self) {
        debug!("form session reset");
        self.registry.reset();
    }
}
