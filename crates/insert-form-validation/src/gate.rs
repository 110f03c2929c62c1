//! Submit gate: the registry reduced to a single enable/disable signal

use crate::registry::ValidityRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    Enabled,
    Disabled,
}

impl SubmitState {
    pub fn evaluate(registry: &ValidityRegistry) -> Self {
        Self::from(registry.all_valid())
    }

    pub fn is_enabled(self) -> bool {
        self == SubmitState::Enabled
    }
}

impl From<bool> for SubmitState {
    fn from(all_valid: bool) -> Self {
        if all_valid {
            SubmitState::Enabled
        } else {
            SubmitState::Disabled
        }
    }
}

impl fmt::Display for SubmitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitState::Enabled => write!(f, "enabled"),
            SubmitState::Disabled => write!(f, "disabled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKey;

    #[test]
    fn test_evaluate_follows_registry() {
        let mut registry = ValidityRegistry::new();
        assert_eq!(SubmitState::evaluate(&registry), SubmitState::Disabled);

        for key in FieldKey::ALL {
            registry.set_field_validity(key, true);
        }
        assert_eq!(SubmitState::evaluate(&registry), SubmitState::Enabled);
        assert!(SubmitState::evaluate(&registry).is_enabled());
    }

    #[test]
    fn test_display() {
        assert_eq!(SubmitState::Enabled.to_string(), "enabled");
        assert_eq!(SubmitState::Disabled.to_string(), "disabled");
    }
}
