//! Which rule validates which field

use crate::clock::{Clock, SystemClock};
use crate::config::FormConfig;
use crate::email::EmailValidator;
use crate::error::FormError;
use crate::field::FieldKey;
use crate::rules::{
    civic_number_rule, day_rule, gender_rule, phone_rule, postal_code_rule, year_rule_at,
    GENDER_TOKENS, MAX_AGE_YEARS, MAX_CIVIC_NUMBER, PHONE_DIGITS,
};
use crate::string::LengthValidator;

/// Per-field rule table.
///
/// The name-class fields share one [`LengthValidator`]; the email field has its
/// own [`EmailValidator`]; everything else uses a fixed structural rule.
#[derive(Debug)]
pub struct FieldRules {
    text: LengthValidator,
    email: EmailValidator,
    clock: Box<dyn Clock>,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::new(LengthValidator::NAME, EmailValidator::DEFAULT)
    }
}

impl FieldRules {
    pub fn new(text: LengthValidator, email: EmailValidator) -> Self {
        Self {
            text,
            email,
            clock: Box::new(SystemClock),
        }
    }

    pub fn from_config(config: &FormConfig) -> Result<Self, FormError> {
        let text = LengthValidator::new(config.text.min_length, config.text.max_length)?;
        let email = EmailValidator::new(config.email.min_length, config.email.max_length)?;
        Ok(Self::new(text, email))
    }

    /// Replaces the clock the year rule reads
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Runs the rule for `key` against the raw input value
    pub fn validate(&self, key: FieldKey, raw: &str) -> bool {
        match key {
            FieldKey::FirstName | FieldKey::LastName | FieldKey::Street | FieldKey::City => {
                self.text.is_valid(raw)
            }
            FieldKey::Day => day_rule(raw),
            FieldKey::Year => year_rule_at(raw, self.clock.current_year()),
            FieldKey::StreetNumber => civic_number_rule(raw),
            FieldKey::PostalCode => postal_code_rule(raw),
            FieldKey::Email => self.email.is_valid(raw),
            FieldKey::PhoneNumber => phone_rule(raw),
            FieldKey::Gender => gender_rule(raw),
        }
    }

    /// Short summary of the rule applied to `key`
    pub fn describe(&self, key: FieldKey) -> String {
        match key {
            FieldKey::FirstName | FieldKey::LastName | FieldKey::Street | FieldKey::City => {
                format!("{} to {} characters", self.text.min(), self.text.max())
            }
            FieldKey::Day => "whole number from 1 to 31".to_string(),
            FieldKey::Year => {
                let current = i64::from(self.clock.current_year());
                format!("year from {} to {}", current - MAX_AGE_YEARS + 1, current)
            }
            FieldKey::StreetNumber => format!("whole number from 1 to {}", MAX_CIVIC_NUMBER),
            FieldKey::PostalCode => "four-digit Swiss postal code (1000-9999)".to_string(),
            FieldKey::Email => format!(
                "email address, {} to {} characters",
                self.email.min(),
                self.email.max()
            ),
            FieldKey::PhoneNumber => format!(
                "{} to {} digits, optional '+' and separators",
                PHONE_DIGITS.0, PHONE_DIGITS.1
            ),
            FieldKey::Gender => format!("one of {}", GENDER_TOKENS.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::{EmailConfig, TextConfig};

    #[test]
    fn test_dispatch() {
        let rules = FieldRules::default().with_clock(FixedClock(2019));
        assert!(rules.validate(FieldKey::FirstName, "Giulio"));
        assert!(rules.validate(FieldKey::Day, "12"));
        assert!(rules.validate(FieldKey::Year, "1999"));
        assert!(!rules.validate(FieldKey::Year, "2020"));
        assert!(rules.validate(FieldKey::PostalCode, "6900"));
        assert!(rules.validate(FieldKey::Email, "giulio@example.ch"));
        assert!(rules.validate(FieldKey::PhoneNumber, "+41 91 123 45 67"));
        assert!(rules.validate(FieldKey::Gender, "m"));
        assert!(!rules.validate(FieldKey::StreetNumber, "abc"));
    }

    #[test]
    fn test_name_class_fields_share_bounds() {
        let rules = FieldRules::default();
        let long = "x".repeat(51);
        for key in [FieldKey::FirstName, FieldKey::LastName, FieldKey::Street, FieldKey::City] {
            assert!(rules.validate(key, ""));
            assert!(!rules.validate(key, &long));
        }
    }

    #[test]
    fn test_from_config() {
        let config = FormConfig {
            text: TextConfig {
                min_length: 1,
                max_length: 20,
            },
            email: EmailConfig::default(),
        };
        let rules = FieldRules::from_config(&config).unwrap();
        assert!(!rules.validate(FieldKey::City, ""));
        assert!(rules.validate(FieldKey::City, "Lugano"));
        assert_eq!(rules.describe(FieldKey::City), "1 to 20 characters");
    }

    #[test]
    fn test_from_config_rejects_inverted_bounds() {
        let config = FormConfig {
            text: TextConfig::default(),
            email: EmailConfig {
                min_length: 300,
                max_length: 4,
            },
        };
        assert_eq!(
            FieldRules::from_config(&config).unwrap_err(),
            FormError::InvalidBounds { min: 300, max: 4 }
        );
    }

    #[test]
    fn test_describe_year_uses_clock() {
        let rules = FieldRules::default().with_clock(FixedClock(2019));
        assert_eq!(rules.describe(FieldKey::Year), "year from 1900 to 2019");
    }
}
