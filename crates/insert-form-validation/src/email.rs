//! Email validation

use crate::error::FormError;
use crate::string::LengthValidator;

/// Length bound plus a structural email check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailValidator {
    length: LengthValidator,
}

impl EmailValidator {
    /// Bounds used by the registration form's email field
    pub const DEFAULT: Self = Self {
        length: LengthValidator::bounded(4, 256),
    };

    pub fn new(min: usize, max: usize) -> Result<Self, FormError> {
        Ok(Self {
            length: LengthValidator::new(min, max)?,
        })
    }

    pub fn min(&self) -> usize {
        self.length.min()
    }

    pub fn max(&self) -> usize {
        self.length.max()
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.length.is_valid(value) && is_valid_email_shape(value)
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Validates the structural shape of an email address
///
/// Checks for:
/// - Exactly one '@' symbol
/// - Non-empty local part made of letters, digits and `._-+`
/// - Domain with at least one '.' and a non-empty label around every dot
/// - Top-level label of at least two characters
pub fn is_valid_email_shape(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    // A second '@' ends up in the domain part
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    let valid_local_chars = |c: char| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+');
    if !local.chars().all(valid_local_chars) {
        return false;
    }

    let valid_domain_chars = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-');
    if !domain.chars().all(valid_domain_chars) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }

    if labels
        .iter()
        .any(|label| label.starts_with('-') || label.ends_with('-'))
    {
        return false;
    }

    labels
        .last()
        .map_or(false, |tld| tld.chars().count() >= 2)
}
