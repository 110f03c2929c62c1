//! Length-bounded free-text validation

use crate::error::FormError;

/// Accepts any text whose length lies within `min..=max`.
///
/// Length is counted in characters, so "Zürich" has length 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthValidator {
    min: usize,
    max: usize,
}

impl LengthValidator {
    /// Bounds of the name-class fields: first name, last name, street, city
    pub const NAME: Self = Self::bounded(0, 50);

    /// Creates a validator, rejecting bounds where `max < min`
    ///
    /// # Examples
    /// ```
    /// use insert_form_validation::LengthValidator;
    /// let v = LengthValidator::new(1, 5).unwrap();
    /// assert!(v.is_valid("Anna"));
    /// assert!(!v.is_valid(""));
    /// assert!(LengthValidator::new(5, 1).is_err());
    /// ```
    pub fn new(min: usize, max: usize) -> Result<Self, FormError> {
        if max < min {
            return Err(FormError::InvalidBounds { min, max });
        }
        Ok(Self::bounded(min, max))
    }

    pub(crate) const fn bounded(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_valid(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

impl Default for LengthValidator {
    fn default() -> Self {
        Self::NAME
    }
}
