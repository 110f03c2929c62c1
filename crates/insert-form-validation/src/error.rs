//! Errors for everything that is not a validation outcome.
//!
//! Invalid input is never an error here: rules answer `false`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// An edit addressed a field the form does not track
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    /// Length bounds where the maximum is below the minimum
    #[error("invalid length bounds: max {max} is below min {min}")]
    InvalidBounds { min: usize, max: usize },
}
