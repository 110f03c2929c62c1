//! Insert-Form Validation
//!
//! Field rules and submit gating for the person registration ("insert record") form.
//! Every edit runs the field's rule, records the outcome in a [`ValidityRegistry`]
//! and re-evaluates whether the submit control may be enabled.
//!
//! The crate has no DOM dependency: the browser binding (`insert-form-wasm`) and the
//! terminal driver (`insert-form-cli`) both talk to a [`FormSession`].

pub mod clock;
pub mod config;
pub mod email;
pub mod error;
pub mod field;
pub mod field_rules;
pub mod gate;
pub mod registry;
pub mod rules;
pub mod session;
pub mod string;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::FormConfig;
pub use email::EmailValidator;
pub use error::FormError;
pub use field::FieldKey;
pub use field_rules::FieldRules;
pub use gate::SubmitState;
pub use registry::ValidityRegistry;
pub use rules::*;
pub use session::{EditOutcome, FormSession};
pub use string::LengthValidator;
