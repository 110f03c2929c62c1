//! The fixed set of tracked form fields

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One tracked field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    FirstName,
    LastName,
    Day,
    Year,
    Street,
    StreetNumber,
    City,
    PostalCode,
    Email,
    PhoneNumber,
    Gender,
}

impl FieldKey {
    pub const COUNT: usize = 11;

    /// All fields in form order
    pub const ALL: [FieldKey; Self::COUNT] = [
        FieldKey::FirstName,
        FieldKey::LastName,
        FieldKey::Day,
        FieldKey::Year,
        FieldKey::Street,
        FieldKey::StreetNumber,
        FieldKey::City,
        FieldKey::PostalCode,
        FieldKey::Email,
        FieldKey::PhoneNumber,
        FieldKey::Gender,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Identifier used in serialized output (`firstName`, `postalCode`, ...)
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKey::FirstName => "firstName",
            FieldKey::LastName => "lastName",
            FieldKey::Day => "day",
            FieldKey::Year => "year",
            FieldKey::Street => "street",
            FieldKey::StreetNumber => "streetNumber",
            FieldKey::City => "city",
            FieldKey::PostalCode => "postalCode",
            FieldKey::Email => "email",
            FieldKey::PhoneNumber => "phoneNumber",
            FieldKey::Gender => "gender",
        }
    }

    /// The `name` attribute of the field's `<input>` on the insert page
    pub const fn input_name(self) -> &'static str {
        match self {
            FieldKey::FirstName => "name",
            FieldKey::LastName => "surname",
            FieldKey::Day => "day",
            FieldKey::Year => "year",
            FieldKey::Street => "street",
            FieldKey::StreetNumber => "streetNumber",
            FieldKey::City => "city",
            FieldKey::PostalCode => "nap",
            FieldKey::Email => "email",
            FieldKey::PhoneNumber => "number",
            FieldKey::Gender => "gender",
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            FieldKey::FirstName => "First name",
            FieldKey::LastName => "Last name",
            FieldKey::Day => "Birth day",
            FieldKey::Year => "Birth year",
            FieldKey::Street => "Street",
            FieldKey::StreetNumber => "Civic number",
            FieldKey::City => "City",
            FieldKey::PostalCode => "Postal code",
            FieldKey::Email => "Email",
            FieldKey::PhoneNumber => "Phone number",
            FieldKey::Gender => "Gender",
        }
    }

    pub fn from_input_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.input_name() == name)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the input name (`nap`) or the identifier (`postalCode`)
impl FromStr for FieldKey {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.input_name() == s || key.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
