//! Last-computed validity of every tracked field

use crate::field::FieldKey;
use std::collections::BTreeMap;

/// One boolean per [`FieldKey`], all `false` until a rule says otherwise.
///
/// Backed by a fixed array so every key is always present and no other key
/// can be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidityRegistry {
    entries: [bool; FieldKey::COUNT],
}

impl ValidityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the entry for `key`
    pub fn set_field_validity(&mut self, key: FieldKey, valid: bool) {
        self.entries[key.index()] = valid;
    }

    pub fn is_valid(&self, key: FieldKey) -> bool {
        self.entries[key.index()]
    }

    /// Logical AND over every entry
    pub fn all_valid(&self) -> bool {
        self.entries.iter().all(|&valid| valid)
    }

    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|&&valid| valid).count()
    }

    /// Entries in form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, bool)> + '_ {
        FieldKey::ALL
            .into_iter()
            .map(move |key| (key, self.entries[key.index()]))
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.iter().filter(|(_, valid)| !valid).map(|(key, _)| key)
    }

    /// Marks every field invalid again
    pub fn reset(&mut self) {
        self.entries = [false; FieldKey::COUNT];
    }

    pub fn snapshot(&self) -> BTreeMap<FieldKey, bool> {
        self.iter().collect()
    }
}
