//! Snapshot of the values currently entered on the screen.

use crate::{FieldKey, FieldValue};

/// Insertion-ordered mapping from field key to its current value.
///
/// Keys that were never set are "not provided". Re-setting a key replaces
/// its value in place, keeping the key's original position, so iteration
/// order reflects the order in which fields were first filled.
#[derive(Clone, Debug, Default)]
pub struct FieldSnapshot {
    entries: Vec<(FieldKey, FieldValue)>,
}

impl FieldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the value for `key`.
    pub fn set(&mut self, key: FieldKey, value: FieldValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Remove the value for `key`, returning it if it was present.
    pub fn remove(&mut self, key: FieldKey) -> Option<FieldValue> {
        let idx = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
