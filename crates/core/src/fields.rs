//! Form field identity and raw values.
//!
//! [`FieldKey`] is the closed set of fields the transfer-out screen captures.
//! [`FieldValue`] is the raw value as entered, before normalisation into the
//! backend's string representation (see [`crate::normalize`]).

use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Closed set of fields captured by the transfer-out screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    TransferredFrom,
    TransferredTo,
    Name,
    Mrn,
    ArtStarted,
    OriginalFirstLineRegimenDose,
    DateOfTransfer,
}

impl FieldKey {
    /// Every recognised field, in screen order.
    pub const ALL: [FieldKey; 7] = [
        FieldKey::TransferredFrom,
        FieldKey::TransferredTo,
        FieldKey::Name,
        FieldKey::Mrn,
        FieldKey::ArtStarted,
        FieldKey::OriginalFirstLineRegimenDose,
        FieldKey::DateOfTransfer,
    ];

    /// Wire name used in form-field paths.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::TransferredFrom => "transferredFrom",
            FieldKey::TransferredTo => "transferredTo",
            FieldKey::Name => "name",
            FieldKey::Mrn => "mrn",
            FieldKey::ArtStarted => "artStarted",
            FieldKey::OriginalFirstLineRegimenDose => "originalFirstLineRegimenDose",
            FieldKey::DateOfTransfer => "dateOfTransfer",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value of a single field as entered on the screen.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Free text (patient name, receiving facility name, ...).
    Text(String),
    /// Coded answer selected from a fixed list; carries the answer concept id.
    Code(String),
    /// Date-picker selection. Only the start date is submitted; the end date
    /// exists because the picker widget can hand back a range.
    DateSelection {
        start_date: DateTime<FixedOffset>,
        end_date: Option<DateTime<FixedOffset>>,
    },
}

impl FieldValue {
    /// Empty text or code selections count as "not provided" and are skipped
    /// at submission so operators need not fill every field.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Code(s) => s.is_empty(),
            FieldValue::DateSelection { .. } => false,
        }
    }
}
