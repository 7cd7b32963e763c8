//! Concept dictionary for the transfer-out form.
//!
//! Each form field records its value against one dictionary concept. The
//! mapping is an exhaustive match over [`FieldKey`], so a field without a
//! concept cannot be expressed at all.

use crate::FieldKey;
use serde::{Serialize, Serializer};
use std::fmt;

/// Opaque backend concept identifier.
///
/// Serialises as a plain string; the backend owns the dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConceptId(&'static str);

impl ConceptId {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for ConceptId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0)
    }
}

/// Dictionary concept recorded for a form field.
pub fn concept_for(key: FieldKey) -> ConceptId {
    ConceptId(match key {
        FieldKey::TransferredFrom => "161550AAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        FieldKey::TransferredTo => "2c30c599-1e4f-46f9-8488-5ab57cdc8ac3",
        FieldKey::Name => "1593AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        FieldKey::Mrn => "9f760fe1-5cde-41ab-99b8-b8e1d77de902",
        FieldKey::ArtStarted => "1149AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        FieldKey::OriginalFirstLineRegimenDose => "6d7d0327-e1f8-4246-bfe5-be1e82d94b14",
        FieldKey::DateOfTransfer => "160649AAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    })
}

/// Answer concepts offered by the coded fields.
pub mod answers {
    /// "Yes" answer for the ART-started field.
    pub const ART_STARTED_YES: &str = "1065AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
    /// "No" answer for the ART-started field.
    pub const ART_STARTED_NO: &str = "1066AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    /// `(code, display)` pairs offered by the original first-line regimen
    /// dose field.
    pub const REGIMEN_DOSES: [(&str, &str); 3] = [
        ("2798d3bc-2e0a-459c-b249-9516b380a69e", "1a30 - D4T(30)+3TC+NVP"),
        ("3495d89f-4d46-44d8-b1c9-d101bc9f15d4", "1a40 - D4T(40)+3TC+NVP"),
        ("ae0dc59c-eb3d-421b-913b-ee5a06ec6182", "1b30 - D4T(30)+3TC+EFV"),
    ];
}
