//! Observation assembly from the field snapshot.

use crate::constants::FORM_FIELD_NAMESPACE;
use crate::{concept_for, normalize_value, ConceptId, FieldSnapshot};
use serde::Serialize;

/// One concept-tagged data point inside an encounter.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Observation {
    pub concept: ConceptId,
    #[serde(rename = "formFieldNamespace")]
    pub form_field_namespace: &'static str,
    #[serde(rename = "formFieldPath")]
    pub form_field_path: String,
    pub value: String,
}

/// Translate a snapshot into the observations to submit.
///
/// Fields holding empty values are skipped so operators can submit a
/// partially filled form. At most one observation is emitted per field.
/// Order follows the snapshot's own insertion order; callers comparing
/// results should treat the list as a set.
pub fn build_observations(snapshot: &FieldSnapshot) -> Vec<Observation> {
    let mut observations = Vec::with_capacity(snapshot.len());
    for (key, value) in snapshot.iter() {
        if value.is_empty() {
            tracing::debug!(field = key.as_str(), "skipping empty field");
            continue;
        }
        observations.push(Observation {
            concept: concept_for(key),
            form_field_namespace: FORM_FIELD_NAMESPACE,
            form_field_path: format!("{FORM_FIELD_NAMESPACE}-{key}"),
            value: normalize_value(value),
        });
    }
    observations
}
