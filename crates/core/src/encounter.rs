//! Encounter payload wire model.
//!
//! This is the exact structure POSTed to the backend's encounter endpoint.
//! Field names follow the backend's camelCase convention via serde renames.

use crate::{CoreError, CoreResult, EncounterConfig, Observation};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Provider attached to the encounter, with the role it holds.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EncounterProvider {
    pub provider: String,
    #[serde(rename = "encounterRole")]
    pub encounter_role: String,
}

/// Reference to the form that produced the encounter.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FormRef {
    pub uuid: String,
}

/// Full encounter record submitted to the backend.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EncounterPayload {
    #[serde(rename = "encounterDatetime")]
    pub encounter_datetime: String,
    #[serde(rename = "encounterProviders")]
    pub encounter_providers: Vec<EncounterProvider>,
    #[serde(rename = "encounterType")]
    pub encounter_type: String,
    pub form: FormRef,
    pub location: String,
    pub patient: String,
    /// Always empty; the screen records no orders.
    pub orders: Vec<serde_json::Value>,
    pub obs: Vec<Observation>,
}

impl EncounterPayload {
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self).map_err(CoreError::Serialization)
    }
}

/// Assemble the payload from resolved context and built observations.
///
/// `encounter_instant` is captured once at screen activation and reused for
/// every submission attempt in that screen's lifetime. A missing facility
/// leaves `location` blank, matching the screen's unresolved default.
pub fn assemble_encounter(
    config: &EncounterConfig,
    encounter_instant: DateTime<Utc>,
    location_uuid: Option<&str>,
    patient_uuid: &str,
    obs: Vec<Observation>,
) -> EncounterPayload {
    EncounterPayload {
        encounter_datetime: encounter_instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        encounter_providers: vec![EncounterProvider {
            provider: config.provider_uuid().to_string(),
            encounter_role: config.provider_role_uuid().to_string(),
        }],
        encounter_type: config.encounter_type_uuid().to_string(),
        form: FormRef {
            uuid: config.form_uuid().to_string(),
        },
        location: location_uuid.unwrap_or_default().to_string(),
        patient: patient_uuid.to_string(),
        orders: Vec::new(),
        obs,
    }
}
