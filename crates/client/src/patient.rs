//! Patient demographics and MRN extraction.

use crate::{ClientResult, RestClient};
use serde::Deserialize;
use transferout_core::constants::MRN_IDENTIFIER_TYPE;

/// Display name and MRN derived from a patient record.
///
/// A patient without a preferred name or without an MRN identifier yields
/// `None` for the respective field; that is accepted screen behaviour, not
/// an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientContext {
    pub display_name: Option<String>,
    pub mrn: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PatientWire {
    #[serde(default)]
    pub person: Option<PersonWire>,
    #[serde(default)]
    pub identifiers: Vec<IdentifierWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PersonWire {
    #[serde(rename = "preferredName", default)]
    pub preferred_name: Option<NameWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NameWire {
    #[serde(rename = "givenName", default)]
    pub given_name: Option<String>,
    #[serde(rename = "middleName", default)]
    pub middle_name: Option<String>,
    #[serde(rename = "familyName", default)]
    pub family_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdentifierWire {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(rename = "identifierType", default)]
    pub identifier_type: Option<IdentifierTypeWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdentifierTypeWire {
    #[serde(default)]
    pub display: String,
}

fn derive_context(wire: PatientWire) -> PatientContext {
    let display_name = wire
        .person
        .and_then(|person| person.preferred_name)
        .map(|name| {
            [name.given_name, name.middle_name, name.family_name]
                .into_iter()
                .flatten()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|joined| !joined.is_empty());

    let mrn = wire
        .identifiers
        .into_iter()
        .find(|entry| {
            entry
                .identifier_type
                .as_ref()
                .is_some_and(|t| t.display == MRN_IDENTIFIER_TYPE)
        })
        .and_then(|entry| entry.identifier);

    PatientContext { display_name, mrn }
}

/// Fetch one patient record and derive the screen's read-only defaults.
pub async fn load_patient(client: &RestClient, patient_uuid: &str) -> ClientResult<PatientContext> {
    let wire: PatientWire = client
        .get_json(&format!("patient/{patient_uuid}?v=full"))
        .await?;
    let context = derive_context(wire);
    if context.mrn.is_none() {
        tracing::warn!(patient = patient_uuid, "patient has no MRN identifier");
    }
    Ok(context)
}
