//! Fixed encounter configuration.
//!
//! These identifiers are resolved once at process startup and passed into the
//! pipeline; nothing in the core reads environment variables during a
//! submission.

use crate::constants::{DEFAULT_PROVIDER_ROLE_UUID, DEFAULT_PROVIDER_UUID};
use crate::{CoreError, CoreResult};

/// Backend identifiers stamped onto every submitted encounter.
#[derive(Clone, Debug)]
pub struct EncounterConfig {
    encounter_type_uuid: String,
    form_uuid: String,
    provider_uuid: String,
    provider_role_uuid: String,
}

impl EncounterConfig {
    /// Create a new `EncounterConfig`. All identifiers must be non-empty.
    pub fn new(
        encounter_type_uuid: String,
        form_uuid: String,
        provider_uuid: String,
        provider_role_uuid: String,
    ) -> CoreResult<Self> {
        for (name, value) in [
            ("encounter_type_uuid", &encounter_type_uuid),
            ("form_uuid", &form_uuid),
            ("provider_uuid", &provider_uuid),
            ("provider_role_uuid", &provider_role_uuid),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::InvalidInput(format!("{name} cannot be empty")));
            }
        }

        Ok(Self {
            encounter_type_uuid,
            form_uuid,
            provider_uuid,
            provider_role_uuid,
        })
    }

    /// Configuration using the stock provider and role identifiers.
    pub fn with_default_providers(
        encounter_type_uuid: String,
        form_uuid: String,
    ) -> CoreResult<Self> {
        Self::new(
            encounter_type_uuid,
            form_uuid,
            DEFAULT_PROVIDER_UUID.to_string(),
            DEFAULT_PROVIDER_ROLE_UUID.to_string(),
        )
    }

    pub fn encounter_type_uuid(&self) -> &str {
        &self.encounter_type_uuid
    }

    pub fn form_uuid(&self) -> &str {
        &self.form_uuid
    }

    pub fn provider_uuid(&self) -> &str {
        &self.provider_uuid
    }

    pub fn provider_role_uuid(&self) -> &str {
        &self.provider_role_uuid
    }
}
