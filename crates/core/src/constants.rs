//! Fixed identifiers and markers used across the pipeline.

/// Tag a location record must carry to count as the operating facility.
pub const FACILITY_LOCATION_TAG: &str = "Facility Location";

/// Identifier type whose value is the patient's medical record number.
pub const MRN_IDENTIFIER_TYPE: &str = "MRN";

/// Namespace prefixed onto every form-field path in submitted observations.
pub const FORM_FIELD_NAMESPACE: &str = "rfe-forms";

/// Provider recorded on every transfer-out encounter.
pub const DEFAULT_PROVIDER_UUID: &str = "caa66686-bde7-4341-a330-91b7ad0ade07";

/// Role the recorded provider holds on the encounter.
pub const DEFAULT_PROVIDER_ROLE_UUID: &str = "a0b03050-c99b-11e0-9572-0800200c9a66";
