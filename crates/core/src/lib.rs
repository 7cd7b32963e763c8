//! # Transfer-Out Core
//!
//! Pure domain logic for the transfer-out encounter pipeline:
//! - The closed set of form fields and their concept dictionary
//! - Value normalisation (calendar dates in particular)
//! - Observation assembly and the encounter payload wire model
//!
//! **No I/O concerns**: backend fetches and submission belong in
//! `transferout-client`; screen orchestration belongs in `transferout-screen`.

pub mod concepts;
pub mod config;
pub mod constants;
pub mod encounter;
pub mod error;
pub mod fields;
pub mod normalize;
pub mod observation;
pub mod snapshot;

pub use concepts::{concept_for, ConceptId};
pub use config::EncounterConfig;
pub use encounter::{assemble_encounter, EncounterPayload, EncounterProvider, FormRef};
pub use error::{CoreError, CoreResult};
pub use fields::{FieldKey, FieldValue};
pub use normalize::normalize_value;
pub use observation::{build_observations, Observation};
pub use snapshot::FieldSnapshot;
