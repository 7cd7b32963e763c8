//! # Transfer-Out Client
//!
//! REST collaborators for the transfer-out pipeline:
//! - [`rest::RestClient`]: thin wrapper around the backend base URL
//! - [`location`]: location listing and facility selection
//! - [`patient`]: patient demographics and MRN extraction
//! - [`submit`]: one-shot, cancellable encounter submission
//!
//! Calls are deliberately bare: no timeout, no retry, no de-duplication.
//! Recovery policy belongs to the screen layer.

pub mod location;
pub mod patient;
pub mod rest;
pub mod submit;

pub use location::{resolve_facility, Location};
pub use patient::{load_patient, PatientContext};
pub use rest::RestClient;
pub use submit::{submit_encounter, CancelHandle, CancelToken};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend rejected the request with status {0}")]
    Status(reqwest::StatusCode),
    #[error("submission was cancelled")]
    Cancelled,
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
