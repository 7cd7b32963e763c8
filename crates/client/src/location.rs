//! Location listing and facility selection.
//!
//! The backend returns every known location; the operating facility is the
//! one tagged `"Facility Location"`. The wire structs mirror the backend's
//! response shape; [`Location`] is the domain-level result.

use crate::{ClientResult, RestClient};
use serde::Deserialize;
use transferout_core::constants::FACILITY_LOCATION_TAG;

/// A location selected as the operating facility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub uuid: String,
    pub display: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationListWire {
    pub results: Vec<LocationWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationWire {
    pub uuid: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub tags: Vec<TagWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagWire {
    #[serde(default)]
    pub display: String,
}

/// Pick the first facility-tagged entry, in list order. Later matches are
/// ignored; zero matches yields `None`.
fn select_facility(results: Vec<LocationWire>) -> Option<Location> {
    results
        .into_iter()
        .find(|entry| entry.tags.iter().any(|tag| tag.display == FACILITY_LOCATION_TAG))
        .map(|entry| Location {
            uuid: entry.uuid,
            display: entry.display,
        })
}

/// Fetch the location list once and resolve the operating facility.
///
/// No timeout and no retry; a transport or decode failure propagates to the
/// caller, which leaves the facility default blank.
pub async fn resolve_facility(client: &RestClient) -> ClientResult<Option<Location>> {
    let list: LocationListWire = client.get_json("location?v=full").await?;
    let facility = select_facility(list.results);
    match &facility {
        Some(location) => {
            tracing::info!(uuid = %location.uuid, display = %location.display, "resolved facility")
        }
        None => tracing::warn!("no location carries the facility tag"),
    }
    Ok(facility)
}
