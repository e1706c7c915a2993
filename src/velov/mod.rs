//! Vélo'v bike-share station availability.

mod name;

pub use name::{format_name, title_case};

use crate::error::{Error, Result};
use crate::fetch::{HttpClient, fetch_json, null_as_default};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const STATIONS_URL: &str =
    "https://data.grandlyon.com/fr/datapusher/ws/rdata/jcd_jcdecaux.jcdvelov/all.json?maxfeatures=-1&start=1";

/// Live availability of a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub bikes_available: i64,
    pub docks_available: i64,
    /// Upstream availability code, passed through as is.
    pub availability_code: i64,
}

#[derive(Debug, Deserialize)]
struct StationInfo {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    values: Vec<StationRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StationRecord {
    #[serde(deserialize_with = "null_as_default")]
    number: i64,
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    available_bikes: i64,
    #[serde(deserialize_with = "null_as_default")]
    available_bike_stands: i64,
    #[serde(deserialize_with = "null_as_default")]
    availabilitycode: i64,
}

/// Looks up station `station_id` in the Vélo'v feed. The feed is public, no
/// credentials are sent.
///
/// # Errors
///
/// [`Error::StationNotFound`] when no station carries that number (or its
/// name is blank), [`Error::Upstream`] when the feed cannot be fetched.
#[tracing::instrument(skip(client))]
pub async fn get_station<C>(client: &C, station_id: i64) -> Result<Station>
where
    C: HttpClient + ?Sized,
{
    let info: StationInfo = fetch_json(client, STATIONS_URL)
        .await
        .map_err(|err| Error::upstream("querying station info", err))?;
    debug!(stations = info.values.len(), "Station feed received");

    let record = info
        .values
        .into_iter()
        .find(|record| record.number == station_id)
        .ok_or(Error::StationNotFound)?;

    let station = Station {
        name: format_name(&record.name),
        bikes_available: record.available_bikes,
        docks_available: record.available_bike_stands,
        availability_code: record.availabilitycode,
    };

    if station.name.is_empty() {
        return Err(Error::StationNotFound);
    }
    Ok(station)
}
