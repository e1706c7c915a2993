//! TCL stop arrival boards.
//!
//! [`get_passages`] joins the two TCL feeds: passages are filtered to the
//! requested stop and grouped per (line, destination), then the stop
//! directory resolves the names of every stop the board mentions.

pub mod delay;
pub mod models;

pub use delay::{DEFAULT_TIMEZONE, Delay, resolve_timezone};
pub use models::{Passage, Passages, Stop};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::fetch::{BasicAuth, Credentials, HttpClient, fetch_json};
use chrono_tz::Tz;
use models::{Table, TclPassage, TclStop};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

pub const PASSAGES_URL: &str =
    "https://download.data.grandlyon.com/ws/rdata/tcl_sytral.tclpassagearret/all.json?maxfeatures=-1";
pub const STOPS_URL: &str =
    "https://download.data.grandlyon.com/ws/rdata/tcl_sytral.tclarret/all.json?maxfeatures=-1";

/// Passage type of real-time estimates; other types are ignored.
const ESTIMATED: &str = "E";

/// Settings of the TCL pipeline.
#[derive(Debug, Clone)]
pub struct TclConfig {
    pub credentials: Credentials,
    /// Zone `heurepassage` timestamps are written in.
    pub timezone: Tz,
}

impl Default for TclConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            timezone: chrono_tz::Europe::Paris,
        }
    }
}

/// Builds the arrival board of `stop_id`.
///
/// # Errors
///
/// [`Error::NoPassageFound`] when no estimated passage serves the stop, and
/// [`Error::Upstream`] when either feed cannot be fetched or decoded.
#[tracing::instrument(skip(client, config, clock))]
pub async fn get_passages<C>(
    client: &C,
    config: &TclConfig,
    clock: &dyn Clock,
    stop_id: i64,
) -> Result<Passages>
where
    C: HttpClient + ?Sized,
{
    let client = BasicAuth::new(client, config.credentials.clone());

    let feed: Table<TclPassage> = fetch_json(&client, PASSAGES_URL)
        .await
        .map_err(|err| Error::upstream("fetching passages", err))?;

    let now = clock.now();
    let mut groups: BTreeMap<(String, i64), Vec<Delay>> = BTreeMap::new();
    let mut wanted: HashSet<i64> = HashSet::from([stop_id]);

    for passage in feed.values {
        if passage.id != stop_id || passage.kind != ESTIMATED {
            continue;
        }
        let delay = Delay::until(&passage.heurepassage, now, config.timezone);
        wanted.insert(passage.idtarretdestination);
        groups
            .entry((commercial_line(&passage.ligne).to_owned(), passage.idtarretdestination))
            .or_default()
            .push(delay);
    }

    if groups.is_empty() {
        return Err(Error::NoPassageFound);
    }
    debug!(groups = groups.len(), "Passages grouped");

    let directory: Table<TclStop> = fetch_json(&client, STOPS_URL)
        .await
        .map_err(|err| Error::upstream("fetching stops", err))?;
    let mut stops = resolve_stops(directory.values, wanted);

    // BTreeMap order: by line label, then by destination id.
    let passages = groups
        .into_iter()
        .map(|((ligne, destination), mut delays)| {
            delays.sort();
            Passage {
                ligne,
                delays: delays.iter().map(Delay::to_string).collect(),
                destination: stops.get(&destination).cloned().unwrap_or_default(),
            }
        })
        .collect();

    Ok(Passages {
        passages,
        stop: stops.remove(&stop_id).unwrap_or_default(),
    })
}

/// Drops the branch letter of a line so that e.g. `49A` and `49B` share the
/// board row of `49`.
pub fn commercial_line(ligne: &str) -> &str {
    ligne
        .strip_suffix(|c: char| c.is_ascii_uppercase())
        .unwrap_or(ligne)
}

/// Looks up every id of `wanted` in the stop directory, stopping as soon as
/// all of them are found. Ids missing from the directory are left out.
fn resolve_stops(directory: Vec<TclStop>, mut wanted: HashSet<i64>) -> HashMap<i64, Stop> {
    let mut stops = HashMap::with_capacity(wanted.len());
    for stop in directory {
        if wanted.is_empty() {
            break;
        }
        if wanted.remove(&stop.id) {
            stops.insert(stop.id, Stop::from(stop));
        }
    }
    stops
}
