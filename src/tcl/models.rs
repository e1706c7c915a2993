//! Wire formats: what the TCL feeds send and what the board returns.

use crate::fetch::null_as_default;
use serde::{Deserialize, Serialize};

/// Envelope shared by every Grand Lyon `rdata` table.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Table<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub values: Vec<T>,
}

/// One row of `tcl_sytral.tclpassagearret`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TclPassage {
    /// Stop the vehicle passes at.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ligne: String,
    /// `"E"` for estimated passages, `"T"` for theoretical ones.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub heurepassage: String,
    #[serde(deserialize_with = "null_as_default")]
    pub idtarretdestination: i64,
}

/// One row of `tcl_sytral.tclarret`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TclStop {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nom: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub id: i64,
    pub name: String,
}

impl From<TclStop> for Stop {
    fn from(stop: TclStop) -> Self {
        Self {
            id: stop.id,
            name: stop.nom,
        }
    }
}

/// All upcoming passages of one line towards one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub ligne: String,
    #[serde(rename = "delais")]
    pub delays: Vec<String>,
    pub destination: Stop,
}

/// The arrival board of a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passages {
    pub passages: Vec<Passage>,
    pub stop: Stop,
}
