//! Transport modes and planning objectives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FreightError;

/// A transport mode. Every link carries exactly one.
///
/// River and sea links share the [`Water`](TransportMode::Water) mode; the
/// navigation class restriction selects the cost tier.
///
/// # Examples
///
/// ```
/// use u_freight::models::TransportMode;
///
/// let mode: TransportMode = "Ferroviaria".parse().unwrap();
/// assert_eq!(mode, TransportMode::Rail);
/// assert_eq!(mode.to_string(), "rail");
/// assert!("hovercraft".parse::<TransportMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Freight rail.
    Rail,
    /// Trucks on roads.
    Road,
    /// River barges and sea vessels.
    Water,
    /// Air cargo.
    Air,
}

impl TransportMode {
    /// All modes, in the order the planner tries them.
    pub const ALL: [TransportMode; 4] = [Self::Rail, Self::Road, Self::Water, Self::Air];

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rail => "rail",
            Self::Road => "road",
            Self::Water => "water",
            Self::Air => "air",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = FreightError;

    /// Case-insensitive. Accepts English names and the labels found in the
    /// legacy network files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rail" | "railway" | "train" | "ferroviaria" | "ferroviario" => Ok(Self::Rail),
            "road" | "truck" | "automotor" => Ok(Self::Road),
            "water" | "river" | "sea" | "fluvial" | "maritima" | "marítima" => Ok(Self::Water),
            "air" | "aerea" | "aérea" => Ok(Self::Air),
            other => Err(FreightError::validation(
                "mode",
                format!("unknown transport mode '{other}'"),
            )),
        }
    }
}

/// The scalar an itinerary is optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Minimize total travel time (hours).
    Time,
    /// Minimize total cost.
    Cost,
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => f.write_str("time"),
            Self::Cost => f.write_str("cost"),
        }
    }
}

impl FromStr for Objective {
    type Err = FreightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "time" | "tiempo" => Ok(Self::Time),
            "cost" | "costo" => Ok(Self::Cost),
            other => Err(FreightError::validation(
                "objective",
                format!("expected 'time' or 'cost', got '{other}'"),
            )),
        }
    }
}
