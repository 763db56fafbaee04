//! Operating restrictions attached to links.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FreightError, Result};

/// Navigation class of a water link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavClass {
    /// Inland waterway.
    #[default]
    River,
    /// Open sea.
    Sea,
}

impl FromStr for NavClass {
    type Err = FreightError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "river" | "fluvial" => Ok(Self::River),
            "sea" | "maritime" | "maritima" | "marítima" => Ok(Self::Sea),
            other => Err(FreightError::validation(
                "restriction",
                format!("unknown navigation class '{other}'"),
            )),
        }
    }
}

impl fmt::Display for NavClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::River => f.write_str("river"),
            Self::Sea => f.write_str("sea"),
        }
    }
}

/// A typed restriction on traversing a link.
///
/// Parsed once at ingestion with [`Restriction::parse`]; planning never looks
/// at the raw strings again.
///
/// # Examples
///
/// ```
/// use u_freight::models::{NavClass, Restriction};
///
/// let r = Restriction::parse("peso_max", "25000").unwrap();
/// assert_eq!(r, Restriction::MaxWeight(25_000.0));
///
/// let r = Restriction::parse("nav_class", "sea").unwrap();
/// assert_eq!(r, Restriction::NavClass(NavClass::Sea));
///
/// // Unknown kinds are kept, not rejected.
/// let r = Restriction::parse("max_height", "4.2").unwrap();
/// assert!(matches!(r, Restriction::Other { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[serde(try_from = "RestrictionRepr")]
pub enum Restriction {
    /// Speed cap in km/h.
    MaxSpeed(f64),
    /// Maximum shipment weight in kg.
    MaxWeight(f64),
    /// River or sea navigation.
    NavClass(NavClass),
    /// Probability in `[0, 1]` that an air leg flies in bad weather.
    BadWeatherProb(f64),
    /// A restriction kind this version does not interpret.
    Other {
        /// Raw kind label.
        kind: String,
        /// Raw value.
        value: String,
    },
}

impl Restriction {
    /// Parses a `(kind, value)` pair as found in link records.
    ///
    /// The result is checked with [`Restriction::validate`].
    pub fn parse(kind: &str, value: &str) -> Result<Self> {
        let normalized = kind.trim().to_lowercase();
        let restriction = match normalized.as_str() {
            "max_speed" | "velocidad_max" => Self::MaxSpeed(number(value, "max_speed")?),
            "max_weight" | "peso_max" => Self::MaxWeight(number(value, "max_weight")?),
            "nav_class" | "tipo" => Self::NavClass(value.parse()?),
            "bad_weather_prob" | "prob_mal_tiempo" => {
                Self::BadWeatherProb(number(value, "bad_weather_prob")?)
            }
            _ => {
                return Ok(Self::Other {
                    kind: kind.trim().to_string(),
                    value: value.trim().to_string(),
                });
            }
        };
        restriction.validate()?;
        Ok(restriction)
    }

    /// Checks the payload: speeds and weights must be positive and finite,
    /// probabilities must lie in `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_freight::models::Restriction;
    ///
    /// assert!(Restriction::MaxSpeed(80.0).validate().is_ok());
    /// assert!(Restriction::MaxSpeed(-50.0).validate().is_err());
    /// assert!(Restriction::BadWeatherProb(1.5).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::MaxSpeed(v) | Self::MaxWeight(v) => {
                if !v.is_finite() || *v <= 0.0 {
                    return Err(FreightError::validation(
                        "restriction",
                        format!("{} must be positive and finite, got {v}", self.kind()),
                    ));
                }
            }
            Self::BadWeatherProb(p) => {
                if !(0.0..=1.0).contains(p) {
                    return Err(FreightError::validation(
                        "restriction",
                        format!("bad_weather_prob must be within [0, 1], got {p}"),
                    ));
                }
            }
            Self::NavClass(_) | Self::Other { .. } => {}
        }
        Ok(())
    }

    /// Canonical kind label.
    pub fn kind(&self) -> &str {
        match self {
            Self::MaxSpeed(_) => "max_speed",
            Self::MaxWeight(_) => "max_weight",
            Self::NavClass(_) => "nav_class",
            Self::BadWeatherProb(_) => "bad_weather_prob",
            Self::Other { kind, .. } => kind,
        }
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxSpeed(v) => write!(f, "max speed {v} km/h"),
            Self::MaxWeight(v) => write!(f, "max weight {v} kg"),
            Self::NavClass(c) => write!(f, "{c} navigation"),
            Self::BadWeatherProb(p) => write!(f, "bad weather probability {p}"),
            Self::Other { kind, value } => write!(f, "{kind}={value}"),
        }
    }
}

fn number(value: &str, kind: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| {
        FreightError::validation("restriction", format!("{kind} expects a number, got '{value}'"))
    })
}

// Wire shape of `Restriction`, converted through `validate`.
#[derive(Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
enum RestrictionRepr {
    MaxSpeed(f64),
    MaxWeight(f64),
    NavClass(NavClass),
    BadWeatherProb(f64),
    Other { kind: String, value: String },
}

impl TryFrom<RestrictionRepr> for Restriction {
    type Error = FreightError;

    fn try_from(repr: RestrictionRepr) -> Result<Self> {
        let restriction = match repr {
            RestrictionRepr::MaxSpeed(v) => Self::MaxSpeed(v),
            RestrictionRepr::MaxWeight(v) => Self::MaxWeight(v),
            RestrictionRepr::NavClass(c) => Self::NavClass(c),
            RestrictionRepr::BadWeatherProb(p) => Self::BadWeatherProb(p),
            RestrictionRepr::Other { kind, value } => Self::Other { kind, value },
        };
        restriction.validate()?;
        Ok(restriction)
    }
}
