//! Restriction gating and derived traversal parameters.
//!
//! | kind               | effect                                          |
//! |--------------------|-------------------------------------------------|
//! | `max_speed`        | caps the vehicle speed on that link             |
//! | `max_weight`       | link unusable if the shipment is heavier        |
//! | `nav_class`        | picks the river or sea fixed-cost tier          |
//! | `bad_weather_prob` | probability of the air weather draw             |
//! | other / none       | always usable, no effect                        |

use crate::models::{Link, NavClass, Restriction, TransportMode};

/// What the restriction check is made against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelContext {
    /// Shipment weight in kg.
    pub weight: f64,
    /// Mode of the candidate vehicle.
    pub mode: TransportMode,
}

impl TravelContext {
    /// Creates a context.
    pub fn new(weight: f64, mode: TransportMode) -> Self {
        Self { weight, mode }
    }
}

/// Parameters a link's restriction contributes to the vehicle model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedParam {
    /// Speed cap in km/h.
    pub speed_cap: Option<f64>,
    /// Water cost tier.
    pub nav_class: NavClass,
    /// Probability of bad weather on an air leg.
    pub bad_weather_prob: f64,
}

/// Returns `true` if `link` may be used for a shipment in `context`.
///
/// Only `max_weight` ever excludes a link; unknown kinds never do.
///
/// # Examples
///
/// ```
/// use u_freight::evaluation::{compatible, TravelContext};
/// use u_freight::models::{Restriction, TransportMode};
/// use u_freight::network::Network;
///
/// let mut net = Network::new();
/// net.add_point("A").unwrap();
/// net.add_point("B").unwrap();
/// let id = net.add_link("A", "B", TransportMode::Road, 50.0,
///                       Some(Restriction::MaxWeight(25_000.0))).unwrap();
///
/// let link = net.link(id);
/// assert!(compatible(link, &TravelContext::new(25_000.0, TransportMode::Road)));
/// assert!(!compatible(link, &TravelContext::new(30_000.0, TransportMode::Road)));
/// ```
pub fn compatible(link: &Link, context: &TravelContext) -> bool {
    match link.restriction() {
        Some(Restriction::MaxWeight(max)) => context.weight <= *max,
        _ => true,
    }
}

/// Extracts the vehicle-model parameters carried by `link`'s restriction.
pub fn derive(link: &Link) -> DerivedParam {
    let mut param = DerivedParam::default();
    match link.restriction() {
        Some(Restriction::MaxSpeed(cap)) => param.speed_cap = Some(*cap),
        Some(Restriction::NavClass(class)) => param.nav_class = *class,
        Some(Restriction::BadWeatherProb(p)) => param.bad_weather_prob = *p,
        Some(Restriction::MaxWeight(_)) | Some(Restriction::Other { .. }) | None => {}
    }
    param
}
