//! Origin connectivity report.

use crate::error::Result;
use crate::evaluation::{compatible, TravelContext};
use crate::models::{Restriction, ShipmentRequest, TransportMode};
use crate::network::Network;

/// Links of one mode leaving the request origin, split by usability.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeConnectivity {
    /// Transport mode.
    pub mode: TransportMode,
    /// Destinations reachable over an open link.
    pub open: Vec<String>,
    /// Destinations whose link is closed to the shipment, with the cause.
    pub blocked: Vec<(String, Restriction)>,
}

impl ModeConnectivity {
    /// `true` if the origin has no link at all in this mode.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.blocked.is_empty()
    }
}

/// Reports, for every mode, which links out of the request origin the
/// shipment may take and which its weight rules out.
///
/// Modes are listed in [`TransportMode::ALL`] order, including modes with no
/// link at the origin.
///
/// # Examples
///
/// ```
/// use u_freight::models::{Restriction, ShipmentRequest, TransportMode};
/// use u_freight::network::Network;
/// use u_freight::planner::connectivity;
///
/// let mut net = Network::new();
/// for p in ["A", "B", "C"] { net.add_point(p).unwrap(); }
/// net.add_link("A", "B", TransportMode::Road, 50.0, Some(Restriction::MaxWeight(10_000.0))).unwrap();
/// net.add_link("A", "C", TransportMode::Road, 70.0, None).unwrap();
///
/// let request = ShipmentRequest::new("R1", 20_000.0, "A", "C").unwrap();
/// let report = connectivity(&net, &request).unwrap();
/// let road = &report[1];
/// assert_eq!(road.mode, TransportMode::Road);
/// assert_eq!(road.open, vec!["C".to_string()]);
/// assert_eq!(road.blocked[0].0, "B");
/// ```
pub fn connectivity(network: &Network, request: &ShipmentRequest) -> Result<Vec<ModeConnectivity>> {
    let origin = network.resolve(request.origin())?;
    network.resolve(request.destination())?;

    let report = TransportMode::ALL
        .iter()
        .map(|&mode| {
            let context = TravelContext::new(request.weight(), mode);
            let mut entry = ModeConnectivity {
                mode,
                open: Vec::new(),
                blocked: Vec::new(),
            };
            for link in network.links_from(origin, mode) {
                let name = network.point(link.destination()).name().to_string();
                match link.restriction() {
                    Some(restriction) if !compatible(link, &context) => {
                        log::debug!(
                            "request {}: {mode} link {} -> {name} blocked by {restriction}",
                            request.id(),
                            request.origin()
                        );
                        entry.blocked.push((name, restriction.clone()));
                    }
                    _ => entry.open.push(name),
                }
            }
            entry
        })
        .collect();
    Ok(report)
}
