//! Single-mode shortest path search.
//!
//! # Algorithm
//!
//! Dijkstra over the links of one mode that the shipment may use. The edge
//! weight of a link is the time or cost of the leg it produces for the
//! shipment weight, so load splitting and surcharges are part of the search.
//!
//! Each point is settled once. Equal accumulated weights are popped in point
//! name order, which makes results reproducible across runs.
//!
//! # Complexity
//!
//! O((V + E) log V) heap operations over the points and links of the mode.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{FreightError, Result};
use crate::evaluation::{LegEvaluator, WeatherSource};
use crate::models::{Leg, Objective, PointId, TransportMode};
use crate::network::Network;

#[derive(Debug)]
struct State<'n> {
    weight: f64,
    name: &'n str,
    point: PointId,
}

// Reversed so the max-heap pops the lowest weight, then the lowest name.
impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.name.cmp(self.name))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State<'_> {}

/// Finds the legs of the best `mode` path from `origin` to `destination`.
///
/// Links whose restriction excludes the shipment are skipped. Air links draw
/// their weather once per relaxation, and the returned legs carry the draw
/// the search used, so the itinerary matches the searched weights.
///
/// Returns [`FreightError::Unreachable`] if no path exists.
///
/// # Examples
///
/// ```
/// use u_freight::evaluation::{FixedWeather, LegEvaluator};
/// use u_freight::models::{Objective, TransportMode};
/// use u_freight::network::Network;
/// use u_freight::search::shortest_path;
///
/// let mut net = Network::new();
/// for p in ["A", "B", "C"] { net.add_point(p).unwrap(); }
/// net.add_link("A", "C", TransportMode::Road, 400.0, None).unwrap();
/// net.add_link("A", "B", TransportMode::Road, 100.0, None).unwrap();
/// net.add_link("B", "C", TransportMode::Road, 100.0, None).unwrap();
///
/// let a = net.point_id("A").unwrap();
/// let c = net.point_id("C").unwrap();
/// let eval = LegEvaluator::new(&net, 1_000.0);
/// let legs = shortest_path(&net, a, c, TransportMode::Road, Objective::Time,
///                          &eval, &mut FixedWeather::Clear).unwrap();
/// assert_eq!(legs.len(), 2);
/// ```
pub fn shortest_path(
    network: &Network,
    origin: PointId,
    destination: PointId,
    mode: TransportMode,
    objective: Objective,
    evaluator: &LegEvaluator<'_>,
    weather: &mut dyn WeatherSource,
) -> Result<Vec<Leg>> {
    let n = network.num_points();
    let mut best = vec![f64::INFINITY; n];
    let mut settled = vec![false; n];
    let mut via: Vec<Option<Leg>> = vec![None; n];

    best[origin.index()] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(State {
        weight: 0.0,
        name: network.point(origin).name(),
        point: origin,
    });

    while let Some(State { weight, point, .. }) = heap.pop() {
        if settled[point.index()] {
            continue;
        }
        settled[point.index()] = true;
        if point == destination {
            break;
        }

        for link in network.links_from(point, mode) {
            let next = link.destination();
            if settled[next.index()] {
                continue;
            }
            let Some(leg) = evaluator.leg(link, weather) else {
                continue;
            };
            let candidate = weight + leg.value(objective);
            if candidate < best[next.index()] {
                best[next.index()] = candidate;
                via[next.index()] = Some(leg);
                heap.push(State {
                    weight: candidate,
                    name: network.point(next).name(),
                    point: next,
                });
            }
        }
    }

    if !settled[destination.index()] {
        log::debug!(
            "no {mode} path from {} to {}",
            network.point(origin).name(),
            network.point(destination).name()
        );
        return Err(FreightError::Unreachable {
            origin: network.point(origin).name().to_string(),
            destination: network.point(destination).name().to_string(),
            mode: Some(mode),
        });
    }

    let mut legs = Vec::new();
    let mut current = destination;
    while current != origin {
        // every settled point but the origin was reached through a leg
        let Some(leg) = via[current.index()].take() else {
            break;
        };
        current = leg.origin;
        legs.push(leg);
    }
    legs.reverse();

    log::debug!(
        "{mode} path {} -> {}: {} legs, {objective} {:.3}",
        network.point(origin).name(),
        network.point(destination).name(),
        legs.len(),
        best[destination.index()]
    );
    Ok(legs)
}
