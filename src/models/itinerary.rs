//! Legs and itineraries.

use std::collections::HashSet;
use std::fmt;

use super::{LinkId, LoadSplit, Objective, PointId, TransportMode, Vehicle};
use crate::error::{FreightError, Result};

/// Splits decimal hours into whole hours and truncated minutes.
///
/// # Examples
///
/// ```
/// use u_freight::models::hours_minutes;
///
/// assert_eq!(hours_minutes(2.75), (2, 45));
/// assert_eq!(hours_minutes(1.25), (1, 15));
/// ```
pub fn hours_minutes(hours: f64) -> (u64, u64) {
    // nudge so 1.25 h does not land on 74.999.. minutes
    let minutes = (hours.max(0.0) * 60.0 + 1e-9).floor() as u64;
    (minutes / 60, minutes % 60)
}

/// One traversed link with the vehicle used and its derived time and cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// Link traversed.
    pub link: LinkId,
    /// Origin point.
    pub origin: PointId,
    /// Destination point.
    pub destination: PointId,
    /// Origin point name.
    pub origin_name: String,
    /// Destination point name.
    pub destination_name: String,
    /// Link length in km.
    pub distance: f64,
    /// Vehicle used, with its effective speed for this traversal.
    pub vehicle: Vehicle,
    /// Vehicle-loads the shipment was split into.
    pub loads: LoadSplit,
    /// Travel time in hours.
    pub time: f64,
    /// Total cost over all loads.
    pub cost: f64,
}

impl Leg {
    /// Mode of the traversed link.
    pub fn mode(&self) -> TransportMode {
        self.vehicle.mode()
    }

    /// Time or cost, depending on `objective`.
    pub fn value(&self, objective: Objective) -> f64 {
        match objective {
            Objective::Time => self.time,
            Objective::Cost => self.cost,
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = hours_minutes(self.time);
        write!(
            f,
            "{} -> {} ({}): {}km, {}h {}min, ${:.2}",
            self.origin_name,
            self.destination_name,
            self.mode(),
            self.distance,
            h,
            m,
            self.cost
        )
    }
}

/// An ordered, contiguous and acyclic sequence of legs for one shipment.
///
/// Legs are appended with [`Itinerary::push_leg`], which rejects breaks in
/// continuity and revisits. Totals are refreshed by [`Itinerary::aggregate`].
/// Per-kg cargo cost is part of each leg's cost and is not charged again at
/// the itinerary level.
///
/// # Examples
///
/// ```
/// use u_freight::models::{Itinerary, Objective};
///
/// let it = Itinerary::new(Objective::Cost, 1_000.0);
/// assert!(it.is_empty());
/// assert_eq!(it.total_cost(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Itinerary {
    objective: Objective,
    weight: f64,
    legs: Vec<Leg>,
    total_distance: f64,
    total_time: f64,
    total_cost: f64,
}

impl Itinerary {
    /// Creates an empty itinerary for a shipment of `weight` kg.
    pub fn new(objective: Objective, weight: f64) -> Self {
        Self {
            objective,
            weight,
            legs: Vec::new(),
            total_distance: 0.0,
            total_time: 0.0,
            total_cost: 0.0,
        }
    }

    /// Appends a leg after checking continuity and acyclicity.
    ///
    /// Totals are not updated; call [`aggregate`](Self::aggregate) once all
    /// legs are in.
    pub fn push_leg(&mut self, leg: Leg) -> Result<()> {
        if let Some(last) = self.legs.last() {
            if last.destination != leg.origin {
                return Err(FreightError::Continuity {
                    expected: last.destination_name.clone(),
                    found: leg.origin_name.clone(),
                });
            }
        }

        let mut visited: HashSet<PointId> = self.legs.iter().map(|l| l.origin).collect();
        visited.insert(leg.origin);
        if visited.contains(&leg.destination) {
            return Err(FreightError::Cycle(leg.destination_name.clone()));
        }

        self.legs.push(leg);
        Ok(())
    }

    /// Recomputes total distance, time and cost as sums over legs.
    pub fn aggregate(&mut self) {
        self.total_distance = self.legs.iter().map(|l| l.distance).sum();
        self.total_time = self.legs.iter().map(|l| l.time).sum();
        self.total_cost = self.legs.iter().map(|l| l.cost).sum();
    }

    /// Objective this itinerary was optimized for.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Shipment weight in kg.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns `true` if no leg has been appended.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Total distance in km (set by [`aggregate`](Self::aggregate)).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total time in hours (set by [`aggregate`](Self::aggregate)).
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Total cost (set by [`aggregate`](Self::aggregate)).
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Total time or cost, depending on the itinerary's objective.
    pub fn objective_value(&self) -> f64 {
        match self.objective {
            Objective::Time => self.total_time,
            Objective::Cost => self.total_cost,
        }
    }

    /// Point names visited, origin first.
    pub fn route_points(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.legs.len() + 1);
        if let Some(first) = self.legs.first() {
            names.push(first.origin_name.as_str());
        }
        names.extend(self.legs.iter().map(|l| l.destination_name.as_str()));
        names
    }

    /// Distinct modes used, in order of first use.
    pub fn modes(&self) -> Vec<TransportMode> {
        let mut modes = Vec::new();
        for leg in &self.legs {
            if !modes.contains(&leg.mode()) {
                modes.push(leg.mode());
            }
        }
        modes
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.legs.is_empty() {
            return f.write_str("empty itinerary");
        }
        let (h, m) = hours_minutes(self.total_time);
        let modes: Vec<&str> = self.modes().iter().map(|m| m.as_str()).collect();
        write!(
            f,
            "{} [{}]: {:.1} km, {}h {}min, ${:.2} (by {})",
            self.route_points().join(" -> "),
            modes.join(", "),
            self.total_distance,
            h,
            m,
            self.total_cost,
            self.objective
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(from: usize, to: usize, distance: f64, time: f64, cost: f64) -> Leg {
        Leg {
            link: LinkId(from * 10 + to),
            origin: PointId(from),
            destination: PointId(to),
            origin_name: format!("P{from}"),
            destination_name: format!("P{to}"),
            distance,
            vehicle: Vehicle::new(TransportMode::Road),
            loads: Vehicle::new(TransportMode::Road).split(1_000.0),
            time,
            cost,
        }
    }

    #[test]
    fn test_hours_minutes() {
        assert_eq!(hours_minutes(0.0), (0, 0));
        assert_eq!(hours_minutes(0.5), (0, 30));
        assert_eq!(hours_minutes(2.5), (2, 30));
        assert_eq!(hours_minutes(1.999), (1, 59));
    }

    #[test]
    fn test_push_and_aggregate() {
        let mut it = Itinerary::new(Objective::Time, 1_000.0);
        it.push_leg(leg(0, 1, 100.0, 1.25, 1_530.0)).unwrap();
        it.push_leg(leg(1, 2, 40.0, 0.5, 1_230.0)).unwrap();
        assert_eq!(it.total_time(), 0.0);

        it.aggregate();
        assert_eq!(it.len(), 2);
        assert!((it.total_distance() - 140.0).abs() < 1e-10);
        assert!((it.total_time() - 1.75).abs() < 1e-10);
        assert!((it.total_cost() - 2_760.0).abs() < 1e-10);
        assert!((it.objective_value() - 1.75).abs() < 1e-10);
        assert_eq!(it.route_points(), vec!["P0", "P1", "P2"]);
        assert_eq!(it.modes(), vec![TransportMode::Road]);
    }

    #[test]
    fn test_continuity_error() {
        let mut it = Itinerary::new(Objective::Cost, 1_000.0);
        it.push_leg(leg(0, 1, 10.0, 1.0, 1.0)).unwrap();
        let err = it.push_leg(leg(2, 3, 10.0, 1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            FreightError::Continuity {
                expected: "P1".into(),
                found: "P2".into()
            }
        );
        assert_eq!(it.len(), 1);
    }

    #[test]
    fn test_cycle_error() {
        let mut it = Itinerary::new(Objective::Cost, 1_000.0);
        it.push_leg(leg(0, 1, 10.0, 1.0, 1.0)).unwrap();
        it.push_leg(leg(1, 2, 10.0, 1.0, 1.0)).unwrap();
        let err = it.push_leg(leg(2, 0, 10.0, 1.0, 1.0)).unwrap_err();
        assert_eq!(err, FreightError::Cycle("P0".into()));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let mut it = Itinerary::new(Objective::Cost, 1_000.0);
        let err = it.push_leg(leg(4, 4, 10.0, 1.0, 1.0)).unwrap_err();
        assert_eq!(err, FreightError::Cycle("P4".into()));
    }

    #[test]
    fn test_display() {
        let mut it = Itinerary::new(Objective::Time, 20_000.0);
        it.push_leg(leg(0, 1, 100.0, 1.25, 40_530.0)).unwrap();
        it.aggregate();
        assert_eq!(
            it.legs()[0].to_string(),
            "P0 -> P1 (road): 100km, 1h 15min, $40530.00"
        );
        assert_eq!(
            it.to_string(),
            "P0 -> P1 [road]: 100.0 km, 1h 15min, $40530.00 (by time)"
        );
        assert_eq!(Itinerary::new(Objective::Time, 1.0).to_string(), "empty itinerary");
    }
}
