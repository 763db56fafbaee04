//! Multi-mode planning result.

use std::collections::BTreeMap;

use super::{Itinerary, Objective, TransportMode};

/// The outcome of planning one request under one objective.
///
/// Holds the best itinerary found for every mode that reached the
/// destination, plus which of them is the overall best.
#[derive(Debug, Clone)]
pub struct Plan {
    request_id: String,
    objective: Objective,
    best_mode: TransportMode,
    per_mode: BTreeMap<TransportMode, Itinerary>,
}

impl Plan {
    /// Builds a plan from per-mode itineraries, selecting the one with the
    /// lowest objective value.
    ///
    /// Equal values keep the mode that comes first in [`TransportMode`]
    /// order. Returns `None` when `per_mode` is empty.
    pub fn select(
        request_id: impl Into<String>,
        objective: Objective,
        per_mode: BTreeMap<TransportMode, Itinerary>,
    ) -> Option<Self> {
        let best_mode = per_mode
            .iter()
            .min_by(|(_, a), (_, b)| a.objective_value().total_cmp(&b.objective_value()))
            .map(|(mode, _)| *mode)?;
        Some(Self {
            request_id: request_id.into(),
            objective,
            best_mode,
            per_mode,
        })
    }

    /// Id of the planned request.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Objective used for the comparison.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Mode of the best itinerary.
    pub fn best_mode(&self) -> TransportMode {
        self.best_mode
    }

    /// The overall best itinerary.
    pub fn best(&self) -> &Itinerary {
        // select() only stores a best_mode taken from per_mode
        &self.per_mode[&self.best_mode]
    }

    /// Best itinerary for each mode that found a route.
    pub fn per_mode(&self) -> &BTreeMap<TransportMode, Itinerary> {
        &self.per_mode
    }

    /// Best itinerary for `mode`, if that mode found a route.
    pub fn for_mode(&self, mode: TransportMode) -> Option<&Itinerary> {
        self.per_mode.get(&mode)
    }

    /// Modes that found no route.
    pub fn missing_modes(&self) -> Vec<TransportMode> {
        TransportMode::ALL
            .into_iter()
            .filter(|m| !self.per_mode.contains_key(m))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Leg, LinkId, PointId, Vehicle};

    fn entry(
        mode: TransportMode,
        time: f64,
        cost: f64,
        objective: Objective,
    ) -> (TransportMode, Itinerary) {
        let mut it = Itinerary::new(objective, 100.0);
        it.push_leg(Leg {
            link: LinkId(0),
            origin: PointId(0),
            destination: PointId(1),
            origin_name: "A".into(),
            destination_name: "B".into(),
            distance: 100.0,
            vehicle: Vehicle::new(mode),
            loads: Vehicle::new(mode).split(100.0),
            time,
            cost,
        })
        .unwrap();
        it.aggregate();
        (mode, it)
    }

    #[test]
    fn test_select_by_time() {
        let per_mode = BTreeMap::from([
            entry(TransportMode::Road, 1.25, 630.0, Objective::Time),
            entry(TransportMode::Air, 0.17, 5750.0, Objective::Time),
        ]);
        let plan = Plan::select("R1", Objective::Time, per_mode).unwrap();
        assert_eq!(plan.best_mode(), TransportMode::Air);
        assert_eq!(plan.request_id(), "R1");
        assert_eq!(plan.objective(), Objective::Time);
        assert!((plan.best().total_time() - 0.17).abs() < 1e-10);
        assert_eq!(plan.missing_modes(), vec![TransportMode::Rail, TransportMode::Water]);
    }

    #[test]
    fn test_select_by_cost() {
        let per_mode = BTreeMap::from([
            entry(TransportMode::Road, 1.25, 630.0, Objective::Cost),
            entry(TransportMode::Air, 0.17, 5750.0, Objective::Cost),
        ]);
        let plan = Plan::select("R1", Objective::Cost, per_mode).unwrap();
        assert_eq!(plan.best_mode(), TransportMode::Road);
        assert!(plan.for_mode(TransportMode::Air).is_some());
        assert!(plan.for_mode(TransportMode::Rail).is_none());
    }

    #[test]
    fn test_select_tie_keeps_first_mode() {
        let per_mode = BTreeMap::from([
            entry(TransportMode::Air, 1.0, 10.0, Objective::Cost),
            entry(TransportMode::Rail, 1.0, 10.0, Objective::Cost),
        ]);
        let plan = Plan::select("R1", Objective::Cost, per_mode).unwrap();
        assert_eq!(plan.best_mode(), TransportMode::Rail);
    }

    #[test]
    fn test_select_empty() {
        assert!(Plan::select("R1", Objective::Time, BTreeMap::new()).is_none());
    }
}
