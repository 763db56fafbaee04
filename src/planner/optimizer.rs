//! Multi-mode optimizer.

use std::collections::BTreeMap;

use super::PlannerConfig;
use crate::error::{FreightError, Result};
use crate::evaluation::{LegEvaluator, WeatherSource};
use crate::models::{Itinerary, LinkId, Objective, Plan, PointId, ShipmentRequest, TransportMode};
use crate::network::Network;
use crate::search::{enumerate_paths, shortest_path};

/// Plans shipments over a network, one search per mode.
///
/// # Examples
///
/// ```
/// use u_freight::evaluation::FixedWeather;
/// use u_freight::models::{Objective, Restriction, ShipmentRequest, TransportMode};
/// use u_freight::network::Network;
/// use u_freight::planner::Planner;
///
/// let mut net = Network::new();
/// for p in ["Buenos_Aires", "Rosario"] { net.add_point(p).unwrap(); }
/// net.add_link("Buenos_Aires", "Rosario", TransportMode::Road, 300.0, None).unwrap();
/// net.add_link("Buenos_Aires", "Rosario", TransportMode::Air, 280.0,
///              Some(Restriction::BadWeatherProb(0.1))).unwrap();
///
/// let request = ShipmentRequest::new("CARGA_001", 4_000.0, "Buenos_Aires", "Rosario").unwrap();
/// let planner = Planner::new(&net);
///
/// let fastest = planner.plan(&request, Objective::Time, &mut FixedWeather::Clear).unwrap();
/// assert_eq!(fastest.best_mode(), TransportMode::Air);
///
/// let cheapest = planner.plan(&request, Objective::Cost, &mut FixedWeather::Clear).unwrap();
/// assert_eq!(cheapest.best_mode(), TransportMode::Road);
/// assert_eq!(cheapest.per_mode().len(), 2);
/// ```
pub struct Planner<'a> {
    network: &'a Network,
    config: PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Creates a planner with the default configuration.
    pub fn new(network: &'a Network) -> Self {
        Self {
            network,
            config: PlannerConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    fn endpoints(&self, request: &ShipmentRequest) -> Result<(PointId, PointId)> {
        Ok((
            self.network.resolve(request.origin())?,
            self.network.resolve(request.destination())?,
        ))
    }

    /// Best single-mode itinerary for `request`.
    ///
    /// Returns [`FreightError::Unreachable`] if `mode` has no usable path.
    pub fn plan_mode(
        &self,
        request: &ShipmentRequest,
        objective: Objective,
        mode: TransportMode,
        weather: &mut dyn WeatherSource,
    ) -> Result<Itinerary> {
        let (origin, destination) = self.endpoints(request)?;
        let evaluator = LegEvaluator::new(self.network, request.weight());
        let legs = shortest_path(
            self.network,
            origin,
            destination,
            mode,
            objective,
            &evaluator,
            weather,
        )?;
        evaluator.assemble(objective, legs)
    }

    /// Plans `request` with every configured mode and selects the best.
    ///
    /// Modes without a path are left out of the per-mode map. Fails with
    /// [`FreightError::Unreachable`] (mode `None`) when no mode has one.
    pub fn plan(
        &self,
        request: &ShipmentRequest,
        objective: Objective,
        weather: &mut dyn WeatherSource,
    ) -> Result<Plan> {
        self.config.validate()?;
        self.endpoints(request)?;

        let mut per_mode = BTreeMap::new();
        for &mode in &self.config.modes {
            match self.plan_mode(request, objective, mode, weather) {
                Ok(itinerary) => {
                    per_mode.insert(mode, itinerary);
                }
                Err(FreightError::Unreachable { .. }) => {
                    log::debug!("request {}: no {mode} route", request.id());
                }
                Err(e) => return Err(e),
            }
        }

        let plan = Plan::select(request.id(), objective, per_mode).ok_or_else(|| {
            FreightError::Unreachable {
                origin: request.origin().to_string(),
                destination: request.destination().to_string(),
                mode: None,
            }
        })?;

        log::info!(
            "request {}: best by {objective} is {} ({} of {} modes routed)",
            request.id(),
            plan.best(),
            plan.per_mode().len(),
            self.config.modes.len()
        );
        Ok(plan)
    }

    /// Lists simple `mode` paths for `request`, within the configured limits.
    ///
    /// Diagnostic only; see [`enumerate_paths`].
    pub fn enumerate(
        &self,
        request: &ShipmentRequest,
        mode: TransportMode,
    ) -> Result<Vec<Vec<LinkId>>> {
        let (origin, destination) = self.endpoints(request)?;
        let evaluator = LegEvaluator::new(self.network, request.weight());
        Ok(enumerate_paths(
            self.network,
            origin,
            destination,
            mode,
            &evaluator,
            &self.config.enumeration,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::FixedWeather;
    use crate::models::{NavClass, Restriction};

    fn network() -> Network {
        let mut net = Network::new();
        for p in ["A", "B", "C", "D"] {
            net.add_point(p).unwrap();
        }
        net.add_link("A", "B", TransportMode::Road, 200.0, None).unwrap();
        net.add_link("B", "D", TransportMode::Road, 200.0, None).unwrap();
        net.add_link("A", "C", TransportMode::Rail, 300.0, None).unwrap();
        net.add_link("C", "D", TransportMode::Rail, 300.0, Some(Restriction::MaxSpeed(60.0)))
            .unwrap();
        let river = Some(Restriction::NavClass(NavClass::River));
        net.add_link("A", "D", TransportMode::Water, 450.0, river).unwrap();
        net.add_link("A", "D", TransportMode::Air, 380.0, None).unwrap();
        net
    }

    #[test]
    fn test_plan_all_modes() {
        let net = network();
        let req = ShipmentRequest::new("R1", 4_000.0, "A", "D").unwrap();
        let plan = Planner::new(&net)
            .plan(&req, Objective::Time, &mut FixedWeather::Clear)
            .unwrap();
        assert_eq!(plan.per_mode().len(), 4);
        assert_eq!(plan.best_mode(), TransportMode::Air);
        assert!(plan.missing_modes().is_empty());
        for it in plan.per_mode().values() {
            assert!(plan.best().total_time() <= it.total_time());
            assert_eq!(it.objective(), Objective::Time);
        }
    }

    #[test]
    fn test_plan_cheapest() {
        let net = network();
        let req = ShipmentRequest::new("R1", 4_000.0, "A", "D").unwrap();
        let plan = Planner::new(&net)
            .plan(&req, Objective::Cost, &mut FixedWeather::Clear)
            .unwrap();
        for it in plan.per_mode().values() {
            assert!(plan.best().total_cost() <= it.total_cost());
        }
        // road: 2 x (30 + 1000 + 4000) = 10060 is the cheapest
        assert_eq!(plan.best_mode(), TransportMode::Road);
        assert!((plan.best().total_cost() - 10_060.0).abs() < 1e-9);
    }

    #[test]
    fn test_plan_mode_subset() {
        let net = network();
        let req = ShipmentRequest::new("R1", 4_000.0, "A", "D").unwrap();
        let modes = [TransportMode::Rail, TransportMode::Water];
        let config = PlannerConfig::default().with_modes(modes);
        let planner = Planner::new(&net).with_config(config);
        let plan = planner
            .plan(&req, Objective::Time, &mut FixedWeather::Clear)
            .unwrap();
        assert_eq!(plan.per_mode().len(), 2);
        assert!(plan.for_mode(TransportMode::Air).is_none());
        // rail: 3 h + 5 h capped, water: 11.25 h
        assert_eq!(plan.best_mode(), TransportMode::Rail);
        assert!((plan.best().total_time() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_unreachable_everywhere() {
        let net = network();
        let req = ShipmentRequest::new("R1", 4_000.0, "D", "A").unwrap();
        let err = Planner::new(&net)
            .plan(&req, Objective::Time, &mut FixedWeather::Clear)
            .unwrap_err();
        assert_eq!(
            err,
            FreightError::Unreachable {
                origin: "D".into(),
                destination: "A".into(),
                mode: None
            }
        );
    }

    #[test]
    fn test_unknown_point() {
        let net = network();
        let req = ShipmentRequest::new("R1", 4_000.0, "A", "Z").unwrap();
        let err = Planner::new(&net)
            .plan(&req, Objective::Time, &mut FixedWeather::Clear)
            .unwrap_err();
        assert_eq!(err, FreightError::UnknownPoint("Z".into()));
    }

    #[test]
    fn test_invalid_config() {
        let net = network();
        let req = ShipmentRequest::new("R1", 4_000.0, "A", "D").unwrap();
        let config = PlannerConfig::default().with_modes(Vec::new());
        let planner = Planner::new(&net).with_config(config);
        assert!(planner
            .plan(&req, Objective::Time, &mut FixedWeather::Clear)
            .is_err());
    }

    #[test]
    fn test_enumerate() {
        let net = network();
        let req = ShipmentRequest::new("R1", 4_000.0, "A", "D").unwrap();
        let planner = Planner::new(&net);
        assert_eq!(planner.enumerate(&req, TransportMode::Road).unwrap().len(), 1);
        assert_eq!(planner.enumerate(&req, TransportMode::Rail).unwrap()[0].len(), 2);
    }
}
