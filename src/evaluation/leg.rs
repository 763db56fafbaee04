//! Leg evaluator: turns links into legs and legs into itineraries.

use super::restriction::{compatible, derive, TravelContext};
use super::weather::WeatherSource;
use crate::error::{FreightError, Result};
use crate::models::{
    Itinerary, Leg, Link, LinkId, Objective, TransportMode, Vehicle, AIR_BAD_WEATHER_SPEED,
};
use crate::network::Network;

/// Evaluates link traversals for a shipment of fixed weight.
///
/// Applies restriction gating, picks the vehicle for each link (speed caps,
/// water tier, air weather draw), and computes time, load split and cost.
///
/// # Examples
///
/// ```
/// use u_freight::evaluation::{FixedWeather, LegEvaluator};
/// use u_freight::models::{Objective, TransportMode};
/// use u_freight::network::Network;
///
/// let mut net = Network::new();
/// for p in ["A", "B", "C"] { net.add_point(p).unwrap(); }
/// let ab = net.add_link("A", "B", TransportMode::Road, 100.0, None).unwrap();
/// let bc = net.add_link("B", "C", TransportMode::Road, 60.0, None).unwrap();
///
/// let evaluator = LegEvaluator::new(&net, 20_000.0);
/// let it = evaluator
///     .build_itinerary(Objective::Time, &[ab, bc], &mut FixedWeather::Clear)
///     .unwrap();
/// assert_eq!(it.len(), 2);
/// assert!((it.total_time() - 2.0).abs() < 1e-10);
/// ```
pub struct LegEvaluator<'a> {
    network: &'a Network,
    weight: f64,
}

impl<'a> LegEvaluator<'a> {
    /// Creates an evaluator for `weight` kg on `network`.
    pub fn new(network: &'a Network, weight: f64) -> Self {
        Self { network, weight }
    }

    /// Restriction check for `link` with this shipment.
    pub fn usable(&self, link: &Link) -> bool {
        compatible(link, &TravelContext::new(self.weight, link.mode()))
    }

    /// Vehicle used on `link`. Air links consume one weather draw.
    pub fn vehicle(&self, link: &Link, weather: &mut dyn WeatherSource) -> Vehicle {
        let param = derive(link);
        let mut vehicle = Vehicle::new(link.mode()).with_nav_class(param.nav_class);
        if let Some(cap) = param.speed_cap {
            vehicle = vehicle.with_speed_cap(cap);
        }
        if link.mode() == TransportMode::Air && weather.is_bad_weather(param.bad_weather_prob) {
            vehicle = vehicle.with_speed_cap(AIR_BAD_WEATHER_SPEED);
        }
        vehicle
    }

    /// Evaluates one traversal of `link`.
    ///
    /// Returns `None` if the link's restriction excludes this shipment.
    pub fn leg(&self, link: &Link, weather: &mut dyn WeatherSource) -> Option<Leg> {
        if !self.usable(link) {
            return None;
        }
        let vehicle = self.vehicle(link, weather);
        let distance = link.distance();
        let loads = vehicle.split(self.weight);
        let cost = vehicle.split_cost(distance, &loads);

        Some(Leg {
            link: link.id(),
            origin: link.origin(),
            destination: link.destination(),
            origin_name: self.network.point(link.origin()).name().to_string(),
            destination_name: self.network.point(link.destination()).name().to_string(),
            distance,
            time: vehicle.travel_time(distance),
            cost,
            loads,
            vehicle,
        })
    }

    /// Evaluates `link` and appends the leg to `itinerary`.
    ///
    /// Fails if the link is restricted for this shipment, or if the leg
    /// breaks continuity or revisits a point.
    pub fn append_leg(
        &self,
        itinerary: &mut Itinerary,
        link: LinkId,
        weather: &mut dyn WeatherSource,
    ) -> Result<()> {
        let link = self.network.link(link);
        let leg = self.leg(link, weather).ok_or_else(|| {
            FreightError::validation(
                "leg",
                format!(
                    "{} -> {} is closed to {} kg ({})",
                    self.network.point(link.origin()).name(),
                    self.network.point(link.destination()).name(),
                    self.weight,
                    link.restriction()
                        .map_or_else(|| "restricted".to_string(), |r| r.to_string())
                ),
            )
        })?;
        itinerary.push_leg(leg)
    }

    /// Builds and aggregates an itinerary from a link sequence.
    pub fn build_itinerary(
        &self,
        objective: Objective,
        links: &[LinkId],
        weather: &mut dyn WeatherSource,
    ) -> Result<Itinerary> {
        let mut itinerary = Itinerary::new(objective, self.weight);
        for &link in links {
            self.append_leg(&mut itinerary, link, weather)?;
        }
        itinerary.aggregate();
        Ok(itinerary)
    }

    /// Builds and aggregates an itinerary from already-evaluated legs.
    pub fn assemble(&self, objective: Objective, legs: Vec<Leg>) -> Result<Itinerary> {
        let mut itinerary = Itinerary::new(objective, self.weight);
        for leg in legs {
            itinerary.push_leg(leg)?;
        }
        itinerary.aggregate();
        Ok(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::FixedWeather;
    use crate::models::{NavClass, Restriction};

    fn setup() -> (Network, Vec<LinkId>) {
        let mut net = Network::new();
        for p in ["A", "B", "C", "D"] {
            net.add_point(p).unwrap();
        }
        let heavy = Some(Restriction::MaxWeight(10_000.0));
        let slow = Some(Restriction::MaxSpeed(50.0));
        let sea = Some(Restriction::NavClass(NavClass::Sea));
        let calm = Some(Restriction::BadWeatherProb(0.0));
        let ids = vec![
            net.add_link("A", "B", TransportMode::Road, 100.0, None).unwrap(),
            net.add_link("B", "C", TransportMode::Road, 50.0, heavy).unwrap(),
            net.add_link("A", "B", TransportMode::Rail, 250.0, slow).unwrap(),
            net.add_link("C", "D", TransportMode::Water, 100.0, sea).unwrap(),
            net.add_link("A", "D", TransportMode::Air, 300.0, calm).unwrap(),
            net.add_link("B", "A", TransportMode::Road, 100.0, None).unwrap(),
        ];
        (net, ids)
    }

    #[test]
    fn test_road_leg() {
        let (net, ids) = setup();
        let eval = LegEvaluator::new(&net, 20_000.0);
        let leg = eval.leg(net.link(ids[0]), &mut FixedWeather::Clear).unwrap();
        assert_eq!(leg.origin_name, "A");
        assert_eq!(leg.destination_name, "B");
        assert_eq!(leg.loads.to_vec(), vec![20_000.0]);
        assert!((leg.time - 1.25).abs() < 1e-10);
        assert!((leg.cost - 40_530.0).abs() < 1e-9);
    }

    #[test]
    fn test_restricted_leg_is_none() {
        let (net, ids) = setup();
        let eval = LegEvaluator::new(&net, 20_000.0);
        assert!(eval.leg(net.link(ids[1]), &mut FixedWeather::Clear).is_none());
        let light = LegEvaluator::new(&net, 5_000.0);
        assert!(light.leg(net.link(ids[1]), &mut FixedWeather::Clear).is_some());
    }

    #[test]
    fn test_rail_speed_cap_applied() {
        let (net, ids) = setup();
        let eval = LegEvaluator::new(&net, 1_000.0);
        let leg = eval.leg(net.link(ids[2]), &mut FixedWeather::Clear).unwrap();
        assert_eq!(leg.vehicle.speed(), 50.0);
        assert!((leg.time - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_sea_tier_applied() {
        let (net, ids) = setup();
        let eval = LegEvaluator::new(&net, 1_000.0);
        let leg = eval.leg(net.link(ids[3]), &mut FixedWeather::Clear).unwrap();
        assert!((leg.cost - (1500.0 + 15.0 * 100.0 + 2.0 * 1_000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_air_weather_draw() {
        let (net, ids) = setup();
        let eval = LegEvaluator::new(&net, 1_000.0);
        let clear = eval.leg(net.link(ids[4]), &mut FixedWeather::Clear).unwrap();
        let stormy = eval.leg(net.link(ids[4]), &mut FixedWeather::Stormy).unwrap();
        assert!((clear.time - 0.5).abs() < 1e-10);
        assert!((stormy.time - 0.75).abs() < 1e-10);
        assert_eq!(clear.cost, stormy.cost);
    }

    #[test]
    fn test_weather_ignored_off_air() {
        let (net, ids) = setup();
        let eval = LegEvaluator::new(&net, 1_000.0);
        let leg = eval.leg(net.link(ids[0]), &mut FixedWeather::Stormy).unwrap();
        assert_eq!(leg.vehicle.speed(), 80.0);
    }

    #[test]
    fn test_append_leg_restricted() {
        let (net, ids) = setup();
        let eval = LegEvaluator::new(&net, 20_000.0);
        let mut it = Itinerary::new(Objective::Cost, 20_000.0);
        eval.append_leg(&mut it, ids[0], &mut FixedWeather::Clear).unwrap();
        let err = eval
            .append_leg(&mut it, ids[1], &mut FixedWeather::Clear)
            .unwrap_err();
        assert!(matches!(err, FreightError::Validation { entity: "leg", .. }));
    }

    #[test]
    fn test_build_itinerary_cycle() {
        let (net, ids) = setup();
        let eval = LegEvaluator::new(&net, 1_000.0);
        let err = eval
            .build_itinerary(Objective::Time, &[ids[0], ids[5]], &mut FixedWeather::Clear)
            .unwrap_err();
        assert_eq!(err, FreightError::Cycle("A".into()));
    }

    #[test]
    fn test_build_itinerary_discontinuous() {
        let (net, ids) = setup();
        let eval = LegEvaluator::new(&net, 1_000.0);
        let err = eval
            .build_itinerary(Objective::Time, &[ids[0], ids[3]], &mut FixedWeather::Clear)
            .unwrap_err();
        assert!(matches!(err, FreightError::Continuity { .. }));
    }

    #[test]
    fn test_build_itinerary_totals() {
        let (net, ids) = setup();
        let eval = LegEvaluator::new(&net, 1_000.0);
        let it = eval
            .build_itinerary(Objective::Cost, &[ids[0], ids[1], ids[3]], &mut FixedWeather::Clear)
            .unwrap();
        let expected: f64 = it.legs().iter().map(|l| l.cost).sum();
        assert!((it.total_cost() - expected).abs() < 1e-9);
        assert!((it.total_distance() - 250.0).abs() < 1e-10);
        assert_eq!(it.route_points(), vec!["A", "B", "C", "D"]);
        assert_eq!(it.modes(), vec![TransportMode::Road, TransportMode::Water]);
    }
}
