//! Per-mode vehicle cost and time model.
//!
//! A [`Vehicle`] is a transient value describing the vehicle used on one
//! traversal of a link. Its cost and time are pure functions of its
//! parameters and the inputs; mode-specific pricing rules are applied by
//! matching on the mode, never by mutating the vehicle.
//!
//! | mode  | speed | capacity | fixed        | per km            | per kg               |
//! |-------|-------|----------|--------------|-------------------|----------------------|
//! | rail  | 100   | 150 000  | 100          | 20 (15 ≥ 200 km)  | 3                    |
//! | road  | 80    | 30 000   | 30           | 5                 | 1 (2 if load > 15 t) |
//! | water | 40    | 100 000  | 500 / 1500   | 15                | 2                    |
//! | air   | 600   | 5 000    | 750          | 40                | 10                   |

use super::{NavClass, TransportMode};

/// Rail distance from which the discounted per-km rate applies.
pub const RAIL_DISCOUNT_DISTANCE: f64 = 200.0;
/// Road load above which the per-kg surcharge applies.
pub const ROAD_SURCHARGE_LOAD: f64 = 15_000.0;
/// Air cruise speed when the weather draw comes out bad.
pub const AIR_BAD_WEATHER_SPEED: f64 = 400.0;

/// Vehicle parameters for a single link traversal.
///
/// # Examples
///
/// ```
/// use u_freight::models::{TransportMode, Vehicle};
///
/// // 100 km by truck carrying 20 t: one load, surcharged per-kg rate.
/// let truck = Vehicle::new(TransportMode::Road);
/// assert_eq!(truck.travel_time(100.0), 1.25);
/// assert_eq!(truck.cost(100.0, 20_000.0), 30.0 + 5.0 * 100.0 + 2.0 * 20_000.0);
///
/// // 300 t by rail needs two vehicle-loads.
/// let train = Vehicle::new(TransportMode::Rail);
/// assert_eq!(train.split(300_000.0).to_vec(), vec![150_000.0, 150_000.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    mode: TransportMode,
    speed: f64,
    capacity: f64,
    fixed_cost: f64,
    cost_per_km: f64,
    cost_per_kg: f64,
}

impl Vehicle {
    /// Creates a vehicle with the nominal parameters of `mode`.
    ///
    /// Water vehicles start on the river tier; see [`Vehicle::with_nav_class`].
    pub fn new(mode: TransportMode) -> Self {
        let (speed, capacity, fixed_cost, cost_per_km, cost_per_kg) = match mode {
            TransportMode::Rail => (100.0, 150_000.0, 100.0, 20.0, 3.0),
            TransportMode::Road => (80.0, 30_000.0, 30.0, 5.0, 1.0),
            TransportMode::Water => (40.0, 100_000.0, 500.0, 15.0, 2.0),
            TransportMode::Air => (600.0, 5_000.0, 750.0, 40.0, 10.0),
        };
        Self {
            mode,
            speed,
            capacity,
            fixed_cost,
            cost_per_km,
            cost_per_kg,
        }
    }

    /// Caps the speed, keeping the lower of the current speed and `cap`.
    pub fn with_speed_cap(mut self, cap: f64) -> Self {
        self.speed = self.speed.min(cap);
        self
    }

    /// Selects the fixed-cost tier of a water vehicle.
    ///
    /// No effect on other modes.
    pub fn with_nav_class(mut self, class: NavClass) -> Self {
        if self.mode == TransportMode::Water {
            self.fixed_cost = match class {
                NavClass::River => 500.0,
                NavClass::Sea => 1500.0,
            };
        }
        self
    }

    /// Transport mode.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Effective speed in km/h.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Maximum load per vehicle in kg.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Fixed cost per vehicle-load.
    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    /// Base per-km rate, before distance discounts.
    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km
    }

    /// Base per-kg rate, before load surcharges.
    pub fn cost_per_kg(&self) -> f64 {
        self.cost_per_kg
    }

    /// Hours needed to cover `distance` km.
    pub fn travel_time(&self, distance: f64) -> f64 {
        distance / self.speed
    }

    /// Per-km rate applied over `distance`.
    pub fn km_rate(&self, distance: f64) -> f64 {
        match self.mode {
            TransportMode::Rail if distance >= RAIL_DISCOUNT_DISTANCE => 15.0,
            _ => self.cost_per_km,
        }
    }

    /// Per-kg rate applied to a single vehicle-load.
    pub fn kg_rate(&self, load: f64) -> f64 {
        match self.mode {
            TransportMode::Road if load > ROAD_SURCHARGE_LOAD => 2.0,
            _ => self.cost_per_kg,
        }
    }

    /// Splits `weight` into vehicle-loads, filling from the front.
    ///
    /// Every load but the last is exactly `capacity`; the last holds the
    /// remainder.
    pub fn split(&self, weight: f64) -> LoadSplit {
        if weight <= 0.0 {
            return LoadSplit::default();
        }
        let full = (weight / self.capacity).floor();
        let remainder = (weight - full * self.capacity).max(0.0);
        LoadSplit {
            full_loads: full as u64,
            capacity: self.capacity,
            remainder,
        }
    }

    /// Cost of one vehicle-load over `distance`.
    pub fn load_cost(&self, distance: f64, load: f64) -> f64 {
        self.fixed_cost + self.km_rate(distance) * distance + self.kg_rate(load) * load
    }

    /// Cost of carrying an already split shipment over `distance`.
    pub fn split_cost(&self, distance: f64, split: &LoadSplit) -> f64 {
        let mut cost = 0.0;
        if split.full_loads > 0 {
            cost += split.full_loads as f64 * self.load_cost(distance, split.capacity);
        }
        if split.remainder > 0.0 {
            cost += self.load_cost(distance, split.remainder);
        }
        cost
    }

    /// Total cost of moving `weight` kg over `distance`, summed over loads.
    pub fn cost(&self, distance: f64, weight: f64) -> f64 {
        self.split_cost(distance, &self.split(weight))
    }
}

/// A shipment split into vehicle-loads: some number of full loads plus at
/// most one partial load.
///
/// Stored by count, so the size does not depend on the shipment weight.
///
/// # Examples
///
/// ```
/// use u_freight::models::{TransportMode, Vehicle};
///
/// let split = Vehicle::new(TransportMode::Air).split(12_500.0);
/// assert_eq!(split.count(), 3);
/// assert_eq!(split.remainder(), 2_500.0);
/// assert_eq!(split.to_vec(), vec![5_000.0, 5_000.0, 2_500.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadSplit {
    full_loads: u64,
    capacity: f64,
    remainder: f64,
}

impl LoadSplit {
    /// Number of loads filled to capacity.
    pub fn full_loads(&self) -> u64 {
        self.full_loads
    }

    /// Weight of each full load in kg.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Weight of the trailing partial load, `0.0` if there is none.
    pub fn remainder(&self) -> f64 {
        self.remainder
    }

    /// Total number of vehicle-loads.
    pub fn count(&self) -> u64 {
        self.full_loads + u64::from(self.remainder > 0.0)
    }

    /// Sum of all loads in kg.
    pub fn total(&self) -> f64 {
        self.full_loads as f64 * self.capacity + self.remainder
    }

    /// Loads in order, full ones first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.full_loads)
            .map(|_| self.capacity)
            .chain((self.remainder > 0.0).then_some(self.remainder))
    }

    /// Loads as a vector. Allocates one entry per load.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
