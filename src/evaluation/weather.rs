//! Weather draws for air legs.

use rand::Rng;

/// Source of the bad-weather draw made for each air leg.
///
/// Passed explicitly into planning so runs are reproducible: use
/// [`FixedWeather`] in tests and [`RandomWeather`] over a seeded generator
/// in production.
pub trait WeatherSource {
    /// Returns `true` if the leg flies in bad weather, given the link's
    /// bad-weather probability in `[0, 1]`.
    fn is_bad_weather(&mut self, probability: f64) -> bool;
}

/// A weather source with a fixed outcome, ignoring the probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixedWeather {
    /// Never bad weather.
    #[default]
    Clear,
    /// Always bad weather.
    Stormy,
}

impl WeatherSource for FixedWeather {
    fn is_bad_weather(&mut self, _probability: f64) -> bool {
        matches!(self, Self::Stormy)
    }
}

/// A weather source drawing from a random generator.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_freight::evaluation::{RandomWeather, WeatherSource};
///
/// let mut weather = RandomWeather::new(StdRng::seed_from_u64(42));
/// assert!(!weather.is_bad_weather(0.0));
/// assert!(weather.is_bad_weather(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct RandomWeather<R> {
    rng: R,
}

impl<R: Rng> RandomWeather<R> {
    /// Wraps a random generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> WeatherSource for RandomWeather<R> {
    fn is_bad_weather(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        self.rng.random_bool(probability.min(1.0))
    }
}
