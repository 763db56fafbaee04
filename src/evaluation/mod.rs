//! Restriction gating, weather draws, and leg/itinerary evaluation.

mod leg;
mod restriction;
mod weather;

pub use leg::LegEvaluator;
pub use restriction::{compatible, derive, DerivedParam, TravelContext};
pub use weather::{FixedWeather, RandomWeather, WeatherSource};
