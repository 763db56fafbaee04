//! Domain model types for multimodal freight planning.
//!
//! Provides the core abstractions: transport modes and link restrictions,
//! points and directed links, shipment requests, the per-mode vehicle
//! cost/time model, legs and itineraries, and the multi-mode plan.

mod itinerary;
mod mode;
mod plan;
mod point;
mod request;
mod restriction;
mod vehicle;

pub use itinerary::{hours_minutes, Itinerary, Leg};
pub use mode::{Objective, TransportMode};
pub use plan::Plan;
pub use point::{Link, LinkId, Point, PointId};
pub use request::{RequestRecord, ShipmentRequest, WeightClass, MAX_SHIPMENT_WEIGHT};
pub use restriction::{NavClass, Restriction};
pub use vehicle::{
    LoadSplit, Vehicle, AIR_BAD_WEATHER_SPEED, RAIL_DISCOUNT_DISTANCE, ROAD_SURCHARGE_LOAD,
};
