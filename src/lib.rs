//! # u-freight
//!
//! Multimodal freight route planning over a network of named points joined
//! by rail, road, water and air links.
//!
//! For each shipment request the planner finds, per transport mode, the
//! itinerary minimizing total time or total cost, splitting the cargo into
//! vehicle-loads and honouring link restrictions, then selects the best mode.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (TransportMode, Restriction, Point, Link, ShipmentRequest, Vehicle, Itinerary, Plan)
//! - [`network`] — Network graph and record ingestion
//! - [`evaluation`] — Restriction gating, weather draws, leg and itinerary evaluation
//! - [`search`] — Per-mode Dijkstra and bounded path enumeration
//! - [`planner`] — Multi-mode planning, configuration and connectivity report
//! - [`error`] — Error type shared by every fallible operation

pub mod error;
pub mod evaluation;
pub mod models;
pub mod network;
pub mod planner;
pub mod search;

pub use error::{FreightError, Result};
