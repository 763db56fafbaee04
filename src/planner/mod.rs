//! Multi-mode shipment planning.
//!
//! - [`Planner`] — runs one search per configured mode and picks the best
//! - [`PlannerConfig`] — modes to search and enumeration limits
//! - [`connectivity`] — which links out of the origin a shipment may use

mod config;
mod connectivity;
mod optimizer;

pub use config::PlannerConfig;
pub use connectivity::{connectivity, ModeConnectivity};
pub use optimizer::Planner;
