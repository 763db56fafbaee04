//! Per-mode route search.
//!
//! - [`shortest_path`] — Dijkstra over restriction-gated links, O((V + E) log V)
//! - [`enumerate_paths`] — bounded DFS over all simple paths, exponential; diagnostic only

mod dijkstra;
mod enumerate;

pub use dijkstra::shortest_path;
pub use enumerate::{enumerate_paths, EnumerationLimits};
