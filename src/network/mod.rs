//! Transport network graph.
//!
//! A directed multigraph of named points joined by mode-tagged links, plus
//! the record types used to load it.

mod graph;
mod records;

pub use graph::{Network, NetworkStats};
pub use records::LinkRecord;
