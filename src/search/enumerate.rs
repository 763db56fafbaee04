//! Bounded enumeration of every simple path (diagnostic).
//!
//! Depth-first search over the links of one mode that the shipment may use,
//! never revisiting a point. The number of simple paths grows exponentially
//! with the number of alternative links, so the search is capped by path
//! length and result count. Use [`shortest_path`](super::shortest_path) for
//! planning; this is for analysis and for checking search results on small
//! networks.

use serde::Deserialize;

use crate::evaluation::LegEvaluator;
use crate::models::{LinkId, PointId, TransportMode};
use crate::network::Network;

/// Caps on path enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnumerationLimits {
    /// Maximum number of legs in a path.
    pub max_depth: usize,
    /// Maximum number of paths returned.
    pub max_paths: usize,
}

impl Default for EnumerationLimits {
    fn default() -> Self {
        Self {
            max_depth: 16,
            max_paths: 1_000,
        }
    }
}

/// Lists simple `mode` paths from `origin` to `destination` as link
/// sequences, in depth-first order following link insertion order.
///
/// # Examples
///
/// ```
/// use u_freight::evaluation::LegEvaluator;
/// use u_freight::models::TransportMode;
/// use u_freight::network::Network;
/// use u_freight::search::{enumerate_paths, EnumerationLimits};
///
/// let mut net = Network::new();
/// for p in ["A", "B", "C"] { net.add_point(p).unwrap(); }
/// net.add_link("A", "B", TransportMode::Rail, 100.0, None).unwrap();
/// net.add_link("B", "C", TransportMode::Rail, 100.0, None).unwrap();
/// net.add_link("A", "C", TransportMode::Rail, 250.0, None).unwrap();
///
/// let a = net.point_id("A").unwrap();
/// let c = net.point_id("C").unwrap();
/// let eval = LegEvaluator::new(&net, 1_000.0);
/// let paths = enumerate_paths(&net, a, c, TransportMode::Rail, &eval,
///                             &EnumerationLimits::default());
/// assert_eq!(paths.len(), 2);
/// ```
pub fn enumerate_paths(
    network: &Network,
    origin: PointId,
    destination: PointId,
    mode: TransportMode,
    evaluator: &LegEvaluator<'_>,
    limits: &EnumerationLimits,
) -> Vec<Vec<LinkId>> {
    let search = search(network, origin, destination, mode, evaluator, limits);
    if search.truncated {
        log::debug!("{mode} path enumeration stopped at {} paths", limits.max_paths);
    }
    search.paths
}

fn search<'s, 'n>(
    network: &'n Network,
    origin: PointId,
    destination: PointId,
    mode: TransportMode,
    evaluator: &'s LegEvaluator<'n>,
    limits: &'s EnumerationLimits,
) -> Dfs<'s, 'n> {
    let mut dfs = Dfs {
        network,
        destination,
        mode,
        evaluator,
        limits,
        visited: vec![false; network.num_points()],
        path: Vec::new(),
        paths: Vec::new(),
        truncated: false,
    };
    dfs.visit(origin);
    dfs
}

struct Dfs<'s, 'n> {
    network: &'n Network,
    destination: PointId,
    mode: TransportMode,
    evaluator: &'s LegEvaluator<'n>,
    limits: &'s EnumerationLimits,
    visited: Vec<bool>,
    path: Vec<LinkId>,
    paths: Vec<Vec<LinkId>>,
    // set when a path was found after the result cap was reached
    truncated: bool,
}

impl Dfs<'_, '_> {
    fn visit(&mut self, point: PointId) {
        if self.truncated {
            return;
        }
        if point == self.destination {
            if self.path.is_empty() {
                return;
            }
            if self.paths.len() >= self.limits.max_paths {
                self.truncated = true;
            } else {
                self.paths.push(self.path.clone());
            }
            return;
        }
        if self.path.len() >= self.limits.max_depth {
            return;
        }

        self.visited[point.index()] = true;
        let network = self.network;
        for link in network.links_from(point, self.mode) {
            let next = link.destination();
            if self.visited[next.index()] || !self.evaluator.usable(link) {
                continue;
            }
            self.path.push(link.id());
            self.visit(next);
            self.path.pop();
        }
        self.visited[point.index()] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Restriction;

    fn grid() -> Network {
        let mut net = Network::new();
        for p in ["A", "B", "C", "D"] {
            net.add_point(p).unwrap();
        }
        net.add_link("A", "B", TransportMode::Road, 10.0, None).unwrap();
        net.add_link("A", "C", TransportMode::Road, 10.0, None).unwrap();
        net.add_link("B", "C", TransportMode::Road, 10.0, None).unwrap();
        net.add_link("C", "B", TransportMode::Road, 10.0, None).unwrap();
        net.add_link("B", "D", TransportMode::Road, 10.0, None).unwrap();
        net.add_link("C", "D", TransportMode::Road, 10.0, Some(Restriction::MaxWeight(500.0)))
            .unwrap();
        net.add_link("D", "A", TransportMode::Road, 10.0, None).unwrap();
        net.add_link("A", "D", TransportMode::Air, 10.0, None).unwrap();
        net
    }

    fn endpoints(net: &Network) -> (PointId, PointId) {
        (net.point_id("A").unwrap(), net.point_id("D").unwrap())
    }

    #[test]
    fn test_all_simple_paths() {
        let net = grid();
        let (a, d) = endpoints(&net);
        let eval = LegEvaluator::new(&net, 100.0);
        let limits = EnumerationLimits::default();
        let paths = enumerate_paths(&net, a, d, TransportMode::Road, &eval, &limits);
        // A-B-D, A-B-C-D, A-C-B-D, A-C-D
        assert_eq!(paths.len(), 4);
        for path in &paths {
            let mut seen = std::collections::HashSet::new();
            for id in path {
                assert!(seen.insert(net.link(*id).origin()));
                assert_eq!(net.link(*id).mode(), TransportMode::Road);
            }
        }
    }

    #[test]
    fn test_restriction_gates_paths() {
        let net = grid();
        let (a, d) = endpoints(&net);
        let eval = LegEvaluator::new(&net, 1_000.0);
        let limits = EnumerationLimits::default();
        let paths = enumerate_paths(&net, a, d, TransportMode::Road, &eval, &limits);
        // C -> D is closed above 500 kg
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_limits() {
        let net = grid();
        let (a, d) = endpoints(&net);
        let eval = LegEvaluator::new(&net, 100.0);

        let short = EnumerationLimits {
            max_depth: 2,
            max_paths: 100,
        };
        let paths = enumerate_paths(&net, a, d, TransportMode::Road, &eval, &short);
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.len() <= 2));

        let few = EnumerationLimits {
            max_depth: 16,
            max_paths: 1,
        };
        assert_eq!(enumerate_paths(&net, a, d, TransportMode::Road, &eval, &few).len(), 1);
    }

    #[test]
    fn test_truncated_only_when_paths_dropped() {
        let net = grid();
        let (a, d) = endpoints(&net);
        let eval = LegEvaluator::new(&net, 100.0);

        // the grid has exactly four simple road paths
        let exact = EnumerationLimits {
            max_depth: 16,
            max_paths: 4,
        };
        let dfs = search(&net, a, d, TransportMode::Road, &eval, &exact);
        assert_eq!(dfs.paths.len(), 4);
        assert!(!dfs.truncated);

        let capped = EnumerationLimits {
            max_depth: 16,
            max_paths: 3,
        };
        let dfs = search(&net, a, d, TransportMode::Road, &eval, &capped);
        assert_eq!(dfs.paths.len(), 3);
        assert!(dfs.truncated);
    }

    #[test]
    fn test_no_paths() {
        let net = grid();
        let (a, d) = endpoints(&net);
        let eval = LegEvaluator::new(&net, 100.0);
        let limits = EnumerationLimits::default();
        assert!(enumerate_paths(&net, d, a, TransportMode::Air, &eval, &limits).is_empty());
        assert_eq!(enumerate_paths(&net, a, d, TransportMode::Air, &eval, &limits).len(), 1);
    }
}
