//! Directed multigraph of mode-tagged links.

use std::collections::{BTreeMap, HashMap};

use crate::error::{FreightError, Result};
use crate::models::{Link, LinkId, Point, PointId, Restriction, TransportMode};

/// Summary counts of a network.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkStats {
    /// Number of points.
    pub points: usize,
    /// Number of links.
    pub links: usize,
    /// Number of links per mode (modes without links are absent).
    pub links_by_mode: BTreeMap<TransportMode, usize>,
}

/// A transport network: named points joined by directed, mode-tagged links.
///
/// Parallel links (same endpoints, same or different modes) and cycles are
/// allowed. Points and links are never removed.
///
/// # Examples
///
/// ```
/// use u_freight::models::{Restriction, TransportMode};
/// use u_freight::network::Network;
///
/// let mut net = Network::new();
/// net.add_point("Buenos_Aires").unwrap();
/// net.add_point("Rosario").unwrap();
/// net.add_link("Buenos_Aires", "Rosario", TransportMode::Road, 300.0,
///              Some(Restriction::MaxWeight(25_000.0))).unwrap();
///
/// let ba = net.point_id("Buenos_Aires").unwrap();
/// assert_eq!(net.links_from(ba, TransportMode::Road).count(), 1);
/// assert_eq!(net.links_from(ba, TransportMode::Rail).count(), 0);
/// assert!(net.add_link("Buenos_Aires", "Rosario", TransportMode::Rail, 0.0, None).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network {
    points: Vec<Point>,
    links: Vec<Link>,
    index: HashMap<String, PointId>,
    in_degree: Vec<usize>,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a point, returning its id. Idempotent by name.
    ///
    /// Names are trimmed; a blank name is rejected.
    pub fn add_point(&mut self, name: &str) -> Result<PointId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FreightError::validation("point", "name must not be empty"));
        }
        if let Some(&id) = self.index.get(name) {
            return Ok(id);
        }
        let id = PointId(self.points.len());
        self.points.push(Point::new(id, name.to_string()));
        self.in_degree.push(0);
        self.index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Adds a directed link between two registered points.
    ///
    /// Fails if the distance is not a positive finite number, the
    /// restriction payload is invalid (see [`Restriction::validate`]), or an
    /// endpoint is unknown.
    pub fn add_link(
        &mut self,
        origin: &str,
        destination: &str,
        mode: TransportMode,
        distance: f64,
        restriction: Option<Restriction>,
    ) -> Result<LinkId> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(FreightError::validation(
                "link",
                format!("{origin} -> {destination}: distance must be positive, got {distance}"),
            ));
        }
        if let Some(restriction) = &restriction {
            restriction.validate()?;
        }
        let from = self.resolve(origin)?;
        let to = self.resolve(destination)?;

        let id = LinkId(self.links.len());
        self.links
            .push(Link::new(id, from, to, mode, distance, restriction));
        self.points[from.0].push_outgoing(id);
        self.in_degree[to.0] += 1;
        Ok(id)
    }

    /// Looks up a point id by exact name, failing with
    /// [`FreightError::UnknownPoint`].
    pub fn resolve(&self, name: &str) -> Result<PointId> {
        self.point_id(name)
            .ok_or_else(|| FreightError::UnknownPoint(name.trim().to_string()))
    }

    /// Looks up a point id by exact (trimmed) name.
    pub fn point_id(&self, name: &str) -> Option<PointId> {
        self.index.get(name.trim()).copied()
    }

    /// Looks up a point by exact (trimmed) name.
    pub fn find_point(&self, name: &str) -> Option<&Point> {
        self.point_id(name).map(|id| &self.points[id.0])
    }

    /// Looks up a point by trimmed, case-insensitive name.
    ///
    /// Linear scan; intended for interactive lookups.
    pub fn find_point_ignore_case(&self, name: &str) -> Option<&Point> {
        let wanted = name.trim().to_lowercase();
        self.points
            .iter()
            .find(|p| p.name().to_lowercase() == wanted)
    }

    /// Returns the point with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this network.
    pub fn point(&self, id: PointId) -> &Point {
        &self.points[id.0]
    }

    /// Returns the link with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this network.
    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id.0]
    }

    /// All points, in registration order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// All links, in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of links.
    pub fn num_links(&self) -> usize {
        self.links.len()
    }

    /// Outgoing links of `point` with the given mode, in insertion order.
    pub fn links_from(&self, point: PointId, mode: TransportMode) -> impl Iterator<Item = &Link> {
        self.points[point.0]
            .outgoing()
            .iter()
            .map(move |&id| &self.links[id.0])
            .filter(move |link| link.mode() == mode)
    }

    /// Point, link and per-mode link counts.
    pub fn stats(&self) -> NetworkStats {
        let mut links_by_mode = BTreeMap::new();
        for link in &self.links {
            *links_by_mode.entry(link.mode()).or_insert(0) += 1;
        }
        NetworkStats {
            points: self.points.len(),
            links: self.links.len(),
            links_by_mode,
        }
    }

    /// Names of points with neither outgoing nor incoming links.
    pub fn isolated_points(&self) -> Vec<&str> {
        self.points
            .iter()
            .filter(|p| p.outgoing().is_empty() && self.in_degree[p.id().0] == 0)
            .map(|p| p.name())
            .collect()
    }
}
