//! Points and links of the transport network.

use std::hash::{Hash, Hasher};

use super::{Restriction, TransportMode};

/// Index of a point inside its [`Network`](crate::network::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub(crate) usize);

impl PointId {
    /// Position in the network's point table.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Index of a link inside its [`Network`](crate::network::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub(crate) usize);

impl LinkId {
    /// Position in the network's link table.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A named location. Equality and hashing use the name only.
#[derive(Debug, Clone)]
pub struct Point {
    id: PointId,
    name: String,
    outgoing: Vec<LinkId>,
}

impl Point {
    pub(crate) fn new(id: PointId, name: String) -> Self {
        Self {
            id,
            name,
            outgoing: Vec::new(),
        }
    }

    pub(crate) fn push_outgoing(&mut self, link: LinkId) {
        self.outgoing.push(link);
    }

    /// Network index of this point.
    pub fn id(&self) -> PointId {
        self.id
    }

    /// Unique point name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing links of every mode, in insertion order.
    pub fn outgoing(&self) -> &[LinkId] {
        &self.outgoing
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A directed, mode-tagged connection between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    id: LinkId,
    origin: PointId,
    destination: PointId,
    mode: TransportMode,
    distance: f64,
    restriction: Option<Restriction>,
}

impl Link {
    pub(crate) fn new(
        id: LinkId,
        origin: PointId,
        destination: PointId,
        mode: TransportMode,
        distance: f64,
        restriction: Option<Restriction>,
    ) -> Self {
        Self {
            id,
            origin,
            destination,
            mode,
            distance,
            restriction,
        }
    }

    /// Network index of this link.
    pub fn id(&self) -> LinkId {
        self.id
    }

    /// Tail of the link.
    pub fn origin(&self) -> PointId {
        self.origin
    }

    /// Head of the link.
    pub fn destination(&self) -> PointId {
        self.destination
    }

    /// Transport mode.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Length in km (always positive).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Operating restriction, if any.
    pub fn restriction(&self) -> Option<&Restriction> {
        self.restriction.as_ref()
    }
}
