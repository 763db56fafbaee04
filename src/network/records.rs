//! Typed records handed over by the ingestion layer.

use serde::Deserialize;

use super::Network;
use crate::error::{FreightError, Result};
use crate::models::{Restriction, TransportMode};

/// A link as read from a network file, before validation.
///
/// Field aliases accept the column names of the legacy CSV files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkRecord {
    /// Origin point name.
    #[serde(alias = "origen")]
    pub origin: String,
    /// Destination point name.
    #[serde(alias = "destino")]
    pub destination: String,
    /// Mode label, e.g. `road` or `Automotor`.
    #[serde(alias = "tipo")]
    pub mode: String,
    /// Length in km.
    #[serde(alias = "distancia_km")]
    pub distance_km: f64,
    /// Restriction kind, if any.
    #[serde(default, alias = "restriccion")]
    pub restriction: Option<String>,
    /// Restriction value, if any.
    #[serde(default, alias = "valor_restriccion")]
    pub restriction_value: Option<String>,
}

impl LinkRecord {
    /// Parses the mode label.
    pub fn parse_mode(&self) -> Result<TransportMode> {
        self.mode.parse()
    }

    /// Parses the restriction pair.
    ///
    /// Blank kinds mean no restriction. A kind without a value is rejected.
    pub fn parse_restriction(&self) -> Result<Option<Restriction>> {
        let kind = match self.restriction.as_deref().map(str::trim) {
            Some(k) if !k.is_empty() => k,
            _ => return Ok(None),
        };
        match self.restriction_value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Restriction::parse(kind, v).map(Some),
            _ => Err(FreightError::validation(
                "restriction",
                format!("{kind} on {} -> {} has no value", self.origin, self.destination),
            )),
        }
    }
}

impl Network {
    /// Builds a network from point names and link records.
    ///
    /// Each bad point or link is rejected on its own and returned alongside
    /// the network; the rest are still loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_freight::network::{LinkRecord, Network};
    ///
    /// let links = vec![
    ///     LinkRecord {
    ///         origin: "A".into(), destination: "B".into(), mode: "Automotor".into(),
    ///         distance_km: 120.0, restriction: Some("peso_max".into()),
    ///         restriction_value: Some("20000".into()),
    ///     },
    ///     LinkRecord {
    ///         origin: "A".into(), destination: "B".into(), mode: "Teleport".into(),
    ///         distance_km: 1.0, restriction: None, restriction_value: None,
    ///     },
    /// ];
    /// let (net, rejected) = Network::from_records(["A", "B"], links);
    /// assert_eq!(net.num_links(), 1);
    /// assert_eq!(rejected.len(), 1);
    /// ```
    pub fn from_records<'a, P, L>(points: P, links: L) -> (Network, Vec<FreightError>)
    where
        P: IntoIterator<Item = &'a str>,
        L: IntoIterator<Item = LinkRecord>,
    {
        let mut network = Network::new();
        let mut rejected = Vec::new();

        for name in points {
            if let Err(e) = network.add_point(name) {
                log::warn!("rejected point '{name}': {e}");
                rejected.push(e);
            }
        }

        for record in links {
            if let Err(e) = network.add_record(&record) {
                log::warn!(
                    "rejected link {} -> {}: {e}",
                    record.origin,
                    record.destination
                );
                rejected.push(e);
            }
        }

        log::debug!(
            "loaded network with {} points and {} links ({} records rejected)",
            network.num_points(),
            network.num_links(),
            rejected.len()
        );
        (network, rejected)
    }

    fn add_record(&mut self, record: &LinkRecord) -> Result<()> {
        let mode = record.parse_mode()?;
        let restriction = record.parse_restriction()?;
        self.add_link(
            &record.origin,
            &record.destination,
            mode,
            record.distance_km,
            restriction,
        )?;
        Ok(())
    }
}
