//! Crate error type.

use crate::models::TransportMode;

/// Errors raised while building a network or planning a shipment.
///
/// Restriction gating is not an error: a link that fails its restriction is
/// simply filtered out of the search (see
/// [`evaluation::compatible`](crate::evaluation::compatible)).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FreightError {
    /// A malformed point, link, restriction or request.
    #[error("invalid {entity}: {reason}")]
    Validation {
        /// Kind of entity that was rejected.
        entity: &'static str,
        /// Human-readable cause.
        reason: String,
    },
    /// A point name that is not registered in the network.
    #[error("unknown point '{0}'")]
    UnknownPoint(String),
    /// No path exists, for one mode or for every mode when `mode` is `None`.
    #[error("no {} route from {origin} to {destination}", mode_label(.mode))]
    Unreachable {
        /// Origin point name.
        origin: String,
        /// Destination point name.
        destination: String,
        /// Mode that was searched, `None` when all modes failed.
        mode: Option<TransportMode>,
    },
    /// A leg does not start where the previous one ended.
    #[error("leg starting at {found} does not continue from {expected}")]
    Continuity {
        /// Destination of the last leg in the itinerary.
        expected: String,
        /// Origin of the rejected leg.
        found: String,
    },
    /// A leg would return to a point already visited.
    #[error("point {0} already visited by this itinerary")]
    Cycle(String),
}

impl FreightError {
    pub(crate) fn validation(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            entity,
            reason: reason.into(),
        }
    }
}

fn mode_label(mode: &Option<TransportMode>) -> String {
    match mode {
        Some(m) => m.to_string(),
        None => "multimodal".to_string(),
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FreightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let e = FreightError::validation("link", "distance must be positive, got 0");
        assert_eq!(
            e.to_string(),
            "invalid link: distance must be positive, got 0"
        );
    }

    #[test]
    fn test_unreachable_message() {
        let per_mode = FreightError::Unreachable {
            origin: "A".into(),
            destination: "B".into(),
            mode: Some(TransportMode::Road),
        };
        assert_eq!(per_mode.to_string(), "no road route from A to B");

        let total = FreightError::Unreachable {
            origin: "A".into(),
            destination: "B".into(),
            mode: None,
        };
        assert_eq!(total.to_string(), "no multimodal route from A to B");
    }
}
