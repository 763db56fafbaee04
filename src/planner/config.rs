//! Planner configuration.

use serde::Deserialize;

use crate::error::{FreightError, Result};
use crate::models::TransportMode;
use crate::search::EnumerationLimits;

/// Settings for [`Planner`](super::Planner).
///
/// Deserializable with defaults for missing fields, so it can be embedded
/// in a host application's configuration file.
///
/// # Examples
///
/// ```
/// use u_freight::models::TransportMode;
/// use u_freight::planner::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_modes([TransportMode::Road, TransportMode::Rail])
///     .with_max_paths(50);
/// assert_eq!(config.modes, vec![TransportMode::Road, TransportMode::Rail]);
/// assert_eq!(config.enumeration.max_paths, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Modes to search, in order.
    pub modes: Vec<TransportMode>,
    /// Caps for diagnostic path enumeration.
    pub enumeration: EnumerationLimits,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            modes: TransportMode::ALL.to_vec(),
            enumeration: EnumerationLimits::default(),
        }
    }
}

impl PlannerConfig {
    /// Restricts planning to the given modes. Duplicates are dropped.
    pub fn with_modes(mut self, modes: impl IntoIterator<Item = TransportMode>) -> Self {
        self.modes.clear();
        for mode in modes {
            if !self.modes.contains(&mode) {
                self.modes.push(mode);
            }
        }
        self
    }

    /// Sets the maximum number of legs of an enumerated path.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.enumeration.max_depth = max_depth;
        self
    }

    /// Sets the maximum number of enumerated paths.
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.enumeration.max_paths = max_paths;
        self
    }

    /// Checks that at least one mode is enabled and the limits are non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.modes.is_empty() {
            return Err(FreightError::validation("config", "no transport mode enabled"));
        }
        if self.enumeration.max_depth == 0 || self.enumeration.max_paths == 0 {
            return Err(FreightError::validation(
                "config",
                "enumeration limits must be positive",
            ));
        }
        Ok(())
    }
}
