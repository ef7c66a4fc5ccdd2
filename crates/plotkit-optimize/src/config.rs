//! Optimizer stage configuration.

use plotkit_core::OptimizeError;
use serde::{Deserialize, Serialize};

use crate::spatial::IndexKind;

/// Highest decimal precision the round stage accepts.
pub const MAX_PRECISION: u32 = 15;

/// Round stage settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub enabled: bool,
    /// Number of decimal places kept.
    pub precision: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            precision: 4,
        }
    }
}

/// Simplify stage settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyConfig {
    pub enabled: bool,
    /// Points closer than this to the last kept point are merged.
    pub merge_distance: f64,
    /// Polylines that never leave this radius around their start are dropped.
    pub min_path_size: f64,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            merge_distance: 0.1,
            min_path_size: 0.5,
        }
    }
}

/// Sort stage settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub enabled: bool,
    /// Allow drawing a polyline from its end.
    pub allow_reversal: bool,
    /// Spatial index used for nearest-endpoint queries.
    pub index: IndexKind,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allow_reversal: true,
            index: IndexKind::RTree,
        }
    }
}

/// All optimizer stage settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub round: RoundConfig,
    pub simplify: SimplifyConfig,
    pub sort: SortConfig,
}

impl OptimizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), OptimizeError> {
        if self.round.precision > MAX_PRECISION {
            return Err(invalid(
                "round.precision",
                format!(
                    "must be at most {}, got {}",
                    MAX_PRECISION, self.round.precision
                ),
            ));
        }
        for (name, value) in [
            ("simplify.merge_distance", self.simplify.merge_distance),
            ("simplify.min_path_size", self.simplify.min_path_size),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(name, format!("must be >= 0, got {}", value)));
            }
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: String) -> OptimizeError {
    OptimizeError::InvalidParameter {
        name: name.to_string(),
        reason,
    }
}
