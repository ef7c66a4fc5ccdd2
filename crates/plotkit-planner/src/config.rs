//! Planner configuration.

use plotkit_core::PlanError;
use serde::{Deserialize, Serialize};

/// Kinematic limits and feasibility tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Constant acceleration and deceleration, units/s².
    pub acceleration: f64,
    /// Velocity ceiling, units/s.
    pub max_velocity: f64,
    /// Scales the allowed deviation at corners.
    pub corner_factor: f64,
    /// Look-ahead time step used by the feasibility throttle, seconds.
    pub delta_t: f64,
    /// Largest tolerated deviation from the nominal path.
    pub deviation_threshold: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            acceleration: 16.0,
            max_velocity: 4.0,
            corner_factor: 0.001,
            delta_t: 0.02,
            deviation_threshold: 0.001,
        }
    }
}

impl PlannerConfig {
    /// Validate the configuration
    ///
    /// Every parameter must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), PlanError> {
        for (name, value) in [
            ("acceleration", self.acceleration),
            ("max_velocity", self.max_velocity),
            ("corner_factor", self.corner_factor),
            ("delta_t", self.delta_t),
            ("deviation_threshold", self.deviation_threshold),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlanError::InvalidParameter {
                    name: name.to_string(),
                    reason: format!("must be a finite value > 0, got {}", value),
                });
            }
        }
        Ok(())
    }
}
