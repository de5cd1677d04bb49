use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::ConfigError;
use crate::utils::constants::{CACHE_TIME_EPSILON, GRAVITY, OSWALD_EFFICIENCY};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed tick length (s).
    pub time_step: f64,
    /// m/s²
    pub gravity: f64,
    pub oswald_efficiency: f64,
    /// Largest timestamp difference (s) for which the frame cache is reused.
    pub cache_epsilon: f64,
    /// Log out-of-envelope speed, altitude, throttle and AoA.
    pub warn_on_limits: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            time_step: 0.016,
            gravity: GRAVITY,
            oswald_efficiency: OSWALD_EFFICIENCY,
            cache_epsilon: CACHE_TIME_EPSILON,
            warn_on_limits: true,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("time_step", self.time_step),
            ("gravity", self.gravity),
            ("oswald_efficiency", self.oswald_efficiency),
            ("cache_epsilon", self.cache_epsilon),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "physics: {} must be positive, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}
