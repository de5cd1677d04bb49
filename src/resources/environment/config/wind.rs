use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindConfig {
    Calm,
    Constant {
        velocity: Vector3<f64>,
    },
    /// Eastward base wind growing with altitude plus a periodic gust.
    Turbulent {
        /// m/s at sea level
        base_speed: f64,
        /// m/s gained per metre of altitude
        altitude_factor: f64,
        /// m/s
        turbulence_amplitude: f64,
        /// rad/s
        turbulence_frequency: f64,
    },
}

impl WindConfig {
    /// Every wind parameter has to be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = match self {
            WindConfig::Calm => true,
            WindConfig::Constant { velocity } => velocity.iter().all(|c| c.is_finite()),
            WindConfig::Turbulent {
                base_speed,
                altitude_factor,
                turbulence_amplitude,
                turbulence_frequency,
            } => [
                *base_speed,
                *altitude_factor,
                *turbulence_amplitude,
                *turbulence_frequency,
            ]
            .iter()
            .all(|v| v.is_finite()),
        };
        if finite {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(format!(
                "wind: non-finite parameter in {:?}",
                self
            )))
        }
    }
}

impl Default for WindConfig {
    fn default() -> Self {
        WindConfig::Turbulent {
            base_speed: 2.0,
            altitude_factor: 0.001,
            turbulence_amplitude: 2.0,
            turbulence_frequency: 0.5,
        }
    }
}
