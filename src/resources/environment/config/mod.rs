mod atmosphere;
mod wind;

pub use atmosphere::{AtmosphereConfig, AtmosphereType};
pub use wind::WindConfig;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub wind_model_config: WindConfig,
    pub atmosphere_config: AtmosphereConfig,
}

impl EnvironmentConfig {
    pub fn new(wind_config: WindConfig, atmosphere_config: AtmosphereConfig) -> Self {
        Self {
            wind_model_config: wind_config,
            atmosphere_config,
        }
    }

    /// Standard atmosphere without any wind.
    pub fn calm() -> Self {
        Self {
            wind_model_config: WindConfig::Calm,
            atmosphere_config: AtmosphereConfig::default(),
        }
    }

    /// Constant wind given as speed (m/s) and the heading it blows towards
    /// (degrees, 0 = +x, 90 = +z).
    pub fn with_constant_wind(wind_speed: f64, wind_direction: f64) -> Self {
        let angle_rad = wind_direction.to_radians();
        let velocity = Vector3::new(
            wind_speed * angle_rad.cos(),
            0.0,
            wind_speed * angle_rad.sin(),
        );

        Self {
            wind_model_config: WindConfig::Constant { velocity },
            atmosphere_config: AtmosphereConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.atmosphere_config.validate()?;
        self.wind_model_config.validate()
    }
}
