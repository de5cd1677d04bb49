use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::physics::PhysicsConfig;
use crate::components::{AircraftSource, ConfigError, StartConfig};
use crate::resources::environment::EnvironmentConfig;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub environment: EnvironmentConfig,
    pub aircraft: AircraftSource,
    pub start: StartConfig,
    /// Simulated seconds to run.
    pub duration: f64,
    /// Seconds between telemetry lines, 0 disables telemetry.
    pub telemetry_interval: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            environment: EnvironmentConfig::default(),
            aircraft: AircraftSource::default(),
            start: StartConfig::default(),
            duration: 60.0,
            telemetry_interval: 1.0,
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.environment.validate()?;
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "duration must not be negative, got {}",
                self.duration
            )));
        }
        Ok(())
    }
}
