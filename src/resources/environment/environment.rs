use bevy::prelude::*;
use nalgebra::Vector3;

use super::atmosphere::{AtmosphereSample, StandardAtmosphere};
use super::config::EnvironmentConfig;
use super::wind::{build_wind_model, WindModel};

#[derive(Resource)]
pub struct EnvironmentResource {
    wind_model: Box<dyn WindModel + Send + Sync>,
    atmosphere: StandardAtmosphere,
}

impl EnvironmentResource {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            wind_model: build_wind_model(&config.wind_model_config),
            atmosphere: StandardAtmosphere::new(config.atmosphere_config.clone()),
        }
    }

    pub fn get_wind(&self, altitude: f64, time: f64) -> Vector3<f64> {
        self.wind_model.get_wind(altitude, time)
    }

    pub fn get_density(&self, altitude: f64) -> f64 {
        self.atmosphere.air_density(altitude)
    }

    pub fn sample(&self, altitude: f64) -> AtmosphereSample {
        self.atmosphere.sample(altitude)
    }

    pub fn atmosphere(&self) -> &StandardAtmosphere {
        &self.atmosphere
    }
}

impl Default for EnvironmentResource {
    fn default() -> Self {
        Self::new(&EnvironmentConfig::default())
    }
}
