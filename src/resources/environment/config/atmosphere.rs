use serde::{Deserialize, Serialize};

use crate::components::ConfigError;

use crate::utils::constants::{
    ISA_LAPSE_RATE, ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_SPEED_OF_SOUND,
    ISA_SEA_LEVEL_TEMP, ISA_TROPOPAUSE_ALTITUDE, ISA_TROPOPAUSE_TEMP,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    /// kg/m³
    pub sea_level_density: f64,
    /// K
    pub sea_level_temperature: f64,
    /// Pa
    pub sea_level_pressure: f64,
    /// m/s, used by the empirical tropospheric speed of sound
    pub sea_level_speed_of_sound: f64,
    /// K/m, negative in the troposphere
    pub lapse_rate: f64,
    /// m
    pub tropopause_altitude: f64,
    /// K, constant above the tropopause
    pub tropopause_temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AtmosphereType {
    /// Sea-level values at every altitude.
    Constant,
    /// ISA troposphere with an isothermal layer above the tropopause.
    Standard,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Standard,
            sea_level_density: ISA_SEA_LEVEL_DENSITY,
            sea_level_temperature: ISA_SEA_LEVEL_TEMP,
            sea_level_pressure: ISA_SEA_LEVEL_PRESSURE,
            sea_level_speed_of_sound: ISA_SEA_LEVEL_SPEED_OF_SOUND,
            lapse_rate: ISA_LAPSE_RATE,
            tropopause_altitude: ISA_TROPOPAUSE_ALTITUDE,
            tropopause_temperature: ISA_TROPOPAUSE_TEMP,
        }
    }
}

impl AtmosphereConfig {
    pub fn constant() -> Self {
        Self {
            model_type: AtmosphereType::Constant,
            ..Default::default()
        }
    }

    /// Rejects constants that make the pressure or density laws degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("sea_level_density", self.sea_level_density),
            ("sea_level_temperature", self.sea_level_temperature),
            ("sea_level_pressure", self.sea_level_pressure),
            ("sea_level_speed_of_sound", self.sea_level_speed_of_sound),
            ("tropopause_altitude", self.tropopause_altitude),
            ("tropopause_temperature", self.tropopause_temperature),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "atmosphere: {} must be positive, got {}",
                    field, value
                )));
            }
        }

        if !self.lapse_rate.is_finite() || self.lapse_rate >= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "atmosphere: lapse_rate must be negative, got {}",
                self.lapse_rate
            )));
        }

        // Temperature must stay positive up to the tropopause.
        let top = self.sea_level_temperature + self.lapse_rate * self.tropopause_altitude;
        if top <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "atmosphere: temperature reaches {} K below the tropopause",
                top
            )));
        }

        Ok(())
    }
}
