use serde::{Deserialize, Serialize};

use super::config::{AtmosphereConfig, AtmosphereType};
use crate::utils::constants::{AIR_GAS_CONSTANT, GRAVITY, HEAT_CAPACITY_RATIO};

/// Atmospheric properties at one altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereSample {
    pub altitude: f64,
    /// K
    pub temperature: f64,
    /// Pa
    pub pressure: f64,
    /// kg/m³
    pub density: f64,
    /// m/s
    pub speed_of_sound: f64,
}

/// International Standard Atmosphere up to the tropopause, isothermal
/// exponential decay above it.
///
/// All methods are pure functions of altitude (m above sea level).
#[derive(Debug, Clone, Default)]
pub struct StandardAtmosphere {
    config: AtmosphereConfig,
}

impl StandardAtmosphere {
    pub fn new(config: AtmosphereConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AtmosphereConfig {
        &self.config
    }

    /// Exponent of the tropospheric pressure law, `-g / (L * R)`.
    fn pressure_exponent(&self) -> f64 {
        -GRAVITY / (self.config.lapse_rate * AIR_GAS_CONSTANT)
    }

    /// Scale factor of the isothermal layer, `g / (R * T_trop)`.
    fn isothermal_decay(&self) -> f64 {
        GRAVITY / (AIR_GAS_CONSTANT * self.config.tropopause_temperature)
    }

    fn above_tropopause(&self, altitude: f64) -> bool {
        altitude >= self.config.tropopause_altitude
    }

    pub fn temperature_kelvin(&self, altitude: f64) -> f64 {
        match self.config.model_type {
            AtmosphereType::Constant => self.config.sea_level_temperature,
            AtmosphereType::Standard if self.above_tropopause(altitude) => {
                self.config.tropopause_temperature
            }
            AtmosphereType::Standard => {
                self.config.sea_level_temperature + self.config.lapse_rate * altitude
            }
        }
    }

    /// Ratio `T / T0` of the troposphere, evaluated at the tropopause for
    /// altitudes above it.
    fn temperature_ratio(&self, altitude: f64) -> f64 {
        self.temperature_kelvin(altitude) / self.config.sea_level_temperature
    }

    pub fn pressure(&self, altitude: f64) -> f64 {
        match self.config.model_type {
            AtmosphereType::Constant => self.config.sea_level_pressure,
            AtmosphereType::Standard => {
                let exponent = self.pressure_exponent();
                if self.above_tropopause(altitude) {
                    let tropopause_pressure = self.config.sea_level_pressure
                        * self
                            .temperature_ratio(self.config.tropopause_altitude)
                            .powf(exponent);
                    tropopause_pressure
                        * (-self.isothermal_decay()
                            * (altitude - self.config.tropopause_altitude))
                            .exp()
                } else {
                    self.config.sea_level_pressure * self.temperature_ratio(altitude).powf(exponent)
                }
            }
        }
    }

    pub fn air_density(&self, altitude: f64) -> f64 {
        match self.config.model_type {
            AtmosphereType::Constant => self.config.sea_level_density,
            AtmosphereType::Standard => {
                let exponent = self.pressure_exponent() - 1.0;
                if self.above_tropopause(altitude) {
                    let tropopause_density = self.config.sea_level_density
                        * self
                            .temperature_ratio(self.config.tropopause_altitude)
                            .powf(exponent);
                    tropopause_density
                        * (-self.isothermal_decay()
                            * (altitude - self.config.tropopause_altitude))
                            .exp()
                } else {
                    self.config.sea_level_density * self.temperature_ratio(altitude).powf(exponent)
                }
            }
        }
    }

    /// Empirical `a0 * sqrt(T/T0)` in the troposphere, exact `sqrt(γRT)`
    /// above it.
    pub fn speed_of_sound(&self, altitude: f64) -> f64 {
        match self.config.model_type {
            AtmosphereType::Constant => self.config.sea_level_speed_of_sound,
            AtmosphereType::Standard if self.above_tropopause(altitude) => {
                (HEAT_CAPACITY_RATIO * AIR_GAS_CONSTANT * self.temperature_kelvin(altitude)).sqrt()
            }
            AtmosphereType::Standard => {
                self.config.sea_level_speed_of_sound * self.temperature_ratio(altitude).sqrt()
            }
        }
    }

    pub fn sea_level_density(&self) -> f64 {
        self.air_density(0.0)
    }

    pub fn sample(&self, altitude: f64) -> AtmosphereSample {
        AtmosphereSample {
            altitude,
            temperature: self.temperature_kelvin(altitude),
            pressure: self.pressure(altitude),
            density: self.air_density(altitude),
            speed_of_sound: self.speed_of_sound(altitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TROPOPAUSE: f64 = 11_000.0;

    fn isa() -> StandardAtmosphere {
        StandardAtmosphere::default()
    }

    #[test]
    fn test_sea_level_values() {
        let atmosphere = isa();
        let sample = atmosphere.sample(0.0);

        assert_relative_eq!(sample.temperature, 288.15);
        assert_relative_eq!(sample.pressure, 101_325.0);
        assert_relative_eq!(sample.density, 1.225);
        assert_relative_eq!(sample.speed_of_sound, 340.29, epsilon = 1e-9);
    }

    #[test]
    fn test_tropopause_temperature_is_exact() {
        assert_eq!(isa().temperature_kelvin(TROPOPAUSE), 216.65);
        assert_eq!(isa().temperature_kelvin(15_000.0), 216.65);
    }

    #[test]
    fn test_density_monotonic_in_troposphere() {
        let atmosphere = isa();
        let mut previous = atmosphere.air_density(0.0);
        let mut altitude = 100.0;
        while altitude <= TROPOPAUSE {
            let density = atmosphere.air_density(altitude);
            assert!(
                density < previous,
                "density not decreasing at {} m: {} >= {}",
                altitude,
                density,
                previous
            );
            previous = density;
            altitude += 100.0;
        }
    }

    #[test]
    fn test_continuity_at_tropopause() {
        let atmosphere = isa();
        let below = TROPOPAUSE - 1e-6;

        assert_relative_eq!(
            atmosphere.air_density(below),
            atmosphere.air_density(TROPOPAUSE),
            max_relative = 1e-3
        );
        assert_relative_eq!(
            atmosphere.pressure(below),
            atmosphere.pressure(TROPOPAUSE),
            max_relative = 1e-3
        );
        assert_relative_eq!(
            atmosphere.speed_of_sound(below),
            atmosphere.speed_of_sound(TROPOPAUSE),
            max_relative = 1e-3
        );
        assert_relative_eq!(
            atmosphere.temperature_kelvin(below),
            atmosphere.temperature_kelvin(TROPOPAUSE),
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_reference_densities() {
        // Tabulated ISA values
        let atmosphere = isa();
        assert_relative_eq!(atmosphere.air_density(5_000.0), 0.7364, max_relative = 1e-3);
        assert_relative_eq!(atmosphere.air_density(11_000.0), 0.3639, max_relative = 1e-3);
        assert_relative_eq!(atmosphere.air_density(15_000.0), 0.1937, max_relative = 1e-3);
    }

    #[test]
    fn test_constant_model_ignores_altitude() {
        let atmosphere = StandardAtmosphere::new(AtmosphereConfig::constant());
        assert_eq!(atmosphere.air_density(9_000.0), 1.225);
        assert_eq!(atmosphere.temperature_kelvin(9_000.0), 288.15);
        assert_eq!(atmosphere.speed_of_sound(20_000.0), 340.29);
    }
}
