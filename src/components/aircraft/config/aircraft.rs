use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{AircraftCatalog, ConfigError};
use crate::utils::math::{deg_to_rad, kmh_to_ms};

/// Static performance data of one jet, in data-file units.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftData {
    pub name: String,
    /// Empty mass (kg).
    pub mass: f64,
    /// m²
    pub wing_area: f64,
    /// m
    pub wing_span: f64,
    /// deg
    pub sweep_angle: f64,
    /// Rated dry thrust (N).
    pub thrust: f64,
    /// Rated afterburner thrust (N), 0 when the engine has none.
    pub afterburner_thrust: f64,
    /// km/h
    pub max_speed: f64,
    /// km/h
    pub stall_speed: f64,
    /// m
    pub service_ceiling: f64,
    /// kg
    pub fuel_capacity: f64,
    /// Zero-lift drag coefficient.
    pub cd0: f64,
    /// deg
    pub max_aoa: f64,
    /// kg/s at full dry throttle
    pub fuel_burn: f64,
    /// kg/s
    pub afterburner_fuel_burn: f64,
    /// Transonic drag-rise factor.
    pub alpha: f64,
    /// Wave-drag factor.
    pub kw: f64,
    /// Drag-divergence Mach number.
    pub md: f64,
}

impl AircraftData {
    /// Loads aircraft data from the given source and validates it.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        let data = match source {
            AircraftSource::Catalog { path, name } => {
                AircraftCatalog::from_file(path)?.get(&name)?.clone()
            }
            AircraftSource::File(path) => Self::from_file(path)?,
            AircraftSource::Inline(data) => data,
        };
        data.validate()?;
        Ok(data)
    }

    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&file_contents)?)
    }

    /// Rejects data the physics cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("mass", self.mass),
            ("wing_area", self.wing_area),
            ("wing_span", self.wing_span),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{}: {} must be positive, got {}",
                    self.name, field, value
                )));
            }
        }

        let non_negative = [
            ("thrust", self.thrust),
            ("afterburner_thrust", self.afterburner_thrust),
            ("max_speed", self.max_speed),
            ("fuel_capacity", self.fuel_capacity),
            ("fuel_burn", self.fuel_burn),
            ("afterburner_fuel_burn", self.afterburner_fuel_burn),
            ("cd0", self.cd0),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{}: {} must not be negative, got {}",
                    self.name, field, value
                )));
            }
        }

        Ok(())
    }

    pub fn has_afterburner(&self) -> bool {
        self.afterburner_thrust > 0.0
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.wing_span * self.wing_span / self.wing_area
    }

    pub fn max_speed_ms(&self) -> f64 {
        kmh_to_ms(self.max_speed)
    }

    pub fn stall_speed_ms(&self) -> f64 {
        kmh_to_ms(self.stall_speed)
    }

    pub fn max_aoa_rad(&self) -> f64 {
        deg_to_rad(self.max_aoa)
    }

    /// Saab J 29F Tunnan.
    pub fn j29f() -> Self {
        Self {
            name: "J29F".to_string(),
            mass: 4845.0,
            wing_area: 24.15,
            wing_span: 11.0,
            sweep_angle: 25.0,
            thrust: 22_600.0,
            afterburner_thrust: 27_500.0,
            max_speed: 1060.0,
            stall_speed: 200.0,
            service_ceiling: 15_500.0,
            fuel_capacity: 1_700.0,
            cd0: 0.021,
            max_aoa: 15.0,
            fuel_burn: 0.55,
            afterburner_fuel_burn: 1.5,
            alpha: 0.2,
            kw: 0.12,
            md: 0.86,
        }
    }
}

impl Default for AircraftData {
    fn default() -> Self {
        Self::j29f()
    }
}

/// Where aircraft data comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AircraftSource {
    /// A named record of a pipe-delimited catalog.
    Catalog { path: PathBuf, name: String },
    /// A YAML document holding a single aircraft.
    File(PathBuf),
    Inline(AircraftData),
}

impl Default for AircraftSource {
    fn default() -> Self {
        AircraftSource::Catalog {
            path: PathBuf::from("data/aircraft_data.txt"),
            name: "J29F".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        assert!(AircraftData::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_wing_area() {
        let data = AircraftData {
            wing_area: 0.0,
            ..AircraftData::j29f()
        };
        assert!(matches!(
            data.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_nan_mass() {
        let data = AircraftData {
            mass: f64::NAN,
            ..AircraftData::j29f()
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_derived_values() {
        let data = AircraftData::j29f();
        assert_relative_eq!(data.aspect_ratio(), 121.0 / 24.15);
        assert_relative_eq!(data.max_speed_ms(), 1060.0 / 3.6);
        assert!(data.has_afterburner());
    }

    #[test]
    fn test_yaml_source() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        write!(file, "{}", serde_yaml::to_string(&AircraftData::j29f())?)?;

        let loaded = AircraftData::new(AircraftSource::File(file.path().to_path_buf()))?;
        assert_eq!(loaded, AircraftData::j29f());
        Ok(())
    }

    #[test]
    fn test_inline_source_is_validated() {
        let data = AircraftData {
            wing_span: -1.0,
            ..AircraftData::j29f()
        };
        assert!(AircraftData::new(AircraftSource::Inline(data)).is_err());
    }
}
