use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::math::Orientation;

/// Initial conditions of a flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// World position (m), y up.
    pub position: Vector3<f64>,
    /// m/s
    pub velocity: Vector3<f64>,
    /// rad
    pub orientation: Orientation,
    pub throttle: f64,
    /// Fuel load (kg); a full tank when unset.
    pub fuel: Option<f64>,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 500.0, 0.0),
            velocity: Vector3::new(100.0, 0.0, 0.0),
            orientation: Orientation::default(),
            throttle: 1.0,
            fuel: None,
        }
    }
}

impl StartConfig {
    pub fn at(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            position,
            velocity,
            ..Default::default()
        }
    }

    pub fn with_throttle(mut self, throttle: f64) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_fuel(mut self, fuel: f64) -> Self {
        self.fuel = Some(fuel);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}
