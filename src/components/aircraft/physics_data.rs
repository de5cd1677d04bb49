use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::constants::CACHE_TIME_EPSILON;

/// Per-frame cache of everything derived from the aircraft state.
///
/// Rebuilt once per simulation timestamp by
/// [`update_physics_data`](crate::systems::update_physics_data); the RK4
/// stages of the same tick read it without rebuilding.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsData {
    /// Timestamp of the last rebuild, `None` before the first one.
    pub last_simulation_time: Option<f64>,

    // Atmosphere
    /// kg/m³
    pub air_density: f64,
    /// kg/m³
    pub sea_level_density: f64,
    /// K
    pub temperature: f64,
    /// Pa
    pub pressure: f64,
    /// m/s
    pub speed_of_sound: f64,

    // Flight parameters
    /// Ground speed magnitude (m/s).
    pub speed: f64,
    /// m/s
    pub true_airspeed: f64,
    pub mach: f64,
    /// Pa, from true airspeed.
    pub dynamic_pressure: f64,
    /// rad
    pub angle_of_attack: f64,
    /// rad
    pub flight_path_angle: f64,

    /// `(yaw, pitch, roll)` in degrees, for display.
    pub orientation_deg: Vector3<f64>,

    // Vectors
    pub wind: Vector3<f64>,
    pub up: Vector3<f64>,
    pub longitudinal_axis: Vector3<f64>,
    pub right_wing: Vector3<f64>,
    pub lift_axis: Vector3<f64>,
    /// True airspeed along the nose minus wind (m/s).
    pub relative_velocity: Vector3<f64>,
    /// N
    pub lift_force: Vector3<f64>,
    /// N
    pub drag_force: Vector3<f64>,

    // Aerodynamics
    pub lift_coefficient: f64,
    /// N
    pub lift: f64,
    pub aspect_ratio: f64,

    // Drag
    pub drag_coefficient: f64,
    /// N
    pub parasitic_drag: f64,
    /// N
    pub induced_drag: f64,
    /// N
    pub wave_drag: f64,
    /// N
    pub total_drag: f64,

    /// N
    pub thrust: f64,
}

impl Default for PhysicsData {
    fn default() -> Self {
        Self {
            last_simulation_time: None,
            air_density: 0.0,
            sea_level_density: 0.0,
            temperature: 0.0,
            pressure: 0.0,
            speed_of_sound: 0.0,
            speed: 0.0,
            true_airspeed: 0.0,
            mach: 0.0,
            dynamic_pressure: 0.0,
            angle_of_attack: 0.0,
            flight_path_angle: 0.0,
            orientation_deg: Vector3::zeros(),
            wind: Vector3::zeros(),
            up: Vector3::y(),
            longitudinal_axis: Vector3::x(),
            right_wing: Vector3::zeros(),
            lift_axis: Vector3::zeros(),
            relative_velocity: Vector3::zeros(),
            lift_force: Vector3::zeros(),
            drag_force: Vector3::zeros(),
            lift_coefficient: 0.0,
            lift: 0.0,
            aspect_ratio: 0.0,
            drag_coefficient: 0.0,
            parasitic_drag: 0.0,
            induced_drag: 0.0,
            wave_drag: 0.0,
            total_drag: 0.0,
            thrust: 0.0,
        }
    }
}

impl PhysicsData {
    /// True when the cache was built for `simulation_time`.
    pub fn is_valid_for(&self, simulation_time: f64) -> bool {
        self.is_valid_within(simulation_time, CACHE_TIME_EPSILON)
    }

    pub fn is_valid_within(&self, simulation_time: f64, epsilon: f64) -> bool {
        self.last_simulation_time
            .map_or(false, |t| (t - simulation_time).abs() <= epsilon)
    }

    pub fn invalidate(&mut self) {
        self.last_simulation_time = None;
    }
}
