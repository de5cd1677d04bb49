use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::constants::MIN_VECTOR_NORM;

/// Euler attitude of the aircraft. All angles are radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Heading, positive from +x towards +z.
    pub yaw: f64,
    /// Nose up positive.
    pub pitch: f64,
    /// Right wing down positive.
    pub roll: f64,
}

impl Orientation {
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Same attitude expressed in degrees, `(yaw, pitch, roll)`.
    pub fn to_degrees(&self) -> Vector3<f64> {
        Vector3::new(
            rad_to_deg(self.yaw),
            rad_to_deg(self.pitch),
            rad_to_deg(self.roll),
        )
    }
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

#[inline]
pub fn kmh_to_ms(kmh: f64) -> f64 {
    kmh / 3.6
}

#[inline]
pub fn ms_to_kmh(ms: f64) -> f64 {
    ms * 3.6
}

/// Unit vector along `v`, or zero when `v` is too short to have a direction.
pub fn unit_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm < MIN_VECTOR_NORM {
        Vector3::zeros()
    } else {
        v / norm
    }
}

/// Horizontal (x-z plane) speed of a y-up velocity vector.
#[inline]
pub fn horizontal_speed(velocity: &Vector3<f64>) -> f64 {
    (velocity.x * velocity.x + velocity.z * velocity.z).sqrt()
}

/// Calculate the flight path angle from a y-up velocity vector.
///
/// Positive when climbing. Returns zero for a (near) stationary aircraft.
pub fn flight_path_angle(velocity: &Vector3<f64>) -> f64 {
    if velocity.norm() < MIN_VECTOR_NORM {
        return 0.0;
    }
    velocity.y.atan2(horizontal_speed(velocity))
}

/// Longitudinal axis vector (LAV): the direction the nose points in.
pub fn longitudinal_axis(orientation: &Orientation) -> Vector3<f64> {
    let (sin_pitch, cos_pitch) = orientation.pitch.sin_cos();
    let (sin_yaw, cos_yaw) = orientation.yaw.sin_cos();
    Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw)
}

/// Rotate `v` about the unit axis `k` by `theta` radians (Rodrigues' formula).
pub fn rotate_about_axis(v: &Vector3<f64>, k: &Vector3<f64>, theta: f64) -> Vector3<f64> {
    let (sin_t, cos_t) = theta.sin_cos();
    v * cos_t + k.cross(v) * sin_t + k * (k.dot(v) * (1.0 - cos_t))
}

/// Aircraft "up" vector composed from yaw, pitch and roll.
pub fn up_vector(orientation: &Orientation) -> Vector3<f64> {
    let (sin_yaw, cos_yaw) = orientation.yaw.sin_cos();
    let (sin_pitch, cos_pitch) = orientation.pitch.sin_cos();
    let (sin_roll, cos_roll) = orientation.roll.sin_cos();

    Vector3::new(
        -cos_yaw * sin_roll - sin_yaw * sin_pitch * cos_roll,
        cos_pitch * cos_roll,
        -sin_yaw * sin_roll + cos_yaw * sin_pitch * cos_roll,
    )
}

/// Right wing direction: the level wing vector for the current yaw, rolled
/// about the velocity direction.
pub fn right_wing_direction(orientation: &Orientation, velocity: &Vector3<f64>) -> Vector3<f64> {
    let wing_level = Vector3::new(orientation.yaw.cos(), 0.0, -orientation.yaw.sin());
    rotate_about_axis(&wing_level, &unit_or_zero(velocity), orientation.roll)
}

/// Normalised `wing × v̂`; zero when the two are parallel.
pub fn lift_axis_vector(wing_right: &Vector3<f64>, unit_velocity: &Vector3<f64>) -> Vector3<f64> {
    unit_or_zero(&wing_right.cross(unit_velocity))
}
