use std::f64::consts::PI;

use crate::utils::constants::{
    CLIMB_ANGLE_THRESHOLD, MIN_DENSITY, MIN_INDUCED_DRAG_SPEED, MIN_SPEED_THRESHOLD,
    MIN_VECTOR_NORM, SUBSONIC_DRAG_RISE, SUPERSONIC_MACH, TRANSONIC_MACH, TURN_PITCH_THRESHOLD,
    TURN_YAW_THRESHOLD,
};
use crate::utils::math::Orientation;

/// Indicated-to-true airspeed correction, `V * sqrt(rho0 / rho)`.
///
/// Falls back to `speed` when the local density is degenerate.
pub fn true_airspeed(speed: f64, density: f64, sea_level_density: f64) -> f64 {
    if density < MIN_DENSITY || sea_level_density < MIN_DENSITY {
        return speed;
    }
    speed * (sea_level_density / density).sqrt()
}

pub fn mach_number(true_airspeed: f64, speed_of_sound: f64) -> f64 {
    if speed_of_sound < MIN_SPEED_THRESHOLD {
        return 0.0;
    }
    true_airspeed / speed_of_sound
}

pub fn dynamic_pressure(density: f64, true_airspeed: f64) -> f64 {
    0.5 * density * true_airspeed * true_airspeed
}

/// Lift coefficient needed to carry the aircraft's weight.
///
/// `C_L = m g / (q S)`, scaled by the load factor `1 / cos(roll)` in a turn
/// (both yaw and pitch deflected) or by `cos(gamma)` when climbing or
/// descending. Returns 0 when `q S` is degenerate.
pub fn lift_coefficient(
    mass: f64,
    gravity: f64,
    density: f64,
    true_airspeed: f64,
    wing_area: f64,
    orientation: &Orientation,
    flight_path_angle: f64,
) -> f64 {
    let denominator = dynamic_pressure(density, true_airspeed) * wing_area;
    if !denominator.is_finite() || denominator < MIN_DENSITY {
        return 0.0;
    }
    let level_cl = mass * gravity / denominator;

    let turning = orientation.yaw.abs() > TURN_YAW_THRESHOLD
        && orientation.pitch.abs() > TURN_PITCH_THRESHOLD;

    if turning {
        let cos_roll = orientation.roll.cos();
        if cos_roll.abs() < MIN_VECTOR_NORM {
            level_cl
        } else {
            level_cl / cos_roll
        }
    } else if flight_path_angle.abs() > CLIMB_ANGLE_THRESHOLD {
        level_cl * flight_path_angle.cos()
    } else {
        level_cl
    }
}

/// Drag coefficient for the current Mach regime.
///
/// * subsonic: `Cd0 + 0.05 (V / Vmax)²`
/// * transonic: subsonic value plus `alpha (M - 1)²`
/// * supersonic: `Cd0 + kw (M - Md)²`
pub fn drag_coefficient(
    cd0: f64,
    mach: f64,
    true_airspeed: f64,
    max_speed: f64,
    alpha: f64,
    kw: f64,
    md: f64,
) -> f64 {
    let speed_ratio = if max_speed > MIN_SPEED_THRESHOLD {
        true_airspeed / max_speed
    } else {
        0.0
    };
    let subsonic = cd0 + SUBSONIC_DRAG_RISE * speed_ratio * speed_ratio;

    if mach < TRANSONIC_MACH {
        subsonic
    } else if mach < SUPERSONIC_MACH {
        subsonic + alpha * (mach - 1.0).powi(2)
    } else {
        cd0 + kw * (mach - md).powi(2)
    }
}

/// `C_L² / (π AR e)`
pub fn induced_drag_coefficient(lift_coefficient: f64, aspect_ratio: f64, oswald: f64) -> f64 {
    let denominator = PI * aspect_ratio * oswald;
    if denominator < MIN_VECTOR_NORM {
        return 0.0;
    }
    lift_coefficient * lift_coefficient / denominator
}

pub fn parasitic_drag(drag_coefficient: f64, density: f64, true_airspeed: f64, wing_area: f64) -> f64 {
    drag_coefficient * dynamic_pressure(density, true_airspeed) * wing_area
}

/// Zero below 0.1 m/s.
pub fn induced_drag(
    lift_coefficient: f64,
    aspect_ratio: f64,
    oswald: f64,
    density: f64,
    true_airspeed: f64,
    wing_area: f64,
) -> f64 {
    if true_airspeed < MIN_INDUCED_DRAG_SPEED {
        return 0.0;
    }
    dynamic_pressure(density, true_airspeed)
        * wing_area
        * induced_drag_coefficient(lift_coefficient, aspect_ratio, oswald)
}

/// `q S Cd0 kw (M - Md)²` beyond the drag-divergence Mach number, else 0.
pub fn wave_drag(
    dynamic_pressure: f64,
    wing_area: f64,
    cd0: f64,
    kw: f64,
    mach: f64,
    md: f64,
) -> f64 {
    if mach <= md {
        return 0.0;
    }
    dynamic_pressure * wing_area * cd0 * kw * (mach - md).powi(2)
}
