use bevy::prelude::*;
use nalgebra::Vector3;
use thiserror::Error;

use super::error::PhysicsError;
use crate::components::{AircraftData, AircraftState};
use crate::utils::constants::MAX_THROTTLE;
use crate::utils::math::{ms_to_kmh, rad_to_deg};

/// Out-of-envelope condition. Reported, never enforced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LimitViolation {
    #[error("speed {speed_kmh:.0} km/h exceeds maximum {max_kmh:.0} km/h")]
    Overspeed { speed_kmh: f64, max_kmh: f64 },

    #[error("speed {speed_kmh:.0} km/h below stall speed {stall_kmh:.0} km/h")]
    BelowStallSpeed { speed_kmh: f64, stall_kmh: f64 },

    #[error("altitude {altitude:.0} m above service ceiling {ceiling:.0} m")]
    AboveServiceCeiling { altitude: f64, ceiling: f64 },

    #[error("throttle {0:.3} outside [0, 1.01]")]
    ThrottleOutOfRange(f64),

    #[error("angle of attack {aoa_deg:.1} deg exceeds limit {max_deg:.1} deg")]
    AngleOfAttack { aoa_deg: f64, max_deg: f64 },
}

pub fn validate_time_step(delta_time: f64) -> Result<(), PhysicsError> {
    if delta_time.is_finite() && delta_time > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidTimeStep(delta_time))
    }
}

pub fn check_finite(quantity: &str, value: f64) -> Result<f64, PhysicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::NonFinite {
            quantity: quantity.to_string(),
        })
    }
}

/// Passes finite values through; logs and replaces anything else with 0.
pub fn finite_or_zero(quantity: &str, value: f64) -> f64 {
    match check_finite(quantity, value) {
        Ok(value) => value,
        Err(e) => {
            error!("{} ({}), using 0", e, value);
            0.0
        }
    }
}

pub fn finite_vector_or_zero(quantity: &str, value: Vector3<f64>) -> Vector3<f64> {
    if value.iter().all(|c| c.is_finite()) {
        value
    } else {
        error!("Non-finite {} {:?}, using zero vector", quantity, value);
        Vector3::zeros()
    }
}

pub fn check_limits(state: &AircraftState, data: &AircraftData) -> Vec<LimitViolation> {
    let mut violations = Vec::new();

    let speed = state.speed();
    if data.max_speed > 0.0 && speed > data.max_speed_ms() {
        violations.push(LimitViolation::Overspeed {
            speed_kmh: ms_to_kmh(speed),
            max_kmh: data.max_speed,
        });
    }
    if speed < data.stall_speed_ms() {
        violations.push(LimitViolation::BelowStallSpeed {
            speed_kmh: ms_to_kmh(speed),
            stall_kmh: data.stall_speed,
        });
    }

    if data.service_ceiling > 0.0 && state.altitude() > data.service_ceiling {
        violations.push(LimitViolation::AboveServiceCeiling {
            altitude: state.altitude(),
            ceiling: data.service_ceiling,
        });
    }

    let throttle = state.controls.throttle;
    if !(0.0..=MAX_THROTTLE).contains(&throttle) {
        violations.push(LimitViolation::ThrottleOutOfRange(throttle));
    }

    if data.max_aoa > 0.0 && state.angle_of_attack.abs() > data.max_aoa_rad() {
        violations.push(LimitViolation::AngleOfAttack {
            aoa_deg: rad_to_deg(state.angle_of_attack),
            max_deg: data.max_aoa,
        });
    }

    violations
}

pub fn log_limit_violations(state: &AircraftState, data: &AircraftData) {
    for violation in check_limits(state, data) {
        warn!("{}: {}", data.name, violation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::StartConfig;

    fn cruising() -> (AircraftData, AircraftState) {
        let data = AircraftData::j29f();
        let state = AircraftState::new(
            &data,
            &StartConfig::at(Vector3::new(0.0, 3000.0, 0.0), Vector3::new(200.0, 0.0, 0.0)),
        );
        (data, state)
    }

    #[test]
    fn test_time_step_validation() {
        assert!(validate_time_step(0.016).is_ok());
        assert_eq!(
            validate_time_step(0.0),
            Err(PhysicsError::InvalidTimeStep(0.0))
        );
        assert!(validate_time_step(-1.0).is_err());
        assert!(validate_time_step(f64::NAN).is_err());
    }

    #[test]
    fn test_non_finite_replaced() {
        assert_eq!(finite_or_zero("lift", f64::NAN), 0.0);
        assert_eq!(finite_or_zero("lift", 12.5), 12.5);
        assert_eq!(
            finite_vector_or_zero("drag", Vector3::new(1.0, f64::INFINITY, 0.0)),
            Vector3::zeros()
        );
    }

    #[test]
    fn test_no_violations_in_cruise() {
        let (data, state) = cruising();
        assert!(check_limits(&state, &data).is_empty());
    }

    #[test]
    fn test_envelope_violations() {
        let (data, mut state) = cruising();
        state.velocity = Vector3::new(400.0, 0.0, 0.0);
        state.position.y = 20_000.0;
        state.controls.throttle = 1.2;

        let violations = check_limits(&state, &data);
        assert!(violations
            .iter()
            .any(|v| matches!(v, LimitViolation::Overspeed { .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, LimitViolation::AboveServiceCeiling { .. })));
        assert!(violations.contains(&LimitViolation::ThrottleOutOfRange(1.2)));
    }

    #[test]
    fn test_violation_message() {
        let violation = LimitViolation::AboveServiceCeiling {
            altitude: 16000.0,
            ceiling: 15500.0,
        };
        assert_eq!(
            violation.to_string(),
            "altitude 16000 m above service ceiling 15500 m"
        );
    }
}
