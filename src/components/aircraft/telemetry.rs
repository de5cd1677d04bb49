use serde::{Deserialize, Serialize};

use crate::components::aircraft::{AircraftState, PhysicsData};
use crate::utils::math::{ms_to_kmh, rad_to_deg};

/// Flight-info summary for one tick, written as a JSON line by headless runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub name: String,
    /// s
    pub time: f64,
    pub position: [f64; 3],
    /// m
    pub altitude: f64,
    pub speed_kmh: f64,
    pub true_airspeed_kmh: f64,
    pub mach: f64,
    pub angle_of_attack_deg: f64,
    pub throttle: f64,
    pub afterburner: bool,
    /// kg
    pub fuel: f64,
    /// kg
    pub mass: f64,
    /// N
    pub thrust: f64,
    /// N
    pub lift: f64,
    /// N
    pub drag: f64,
}

impl TelemetrySnapshot {
    pub fn capture(name: &str, time: f64, state: &AircraftState, physics: &PhysicsData) -> Self {
        Self {
            name: name.to_string(),
            time,
            position: [state.position.x, state.position.y, state.position.z],
            altitude: state.altitude(),
            speed_kmh: ms_to_kmh(state.speed()),
            true_airspeed_kmh: ms_to_kmh(physics.true_airspeed),
            mach: physics.mach,
            angle_of_attack_deg: rad_to_deg(state.angle_of_attack),
            throttle: state.controls.throttle,
            afterburner: state.afterburner_engaged(),
            fuel: state.fuel,
            mass: state.current_mass,
            thrust: state.thrust,
            lift: physics.lift,
            drag: physics.total_drag,
        }
    }

    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::aircraft::config::{AircraftData, StartConfig};

    #[test]
    fn test_capture_units() {
        let state = AircraftState::new(&AircraftData::j29f(), &StartConfig::default());
        let snapshot = TelemetrySnapshot::capture("J29F", 2.5, &state, &PhysicsData::default());

        assert_eq!(snapshot.altitude, 500.0);
        assert_eq!(snapshot.speed_kmh, 360.0);
        assert_eq!(snapshot.time, 2.5);
    }

    #[test]
    fn test_json_line_has_fields() {
        let state = AircraftState::new(&AircraftData::j29f(), &StartConfig::default());
        let snapshot = TelemetrySnapshot::capture("J29F", 0.0, &state, &PhysicsData::default());
        let line = snapshot.to_json_line().unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["name"], "J29F");
        assert_eq!(value["altitude"], 500.0);
        assert!(!line.contains('\n'));
    }
}
