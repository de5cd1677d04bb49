use bevy::prelude::*;

use crate::components::{
    AircraftData, AircraftState, ControlCommand, PhysicsData, StartConfig, TelemetrySnapshot,
};
use crate::resources::{EnvironmentConfig, EnvironmentResource, PhysicsConfig, SimulationConfig};
use crate::systems::physics::{update_physics, validate_time_step};
use crate::utils::errors::SimError;

/// One aircraft flown without an ECS: owns its state, frame cache and
/// environment.
pub struct FlightSimulation {
    data: AircraftData,
    state: AircraftState,
    physics: PhysicsData,
    environment: EnvironmentResource,
    config: PhysicsConfig,
    time: f64,
    crashed: bool,
}

impl FlightSimulation {
    pub fn new(
        data: AircraftData,
        start: &StartConfig,
        environment: &EnvironmentConfig,
        config: PhysicsConfig,
    ) -> Result<Self, SimError> {
        data.validate()?;
        validate_time_step(config.time_step)?;
        config.validate()?;
        environment.validate()?;

        Ok(Self {
            state: AircraftState::new(&data, start),
            data,
            physics: PhysicsData::default(),
            environment: EnvironmentResource::new(environment),
            config,
            time: 0.0,
            crashed: false,
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let data = AircraftData::new(config.aircraft.clone())?;
        Self::new(
            data,
            &config.start,
            &config.environment,
            config.physics.clone(),
        )
    }

    /// Advances by `delta_time`: controls, physics, position, ground check.
    /// Returns false once the aircraft has crashed.
    pub fn step(&mut self, delta_time: f64) -> bool {
        if self.crashed {
            return false;
        }
        if validate_time_step(delta_time).is_err() {
            warn!("Ignoring step of {} s", delta_time);
            return true;
        }

        self.time += delta_time;
        let controls = self.state.controls;
        self.state.apply_controls(&controls);
        update_physics(
            &mut self.state,
            &mut self.physics,
            &self.data,
            &self.environment,
            &self.config,
            delta_time,
            self.time,
        );
        self.state.advance_position(delta_time);

        if self.state.altitude() <= 0.0 {
            error!(
                "{} crashed at t={:.2}s, {:.0} m/s",
                self.data.name,
                self.time,
                self.state.speed()
            );
            self.crashed = true;
        }
        !self.crashed
    }

    /// Steps at the configured tick until `duration` seconds have passed or
    /// the aircraft crashes. Returns the number of ticks run.
    pub fn run_for(&mut self, duration: f64) -> usize {
        let dt = self.config.time_step;
        let end = self.time + duration;
        let mut ticks = 0;
        while self.time + dt <= end + 1e-9 && self.step(dt) {
            ticks += 1;
        }
        ticks
    }

    pub fn command(&mut self, command: ControlCommand) {
        self.state.controls.adjust(command);
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.state.controls.set_throttle(throttle);
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::capture(&self.data.name, self.time, &self.state, &self.physics)
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AircraftState {
        &mut self.state
    }

    pub fn physics(&self) -> &PhysicsData {
        &self.physics
    }

    pub fn data(&self) -> &AircraftData {
        &self.data
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn simulation() -> FlightSimulation {
        FlightSimulation::new(
            AircraftData::j29f(),
            &StartConfig::at(Vector3::new(0.0, 3000.0, 0.0), Vector3::new(200.0, 0.0, 0.0)),
            &EnvironmentConfig::calm(),
            PhysicsConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_aircraft() {
        let data = AircraftData {
            mass: 0.0,
            ..AircraftData::j29f()
        };
        let result = FlightSimulation::new(
            data,
            &StartConfig::default(),
            &EnvironmentConfig::calm(),
            PhysicsConfig::default(),
        );
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_time_step() {
        let config = PhysicsConfig {
            time_step: 0.0,
            ..Default::default()
        };
        let result = FlightSimulation::new(
            AircraftData::j29f(),
            &StartConfig::default(),
            &EnvironmentConfig::calm(),
            config,
        );
        assert!(matches!(result, Err(SimError::Physics(_))));
    }

    #[test]
    fn test_run_for_advances_time_and_position() {
        let mut sim = simulation();
        let ticks = sim.run_for(1.0);

        assert_eq!(ticks, 62);
        assert!(sim.state().position.x > 190.0);
        assert!(!sim.is_crashed());
        assert!(sim.state().fuel < sim.data().fuel_capacity);
    }

    #[test]
    fn test_crash_stops_simulation() {
        let mut sim = FlightSimulation::new(
            AircraftData::j29f(),
            &StartConfig::at(Vector3::new(0.0, 1.0, 0.0), Vector3::new(100.0, -100.0, 0.0)),
            &EnvironmentConfig::calm(),
            PhysicsConfig::default(),
        )
        .unwrap();

        assert!(!sim.step(0.016));
        assert!(sim.is_crashed());
        let position = sim.state().position;
        assert!(!sim.step(0.016));
        assert_eq!(sim.state().position, position);
    }

    #[test]
    fn test_commands_reach_controls() {
        let mut sim = simulation();
        sim.command(ControlCommand::PitchUp);
        sim.step(0.016);
        assert_eq!(sim.state().orientation.pitch, 0.02);
    }

    #[test]
    fn test_rejects_degenerate_atmosphere() {
        let mut environment = EnvironmentConfig::calm();
        environment.atmosphere_config.lapse_rate = 0.0;
        let result = FlightSimulation::new(
            AircraftData::j29f(),
            &StartConfig::at(Vector3::new(0.0, 12_000.0, 0.0), Vector3::new(250.0, 0.0, 0.0)),
            &environment,
            PhysicsConfig::default(),
        );
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn test_rejects_invalid_physics_config() {
        let config = PhysicsConfig {
            oswald_efficiency: 0.0,
            ..Default::default()
        };
        let result = FlightSimulation::new(
            AircraftData::j29f(),
            &StartConfig::default(),
            &EnvironmentConfig::calm(),
            config,
        );
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}
