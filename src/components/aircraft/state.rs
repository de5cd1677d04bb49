use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::{AircraftData, StartConfig};
use crate::components::aircraft::controls::AircraftControls;
use crate::utils::constants::AFTERBURNER_THROTTLE;
use crate::utils::math::{flight_path_angle, Orientation};

/// Mutable flight state of one jet. Angles are radians, y is up.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// m
    pub position: Vector3<f64>,
    /// m/s
    pub velocity: Vector3<f64>,
    pub orientation: Orientation,
    /// Angle of attack after the last velocity update (rad).
    pub angle_of_attack: f64,
    /// rad, positive climbing
    pub flight_path_angle: f64,
    /// Thrust produced during the last tick (N).
    pub thrust: f64,
    pub has_afterburner: bool,
    /// kg
    pub fuel: f64,
    /// Empty mass plus fuel (kg).
    pub current_mass: f64,
    /// Control inputs in effect for the current tick.
    pub controls: AircraftControls,
}

impl AircraftState {
    pub fn new(data: &AircraftData, start: &StartConfig) -> Self {
        let fuel = start
            .fuel
            .unwrap_or(data.fuel_capacity)
            .clamp(0.0, data.fuel_capacity.max(0.0));

        let mut state = Self {
            position: start.position,
            velocity: start.velocity,
            orientation: start.orientation,
            angle_of_attack: 0.0,
            flight_path_angle: 0.0,
            thrust: 0.0,
            has_afterburner: data.has_afterburner(),
            fuel,
            current_mass: data.mass + fuel,
            controls: AircraftControls::new(start.throttle, start.orientation),
        };
        state.controls.afterburner = state.afterburner_engaged();
        state.update_kinematics();
        state
    }

    /// Recomputes flight-path angle and angle of attack from the velocity.
    pub fn update_kinematics(&mut self) {
        self.flight_path_angle = flight_path_angle(&self.velocity);
        self.angle_of_attack = self.orientation.pitch - self.flight_path_angle;
    }

    /// Adopts a new set of pilot inputs; the attitude follows the stick.
    /// The stored afterburner flag is masked by the engine.
    pub fn apply_controls(&mut self, controls: &AircraftControls) {
        self.controls = *controls;
        self.controls.afterburner = self.afterburner_engaged();
        self.orientation = controls.orientation();
    }

    /// Integrates position from the current velocity.
    pub fn advance_position(&mut self, delta_time: f64) {
        self.position += self.velocity * delta_time;
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Throttle as a percentage, above 100 with the afterburner lit.
    pub fn percent_control(&self) -> f64 {
        percent_control(self.controls.throttle)
    }

    /// Afterburner lit: throttle past full dry power on an engine that has one.
    /// Fuel burn and telemetry go by this.
    pub fn afterburner_engaged(&self) -> bool {
        self.has_afterburner && self.controls.throttle > AFTERBURNER_THROTTLE
    }
}

pub fn percent_control(throttle: f64) -> f64 {
    throttle * 100.0
}
