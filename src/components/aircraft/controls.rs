use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::constants::{AFTERBURNER_THROTTLE, MAX_THROTTLE};
use crate::utils::math::Orientation;

/// Step inputs of the keyboard control scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlCommand {
    PitchDown,
    PitchUp,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
    ThrottleUp,
    ThrottleDown,
}

impl ControlCommand {
    /// Keyboard binding: w/s pitch, a/d yaw, q/e roll,
    /// z/x throttle.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::PitchDown),
            's' => Some(Self::PitchUp),
            'a' => Some(Self::YawLeft),
            'd' => Some(Self::YawRight),
            'q' => Some(Self::RollLeft),
            'e' => Some(Self::RollRight),
            'z' => Some(Self::ThrottleUp),
            'x' => Some(Self::ThrottleDown),
            _ => None,
        }
    }
}

/// Pilot inputs. Attitude deflections are absolute angles (rad) that the
/// flight model adopts as the aircraft orientation each tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftControls {
    /// 0.0 to 1.01, above 1.0 requests the afterburner.
    pub throttle: f64,
    /// Afterburner requested. Whether it lights depends on the engine, see
    /// [`AircraftState::afterburner_engaged`](crate::components::AircraftState::afterburner_engaged).
    pub afterburner: bool,
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
    /// Attitude change per command (rad).
    pub sensitivity: f64,
    pub throttle_step: f64,
}

impl Default for AircraftControls {
    fn default() -> Self {
        Self {
            throttle: 1.0,
            afterburner: false,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            sensitivity: 0.02,
            throttle_step: 0.01,
        }
    }
}

impl AircraftControls {
    pub fn new(throttle: f64, orientation: Orientation) -> Self {
        let mut controls = Self {
            yaw: orientation.yaw,
            pitch: orientation.pitch,
            roll: orientation.roll,
            ..Default::default()
        };
        controls.set_throttle(throttle);
        controls
    }

    pub fn adjust(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::PitchDown => self.pitch -= self.sensitivity,
            ControlCommand::PitchUp => self.pitch += self.sensitivity,
            ControlCommand::YawLeft => self.yaw -= self.sensitivity,
            ControlCommand::YawRight => self.yaw += self.sensitivity,
            ControlCommand::RollLeft => self.roll -= self.sensitivity,
            ControlCommand::RollRight => self.roll += self.sensitivity,
            ControlCommand::ThrottleUp => self.set_throttle(self.throttle + self.throttle_step),
            ControlCommand::ThrottleDown => self.set_throttle(self.throttle - self.throttle_step),
        }
    }

    /// Clamps to `[0, 1.01]` and updates the afterburner flag.
    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = throttle.clamp(0.0, MAX_THROTTLE);
        self.afterburner = self.throttle > AFTERBURNER_THROTTLE;
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::new(self.yaw, self.pitch, self.roll)
    }
}
