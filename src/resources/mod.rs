pub mod config;
pub mod environment;

pub use config::{PhysicsConfig, SimulationConfig};
pub use environment::{
    AtmosphereConfig, AtmosphereSample, AtmosphereType, EnvironmentConfig, EnvironmentResource,
    StandardAtmosphere, WindConfig, WindModel,
};

use bevy::prelude::*;

/// Simulated seconds elapsed, advanced by the fixed tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    pub elapsed: f64,
}
