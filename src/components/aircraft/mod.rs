pub mod config;
pub mod controls;
pub mod physics_data;
pub mod state;
pub mod telemetry;

pub use config::{
    parse_record, AircraftCatalog, AircraftData, AircraftSource, ConfigError, StartConfig,
    CATALOG_FIELDS,
};
pub use controls::{AircraftControls, ControlCommand};
pub use physics_data::PhysicsData;
pub use state::{percent_control, AircraftState};
pub use telemetry::TelemetrySnapshot;

use bevy::prelude::*;

/// Marker for an aircraft that hit the ground; it is no longer integrated.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Crashed {
    /// Simulation time of impact (s).
    pub time: f64,
}
