pub mod aircraft;

pub use aircraft::{
    percent_control, AircraftCatalog, AircraftControls, AircraftData, AircraftSource,
    AircraftState, ConfigError, ControlCommand, Crashed, PhysicsData, StartConfig,
    TelemetrySnapshot,
};
