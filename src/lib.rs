pub mod components;
pub mod plugins;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod utils;

pub use components::{AircraftData, AircraftSource, AircraftState, PhysicsData, StartConfig};
pub use plugins::{AircraftPlugin, FlightDynamicsPlugin, FlightPhysicsSet};
pub use resources::{EnvironmentConfig, PhysicsConfig, SimulationConfig};
pub use simulation::FlightSimulation;
pub use utils::errors::SimError;
