mod aircraft;
mod flight_dynamics;

pub use aircraft::{aircraft_bundle, AircraftPlugin};
pub use flight_dynamics::{FlightDynamicsPlugin, FlightPhysicsSet};
