pub mod aerodynamics;
mod flight;
pub mod physics;
pub mod propulsion;

pub use aerodynamics::{solve_aerodynamics, update_physics_data, AeroInputs, AeroSolution};
pub use flight::{
    advance_position_system, apply_controls_system, crash_detection_system, telemetry_system,
    tick_clock_system, CrashEvent, TelemetryEvent, TelemetryTimer,
};
pub use physics::{flight_physics_system, stage_derivative, update_physics, PhysicsError};
pub use propulsion::{calculate_thrust, update_aircraft_mass, update_fuel_level};
