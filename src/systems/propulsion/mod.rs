mod engine;
mod fuel;

pub use engine::calculate_thrust;
pub use fuel::{fuel_burn_rate, is_flameout, update_aircraft_mass, update_fuel_level};
