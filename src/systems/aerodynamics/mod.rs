mod air_data;
pub mod coefficients;
pub mod forces;

pub use air_data::{aero_inputs, update_physics_data};
pub use forces::{solve_aerodynamics, AeroInputs, AeroSolution, DragBreakdown};
