pub mod acceleration;
mod error;
pub mod integrator;
pub mod validation;

pub use acceleration::{acceleration, stage_derivative, stage_forces, StageContext, StageForces};
pub use error::PhysicsError;
pub use integrator::{flight_physics_system, rk4_step, update_physics, update_velocity};
pub use validation::{check_limits, validate_time_step, LimitViolation};
