use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("Invalid time step: {0} s")]
    InvalidTimeStep(f64),

    #[error("Non-finite {quantity}")]
    NonFinite { quantity: String },
}
