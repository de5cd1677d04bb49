use thiserror::Error;

use crate::components::ConfigError;
use crate::systems::physics::PhysicsError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Physics error: {0}")]
    Physics(#[from] PhysicsError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
