#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_physics_data_valid, assert_state_valid, assert_vector_finite};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
