use jetsim::components::{AircraftData, AircraftState, PhysicsData};
use nalgebra::Vector3;

#[track_caller]
pub fn assert_vector_finite(v: &Vector3<f64>, label: &str) {
    assert!(v.x.is_finite(), "{} x is not finite", label);
    assert!(v.y.is_finite(), "{} y is not finite", label);
    assert!(v.z.is_finite(), "{} z is not finite", label);
}

/// Assert that an aircraft state is physically consistent
#[track_caller]
pub fn assert_state_valid(state: &AircraftState, data: &AircraftData) {
    assert_vector_finite(&state.position, "Position");
    assert_vector_finite(&state.velocity, "Velocity");

    assert!(state.fuel >= 0.0, "Fuel went negative: {}", state.fuel);
    assert!(
        state.fuel <= data.fuel_capacity,
        "Fuel {} exceeds capacity {}",
        state.fuel,
        data.fuel_capacity
    );
    assert!(
        state.current_mass >= data.mass,
        "Mass {} below empty mass {}",
        state.current_mass,
        data.mass
    );
    assert!(state.thrust >= 0.0, "Negative thrust: {}", state.thrust);
    assert!(state.angle_of_attack.is_finite(), "Angle of attack is not finite");
}

/// Assert that a built frame cache holds usable numbers
#[track_caller]
pub fn assert_physics_data_valid(physics: &PhysicsData) {
    assert!(physics.last_simulation_time.is_some(), "Cache was never built");
    assert!(physics.air_density > 0.0, "Air density must be positive");
    assert!(physics.speed_of_sound > 0.0, "Speed of sound must be positive");
    assert!(physics.mach >= 0.0, "Mach must not be negative");
    assert!(physics.total_drag >= 0.0, "Drag must not be negative");
    assert!(physics.thrust >= 0.0, "Thrust must not be negative");

    assert_vector_finite(&physics.wind, "Wind");
    assert_vector_finite(&physics.lift_force, "Lift force");
    assert_vector_finite(&physics.drag_force, "Drag force");
}
