use bevy::prelude::*;
use nalgebra::Vector3;

use super::acceleration::{stage_derivative, StageContext};
use super::validation::{finite_vector_or_zero, log_limit_violations, validate_time_step};
use crate::components::{AircraftData, AircraftState, Crashed, PhysicsData};
use crate::resources::{EnvironmentResource, PhysicsConfig, SimulationClock};
use crate::systems::aerodynamics::update_physics_data;
use crate::systems::propulsion::{is_flameout, update_aircraft_mass, update_fuel_level};

/// Fixed-step flight physics for every aircraft that has not crashed.
pub fn flight_physics_system(
    mut query: Query<(&AircraftData, &mut AircraftState, &mut PhysicsData), Without<Crashed>>,
    environment: Res<EnvironmentResource>,
    config: Res<PhysicsConfig>,
    clock: Res<SimulationClock>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();

    for (data, mut state, mut physics) in query.iter_mut() {
        update_physics(
            &mut state,
            &mut physics,
            data,
            &environment,
            &config,
            dt,
            clock.elapsed,
        );
    }
}

/// Advances the aircraft velocity by one RK4 step of `delta_time`, then
/// burns fuel.
///
/// The frame cache is rebuilt when its stamp differs from
/// `simulation_time`. A non-positive or non-finite `delta_time` leaves the
/// state untouched.
pub fn update_physics(
    state: &mut AircraftState,
    physics: &mut PhysicsData,
    data: &AircraftData,
    environment: &EnvironmentResource,
    config: &PhysicsConfig,
    delta_time: f64,
    simulation_time: f64,
) {
    if let Err(e) = validate_time_step(delta_time) {
        warn!("Skipping physics update for {}: {}", data.name, e);
        return;
    }

    if !physics.is_valid_within(simulation_time, config.cache_epsilon) {
        update_physics_data(physics, state, data, environment, config, simulation_time);
    }

    let flameout = is_flameout(state, data, delta_time);
    let context = StageContext::new(physics, state, data, config, flameout);

    let velocity = rk4_step(&context, &state.velocity, delta_time);
    update_velocity(state, velocity);
    state.thrust = context.thrust;

    let burned = update_fuel_level(state, data, delta_time);
    update_aircraft_mass(state, data, burned);

    if config.warn_on_limits {
        log_limit_violations(state, data);
    }
}

/// Classic fourth-order Runge-Kutta step of the velocity.
pub fn rk4_step(context: &StageContext, velocity: &Vector3<f64>, dt: f64) -> Vector3<f64> {
    let k1 = finite_vector_or_zero("k1 acceleration", stage_derivative(context, velocity));
    let k2 = finite_vector_or_zero(
        "k2 acceleration",
        stage_derivative(context, &(velocity + k1 * (dt / 2.0))),
    );
    let k3 = finite_vector_or_zero(
        "k3 acceleration",
        stage_derivative(context, &(velocity + k2 * (dt / 2.0))),
    );
    let k4 = finite_vector_or_zero(
        "k4 acceleration",
        stage_derivative(context, &(velocity + k3 * dt)),
    );

    velocity + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (dt / 6.0)
}

/// Stores a new velocity and refreshes the derived angles.
pub fn update_velocity(state: &mut AircraftState, velocity: Vector3<f64>) {
    state.velocity = finite_vector_or_zero("velocity", velocity);
    state.update_kinematics();
}
