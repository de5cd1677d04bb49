use crate::components::{AircraftData, AircraftState, PhysicsData};
use crate::resources::{EnvironmentResource, PhysicsConfig};
use crate::systems::aerodynamics::forces::{solve_aerodynamics, AeroInputs};
use crate::systems::physics::validation::{finite_or_zero, finite_vector_or_zero};
use crate::systems::propulsion::calculate_thrust;
use crate::utils::math::{
    lift_axis_vector, longitudinal_axis, right_wing_direction, unit_or_zero, up_vector,
};

/// Aerodynamic model inputs that stay constant through one tick, read from
/// a built cache.
pub fn aero_inputs(
    physics: &PhysicsData,
    state: &AircraftState,
    data: &AircraftData,
    config: &PhysicsConfig,
) -> AeroInputs {
    AeroInputs {
        density: physics.air_density,
        sea_level_density: physics.sea_level_density,
        speed_of_sound: physics.speed_of_sound,
        wind: physics.wind,
        up: physics.up,
        orientation: state.orientation,
        mass: state.current_mass,
        gravity: config.gravity,
        wing_area: data.wing_area,
        aspect_ratio: physics.aspect_ratio,
        oswald_efficiency: config.oswald_efficiency,
        cd0: data.cd0,
        alpha: data.alpha,
        kw: data.kw,
        md: data.md,
        max_speed: data.max_speed_ms(),
    }
}

/// Rebuilds the frame cache for `simulation_time`.
///
/// Order: atmosphere, flight parameters, orientation, vectors,
/// aerodynamics, drag, thrust.
pub fn update_physics_data(
    physics: &mut PhysicsData,
    state: &AircraftState,
    data: &AircraftData,
    environment: &EnvironmentResource,
    config: &PhysicsConfig,
    simulation_time: f64,
) {
    let altitude = state.altitude();

    let atmosphere = environment.sample(altitude);
    physics.air_density = finite_or_zero("air density", atmosphere.density);
    physics.sea_level_density = environment.atmosphere().sea_level_density();
    physics.temperature = atmosphere.temperature;
    physics.pressure = atmosphere.pressure;
    physics.speed_of_sound = atmosphere.speed_of_sound;
    physics.wind = finite_vector_or_zero("wind", environment.get_wind(altitude, simulation_time));

    physics.orientation_deg = state.orientation.to_degrees();

    physics.up = up_vector(&state.orientation);
    physics.longitudinal_axis = longitudinal_axis(&state.orientation);
    physics.right_wing = right_wing_direction(&state.orientation, &state.velocity);
    physics.lift_axis = lift_axis_vector(&physics.right_wing, &unit_or_zero(&state.velocity));
    physics.aspect_ratio = data.aspect_ratio();

    let solution = solve_aerodynamics(&aero_inputs(physics, state, data, config), &state.velocity);

    physics.speed = solution.speed;
    physics.true_airspeed = solution.true_airspeed;
    physics.mach = solution.mach;
    physics.dynamic_pressure = solution.dynamic_pressure;
    physics.flight_path_angle = solution.flight_path_angle;
    physics.angle_of_attack = solution.angle_of_attack;
    physics.relative_velocity = solution.relative_velocity;

    physics.lift_coefficient = finite_or_zero("lift coefficient", solution.lift_coefficient);
    physics.lift_force = finite_vector_or_zero("lift force", solution.lift_force);
    physics.lift = physics.lift_force.norm();

    physics.drag_coefficient = solution.drag.coefficient;
    physics.parasitic_drag = solution.drag.parasitic;
    physics.induced_drag = solution.drag.induced;
    physics.wave_drag = solution.drag.wave;
    physics.total_drag = finite_or_zero("drag", solution.drag.total);
    physics.drag_force = finite_vector_or_zero("drag force", solution.drag_force);

    physics.thrust = if state.fuel > 0.0 {
        finite_or_zero(
            "thrust",
            calculate_thrust(
                data.thrust,
                data.afterburner_thrust,
                state.percent_control(),
                physics,
            ),
        )
    } else {
        0.0
    };

    physics.last_simulation_time = Some(simulation_time);
}
