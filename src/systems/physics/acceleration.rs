use nalgebra::Vector3;

use crate::components::{AircraftData, AircraftState, PhysicsData};
use crate::resources::PhysicsConfig;
use crate::systems::aerodynamics::{aero_inputs, solve_aerodynamics, AeroInputs, AeroSolution};
use crate::utils::constants::MIN_MASS;
use crate::utils::math::longitudinal_axis;

/// Everything an RK4 stage needs besides the stage velocity.
///
/// Atmosphere, wind, attitude and thrust magnitude come from the frame
/// cache and stay fixed for the tick. Airspeed, lift and drag are
/// recomputed from each stage velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct StageContext {
    pub aero: AeroInputs,
    /// N, already zero on flameout.
    pub thrust: f64,
    pub thrust_axis: Vector3<f64>,
}

impl StageContext {
    pub fn new(
        physics: &PhysicsData,
        state: &AircraftState,
        data: &AircraftData,
        config: &PhysicsConfig,
        flameout: bool,
    ) -> Self {
        Self {
            aero: aero_inputs(physics, state, data, config),
            thrust: if flameout { 0.0 } else { physics.thrust },
            thrust_axis: longitudinal_axis(&state.orientation),
        }
    }
}

/// Force breakdown (N) at one velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageForces {
    pub gravity: Vector3<f64>,
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub thrust: Vector3<f64>,
}

impl StageForces {
    pub fn total(&self) -> Vector3<f64> {
        self.gravity + self.lift + self.drag + self.thrust
    }
}

pub fn stage_forces(context: &StageContext, velocity: &Vector3<f64>) -> (StageForces, AeroSolution) {
    let solution = solve_aerodynamics(&context.aero, velocity);
    let forces = StageForces {
        gravity: Vector3::new(0.0, -context.aero.gravity * context.aero.mass, 0.0),
        lift: solution.lift_force,
        drag: solution.drag_force,
        thrust: context.thrust_axis * context.thrust,
    };
    (forces, solution)
}

/// `F / m`, zero for a massless body.
pub fn acceleration(forces: &StageForces, mass: f64) -> Vector3<f64> {
    if mass < MIN_MASS {
        return Vector3::zeros();
    }
    forces.total() / mass
}

/// Acceleration of the aircraft at `velocity`.
pub fn stage_derivative(context: &StageContext, velocity: &Vector3<f64>) -> Vector3<f64> {
    let (forces, _) = stage_forces(context, velocity);
    acceleration(&forces, context.aero.mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::StartConfig;
    use crate::resources::{EnvironmentConfig, EnvironmentResource};
    use crate::systems::aerodynamics::update_physics_data;
    use crate::utils::constants::GRAVITY;
    use approx::assert_relative_eq;

    fn context(throttle: f64, flameout: bool) -> (StageContext, AircraftState) {
        let data = AircraftData::j29f();
        let state = AircraftState::new(
            &data,
            &StartConfig::at(Vector3::new(0.0, 2000.0, 0.0), Vector3::new(180.0, 0.0, 0.0))
                .with_throttle(throttle),
        );
        let config = PhysicsConfig::default();
        let mut physics = PhysicsData::default();
        update_physics_data(
            &mut physics,
            &state,
            &data,
            &EnvironmentResource::new(&EnvironmentConfig::calm()),
            &config,
            0.0,
        );
        (StageContext::new(&physics, &state, &data, &config, flameout), state)
    }

    #[test]
    fn test_gravity_and_thrust_axes() {
        let (ctx, state) = context(1.0, false);
        let (forces, _) = stage_forces(&ctx, &state.velocity);

        assert_relative_eq!(forces.gravity.y, -GRAVITY * state.current_mass);
        assert!(forces.thrust.x > 0.0);
        assert_relative_eq!(forces.thrust.norm(), ctx.thrust, max_relative = 1e-12);
    }

    #[test]
    fn test_level_flight_has_no_vertical_acceleration() {
        let (ctx, state) = context(1.0, false);
        let a = stage_derivative(&ctx, &state.velocity);
        assert_relative_eq!(a.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flameout_removes_thrust() {
        let (ctx, state) = context(1.0, true);
        let (forces, _) = stage_forces(&ctx, &state.velocity);
        assert_eq!(forces.thrust, Vector3::zeros());
        assert!(stage_derivative(&ctx, &state.velocity).x < 0.0);
    }

    #[test]
    fn test_zero_mass_guard() {
        let forces = StageForces {
            gravity: Vector3::new(0.0, -1.0, 0.0),
            lift: Vector3::zeros(),
            drag: Vector3::zeros(),
            thrust: Vector3::zeros(),
        };
        assert_eq!(acceleration(&forces, 0.0), Vector3::zeros());
    }
}
