use nalgebra::Vector3;

use super::coefficients::{
    drag_coefficient, dynamic_pressure, induced_drag, lift_coefficient, mach_number,
    parasitic_drag, true_airspeed, wave_drag,
};
use crate::utils::constants::MIN_VECTOR_NORM;
use crate::utils::math::{flight_path_angle, longitudinal_axis, unit_or_zero, Orientation};

/// Direction of lift: perpendicular to the velocity, in the plane of the
/// velocity and the aircraft up vector.
pub fn lift_direction(velocity: &Vector3<f64>, up: &Vector3<f64>) -> Vector3<f64> {
    let side = velocity.cross(up);
    let side = if side.norm() < MIN_VECTOR_NORM {
        Vector3::z()
    } else {
        side
    };

    let direction = side.cross(velocity);
    let norm = direction.norm();
    if norm < MIN_VECTOR_NORM {
        Vector3::y()
    } else {
        direction / norm
    }
}

pub fn lift_force(
    density: f64,
    true_airspeed: f64,
    wing_area: f64,
    lift_coefficient: f64,
    velocity: &Vector3<f64>,
    up: &Vector3<f64>,
) -> Vector3<f64> {
    let magnitude = dynamic_pressure(density, true_airspeed) * wing_area * lift_coefficient;
    lift_direction(velocity, up) * magnitude
}

/// Air-relative velocity: true airspeed along the nose, minus wind.
pub fn relative_velocity(
    true_airspeed: f64,
    orientation: &Orientation,
    wind: &Vector3<f64>,
) -> Vector3<f64> {
    longitudinal_axis(orientation) * true_airspeed - wind
}

/// Unit vector opposing the air-relative velocity, zero when there is none.
pub fn drag_direction(relative_velocity: &Vector3<f64>) -> Vector3<f64> {
    -unit_or_zero(relative_velocity)
}

/// Frame-constant inputs of the aerodynamic model.
#[derive(Debug, Clone, PartialEq)]
pub struct AeroInputs {
    pub density: f64,
    pub sea_level_density: f64,
    pub speed_of_sound: f64,
    pub wind: Vector3<f64>,
    pub up: Vector3<f64>,
    pub orientation: Orientation,
    pub mass: f64,
    pub gravity: f64,
    pub wing_area: f64,
    pub aspect_ratio: f64,
    pub oswald_efficiency: f64,
    pub cd0: f64,
    pub alpha: f64,
    pub kw: f64,
    pub md: f64,
    /// m/s
    pub max_speed: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragBreakdown {
    pub coefficient: f64,
    pub parasitic: f64,
    pub induced: f64,
    pub wave: f64,
    pub total: f64,
}

/// Aerodynamic state for one velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct AeroSolution {
    pub speed: f64,
    pub true_airspeed: f64,
    pub mach: f64,
    pub dynamic_pressure: f64,
    pub flight_path_angle: f64,
    pub angle_of_attack: f64,
    pub lift_coefficient: f64,
    pub lift: f64,
    pub lift_force: Vector3<f64>,
    pub relative_velocity: Vector3<f64>,
    pub drag: DragBreakdown,
    pub drag_force: Vector3<f64>,
}

pub fn solve_aerodynamics(inputs: &AeroInputs, velocity: &Vector3<f64>) -> AeroSolution {
    let speed = velocity.norm();
    let tas = true_airspeed(speed, inputs.density, inputs.sea_level_density);
    let mach = mach_number(tas, inputs.speed_of_sound);
    let q = dynamic_pressure(inputs.density, tas);
    let gamma = flight_path_angle(velocity);

    let cl = lift_coefficient(
        inputs.mass,
        inputs.gravity,
        inputs.density,
        tas,
        inputs.wing_area,
        &inputs.orientation,
        gamma,
    );
    let lift_force = lift_force(
        inputs.density,
        tas,
        inputs.wing_area,
        cl,
        velocity,
        &inputs.up,
    );

    let cd = drag_coefficient(
        inputs.cd0,
        mach,
        tas,
        inputs.max_speed,
        inputs.alpha,
        inputs.kw,
        inputs.md,
    );
    let parasitic = parasitic_drag(cd, inputs.density, tas, inputs.wing_area);
    let induced = induced_drag(
        cl,
        inputs.aspect_ratio,
        inputs.oswald_efficiency,
        inputs.density,
        tas,
        inputs.wing_area,
    );
    let wave = wave_drag(q, inputs.wing_area, inputs.cd0, inputs.kw, mach, inputs.md);
    let drag = DragBreakdown {
        coefficient: cd,
        parasitic,
        induced,
        wave,
        total: parasitic + induced + wave,
    };

    let relative_velocity = relative_velocity(tas, &inputs.orientation, &inputs.wind);
    let drag_force = drag_direction(&relative_velocity) * drag.total;

    AeroSolution {
        speed,
        true_airspeed: tas,
        mach,
        dynamic_pressure: q,
        flight_path_angle: gamma,
        angle_of_attack: if speed < MIN_VECTOR_NORM {
            0.0
        } else {
            inputs.orientation.pitch - gamma
        },
        lift_coefficient: cl,
        lift: lift_force.norm(),
        lift_force,
        relative_velocity,
        drag,
        drag_force,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{GRAVITY, OSWALD_EFFICIENCY};
    use approx::assert_relative_eq;

    fn inputs() -> AeroInputs {
        AeroInputs {
            density: 1.225,
            sea_level_density: 1.225,
            speed_of_sound: 340.29,
            wind: Vector3::zeros(),
            up: Vector3::y(),
            orientation: Orientation::default(),
            mass: 8000.0,
            gravity: GRAVITY,
            wing_area: 24.15,
            aspect_ratio: 5.0,
            oswald_efficiency: OSWALD_EFFICIENCY,
            cd0: 0.02,
            alpha: 0.2,
            kw: 0.12,
            md: 0.86,
            max_speed: 300.0,
        }
    }

    #[test]
    fn test_lift_points_up_in_level_flight() {
        let direction = lift_direction(&Vector3::new(200.0, 0.0, 0.0), &Vector3::y());
        assert_relative_eq!(direction, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_lift_direction_fallbacks() {
        // Velocity parallel to up: intermediate falls back to +z
        let vertical = lift_direction(&Vector3::new(0.0, 50.0, 0.0), &Vector3::y());
        assert_relative_eq!(vertical.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(vertical.dot(&Vector3::new(0.0, 1.0, 0.0)), 0.0, epsilon = 1e-12);

        // No velocity at all: world up
        assert_eq!(lift_direction(&Vector3::zeros(), &Vector3::y()), Vector3::y());
    }

    #[test]
    fn test_drag_opposes_relative_velocity() {
        let wind = Vector3::new(0.0, 0.0, 10.0);
        let relative = relative_velocity(100.0, &Orientation::default(), &wind);
        assert_eq!(relative, Vector3::new(100.0, 0.0, -10.0));

        let direction = drag_direction(&relative);
        assert_relative_eq!(direction, -relative.normalize());
        assert_eq!(drag_direction(&Vector3::zeros()), Vector3::zeros());
    }

    #[test]
    fn test_level_flight_solution() {
        let solution = solve_aerodynamics(&inputs(), &Vector3::new(200.0, 0.0, 0.0));

        assert_relative_eq!(solution.lift, 8000.0 * GRAVITY, max_relative = 1e-12);
        assert_relative_eq!(solution.lift_force.x, 0.0, epsilon = 1e-9);
        assert!(solution.drag_force.x < 0.0);
        assert_eq!(solution.drag.wave, 0.0);
        assert_relative_eq!(
            solution.drag.total,
            solution.drag.parasitic + solution.drag.induced
        );
    }

    #[test]
    fn test_stationary_solution_is_finite() {
        let solution = solve_aerodynamics(&inputs(), &Vector3::zeros());
        assert_eq!(solution.lift, 0.0);
        assert_eq!(solution.drag.total, 0.0);
        assert_eq!(solution.drag_force, Vector3::zeros());
        assert_eq!(solution.angle_of_attack, 0.0);
    }
}
