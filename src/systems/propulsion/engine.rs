use crate::components::PhysicsData;
use crate::utils::constants::{MIN_DENSITY, RAM_RECOVERY_FACTOR};

/// Engine thrust (N) for the current throttle setting and air data.
///
/// A `percent_control` above 100 selects the afterburner rating (or the dry
/// rating when the engine has no afterburner) and is then clamped to 100.
/// The rated value is derated by `rho / rho0`, scaled by the throttle and
/// by the ram recovery `1 + 0.3 M`, and never exceeds the selected rating.
pub fn calculate_thrust(
    thrust: f64,
    afterburner_thrust: f64,
    percent_control: f64,
    physics: &PhysicsData,
) -> f64 {
    if physics.sea_level_density < MIN_DENSITY {
        return 0.0;
    }

    let mut percent = percent_control.max(0.0);
    let rated = if percent > 100.0 {
        percent = 100.0;
        if afterburner_thrust > 0.0 {
            afterburner_thrust
        } else {
            thrust
        }
    } else {
        thrust
    };

    let density_ratio = physics.air_density / physics.sea_level_density;
    let ram_recovery = 1.0 + RAM_RECOVERY_FACTOR * physics.mach;

    (rated * density_ratio * (percent / 100.0) * ram_recovery)
        .min(rated)
        .max(0.0)
}
