use bevy::prelude::*;

use crate::components::{AircraftData, AircraftState};

/// Fuel flow (kg/s): the fixed afterburner burn when lit, otherwise the dry
/// burn scaled by throttle.
pub fn fuel_burn_rate(state: &AircraftState, data: &AircraftData) -> f64 {
    if state.afterburner_engaged() {
        data.afterburner_fuel_burn
    } else {
        data.fuel_burn * state.controls.throttle.clamp(0.0, 1.0)
    }
}

/// True when the engine has no fuel for this tick: the tank is empty or
/// the burn over `delta_time` would empty it.
pub fn is_flameout(state: &AircraftState, data: &AircraftData, delta_time: f64) -> bool {
    if state.fuel <= 0.0 {
        return true;
    }
    let burn = fuel_burn_rate(state, data) * delta_time;
    burn > 0.0 && burn >= state.fuel
}

/// Burns fuel for `delta_time` and returns the mass burned (kg).
pub fn update_fuel_level(state: &mut AircraftState, data: &AircraftData, delta_time: f64) -> f64 {
    if state.fuel <= 0.0 {
        state.fuel = 0.0;
        return 0.0;
    }

    let requested = fuel_burn_rate(state, data) * delta_time.max(0.0);
    let burned = requested.min(state.fuel);
    state.fuel -= burned;

    if state.fuel <= 0.0 {
        state.fuel = 0.0;
        warn!("{} is out of fuel, engine flamed out", data.name);
    }
    burned
}

/// Removes `burned` kg from the aircraft, never going below empty mass.
pub fn update_aircraft_mass(state: &mut AircraftState, data: &AircraftData, burned: f64) {
    state.current_mass = (state.current_mass - burned).max(data.mass);
    if state.fuel <= 0.0 {
        state.current_mass = data.mass;
    }
}
