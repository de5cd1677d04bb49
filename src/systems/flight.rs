use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AircraftControls, AircraftState, Crashed, PhysicsData, TelemetrySnapshot};
use crate::resources::SimulationClock;

/// Sent once when an aircraft reaches the ground.
#[derive(Event, Debug, Clone)]
pub struct CrashEvent {
    pub entity: Entity,
    pub name: String,
    pub time: f64,
    pub position: Vector3<f64>,
    /// m/s at impact
    pub speed: f64,
}

/// Sent every telemetry interval for every flying aircraft.
#[derive(Event, Debug, Clone)]
pub struct TelemetryEvent(pub TelemetrySnapshot);

/// Seconds between telemetry events, 0 disables them.
#[derive(Resource, Debug, Clone, Copy)]
pub struct TelemetryTimer {
    pub interval: f64,
    pub next: f64,
}

impl TelemetryTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            next: 0.0,
        }
    }
}

pub fn tick_clock_system(time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    clock.elapsed += time.delta_secs_f64();
}

pub fn apply_controls_system(
    mut query: Query<(&AircraftControls, &mut AircraftState), Without<Crashed>>,
) {
    for (controls, mut state) in query.iter_mut() {
        state.apply_controls(controls);
    }
}

pub fn advance_position_system(
    mut query: Query<&mut AircraftState, Without<Crashed>>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();
    for mut state in query.iter_mut() {
        state.advance_position(dt);
    }
}

/// Grounds any aircraft at or below zero altitude.
pub fn crash_detection_system(
    mut commands: Commands,
    query: Query<(Entity, &Name, &AircraftState), Without<Crashed>>,
    clock: Res<SimulationClock>,
    mut crashes: EventWriter<CrashEvent>,
) {
    for (entity, name, state) in query.iter() {
        if state.altitude() > 0.0 {
            continue;
        }

        error!(
            "{} crashed at t={:.2}s, {:.0} m/s at ({:.0}, {:.0})",
            name,
            clock.elapsed,
            state.speed(),
            state.position.x,
            state.position.z
        );
        commands.entity(entity).insert(Crashed {
            time: clock.elapsed,
        });
        crashes.send(CrashEvent {
            entity,
            name: name.to_string(),
            time: clock.elapsed,
            position: state.position,
            speed: state.speed(),
        });
    }
}

pub fn telemetry_system(
    query: Query<(&Name, &AircraftState, &PhysicsData), Without<Crashed>>,
    clock: Res<SimulationClock>,
    mut timer: ResMut<TelemetryTimer>,
    mut events: EventWriter<TelemetryEvent>,
) {
    if timer.interval <= 0.0 || clock.elapsed + 1e-9 < timer.next {
        return;
    }
    timer.next += timer.interval;

    for (name, state, physics) in query.iter() {
        events.send(TelemetryEvent(TelemetrySnapshot::capture(
            name.as_str(),
            clock.elapsed,
            state,
            physics,
        )));
    }
}
