use bevy::prelude::*;

use crate::resources::{EnvironmentConfig, EnvironmentResource, PhysicsConfig, SimulationClock};
use crate::systems::{
    advance_position_system, apply_controls_system, crash_detection_system,
    flight_physics_system, telemetry_system, tick_clock_system, CrashEvent, TelemetryEvent,
    TelemetryTimer,
};

/// Per-tick stages, run in this order on the fixed schedule.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightPhysicsSet {
    Clock,
    Controls,
    Physics,
    Kinematics,
    Termination,
    Telemetry,
}

/// Flight dynamics on bevy's fixed timestep.
pub struct FlightDynamicsPlugin {
    pub physics: PhysicsConfig,
    pub environment: EnvironmentConfig,
    /// Seconds between telemetry events, 0 disables them.
    pub telemetry_interval: f64,
}

impl Default for FlightDynamicsPlugin {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            environment: EnvironmentConfig::default(),
            telemetry_interval: 0.0,
        }
    }
}

impl FlightDynamicsPlugin {
    pub fn new(physics: PhysicsConfig, environment: EnvironmentConfig) -> Self {
        Self {
            physics,
            environment,
            ..Default::default()
        }
    }

    pub fn with_telemetry(mut self, interval: f64) -> Self {
        self.telemetry_interval = interval;
        self
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.physics.clone())
            .insert_resource(EnvironmentResource::new(&self.environment))
            .insert_resource(TelemetryTimer::new(self.telemetry_interval))
            .init_resource::<SimulationClock>()
            .insert_resource(Time::<Fixed>::from_seconds(self.physics.time_step))
            .add_event::<CrashEvent>()
            .add_event::<TelemetryEvent>();

        app.configure_sets(
            FixedUpdate,
            (
                FlightPhysicsSet::Clock,
                FlightPhysicsSet::Controls,
                FlightPhysicsSet::Physics,
                FlightPhysicsSet::Kinematics,
                FlightPhysicsSet::Termination,
                FlightPhysicsSet::Telemetry,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                tick_clock_system.in_set(FlightPhysicsSet::Clock),
                apply_controls_system.in_set(FlightPhysicsSet::Controls),
                flight_physics_system.in_set(FlightPhysicsSet::Physics),
                advance_position_system.in_set(FlightPhysicsSet::Kinematics),
                crash_detection_system.in_set(FlightPhysicsSet::Termination),
                telemetry_system.in_set(FlightPhysicsSet::Telemetry),
            ),
        );

        info!(
            "Flight dynamics running at {:.1} Hz",
            1.0 / self.physics.time_step
        );
    }
}
