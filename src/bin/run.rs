use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy};
use std::{env, time::Duration};

use jetsim::{
    components::AircraftData,
    plugins::{AircraftPlugin, FlightDynamicsPlugin},
    resources::{SimulationClock, SimulationConfig},
    systems::{CrashEvent, TelemetryEvent},
    SimError,
};

/// Flies one aircraft headless and prints telemetry as JSON lines.
///
/// Usage: `jetsim_run [config.yaml]`
fn main() -> Result<(), SimError> {
    let config = match env::args().nth(1) {
        Some(path) => SimulationConfig::load(&path)?,
        None => SimulationConfig::default(),
    };
    config.validate()?;
    let data = AircraftData::new(config.aircraft.clone())?;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            config.physics.time_step,
        )))
        .add_plugins(
            FlightDynamicsPlugin::new(config.physics.clone(), config.environment.clone())
                .with_telemetry(config.telemetry_interval),
        )
        .add_plugins(AircraftPlugin::new(data, config.start.clone()));

    info!(
        "Running {} s at {} s per tick",
        config.duration, config.physics.time_step
    );

    loop {
        app.update();

        let world = app.world_mut();
        for TelemetryEvent(snapshot) in world.resource_mut::<Events<TelemetryEvent>>().drain() {
            println!("{}", snapshot.to_json_line()?);
        }

        let crashes: Vec<CrashEvent> = world.resource_mut::<Events<CrashEvent>>().drain().collect();
        if let Some(crash) = crashes.first() {
            info!(
                "{} down after {:.2} s at {:.0} m/s",
                crash.name, crash.time, crash.speed
            );
            break;
        }

        if world.resource::<SimulationClock>().elapsed >= config.duration {
            break;
        }
    }

    Ok(())
}
