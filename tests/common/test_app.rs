use bevy::{prelude::*, time::TimeUpdateStrategy};
use jetsim::{
    components::{AircraftData, StartConfig},
    plugins::{AircraftPlugin, FlightDynamicsPlugin},
    resources::{EnvironmentConfig, PhysicsConfig, SimulationClock},
};
use std::time::Duration;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    aircraft: Vec<(AircraftData, StartConfig)>,
    physics_config: Option<PhysicsConfig>,
    environment_config: Option<EnvironmentConfig>,
    telemetry_interval: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            aircraft: Vec::new(),
            physics_config: None,
            environment_config: None,
            telemetry_interval: 0.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, data: AircraftData, start: StartConfig) -> Self {
        self.aircraft.push((data, start));
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn with_environment(mut self, config: EnvironmentConfig) -> Self {
        self.environment_config = Some(config);
        self
    }

    pub fn with_telemetry(mut self, interval: f64) -> Self {
        self.telemetry_interval = interval;
        self
    }

    pub fn build(self) -> TestApp {
        let physics = self.physics_config.unwrap_or_default();
        let environment = self
            .environment_config
            .unwrap_or_else(EnvironmentConfig::calm);
        let time_step = physics.time_step;

        let mut app = App::new();

        // One fixed tick per update
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                time_step,
            )))
            .add_plugins(
                FlightDynamicsPlugin::new(physics, environment)
                    .with_telemetry(self.telemetry_interval),
            );

        for (data, start) in self.aircraft {
            app.add_plugins(AircraftPlugin::new(data, start));
        }

        TestApp { app, time_step }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub time_step: f64,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn elapsed(&self) -> f64 {
        self.app.world().resource::<SimulationClock>().elapsed
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }
}
