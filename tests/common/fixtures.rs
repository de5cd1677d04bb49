use jetsim::{
    components::{AircraftData, AircraftState, PhysicsData, StartConfig},
    resources::{EnvironmentConfig, EnvironmentResource, PhysicsConfig},
};
use nalgebra::Vector3;
use std::path::PathBuf;

/// Bundled aircraft catalog
pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/aircraft_data.txt")
}

/// Bundled simulation config
pub fn config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/simulation.yaml")
}

/// Start in level flight along +x
pub fn level_start(altitude: f64, speed: f64) -> StartConfig {
    StartConfig::at(
        Vector3::new(0.0, altitude, 0.0),
        Vector3::new(speed, 0.0, 0.0),
    )
}

/// Everything `update_physics` needs, for one aircraft in still air
pub struct PhysicsFixture {
    pub data: AircraftData,
    pub state: AircraftState,
    pub physics: PhysicsData,
    pub environment: EnvironmentResource,
    pub config: PhysicsConfig,
}

impl PhysicsFixture {
    pub fn new(data: AircraftData, start: StartConfig) -> Self {
        Self {
            state: AircraftState::new(&data, &start),
            data,
            physics: PhysicsData::default(),
            environment: EnvironmentResource::new(&EnvironmentConfig::calm()),
            config: PhysicsConfig::default(),
        }
    }

    pub fn j29f(start: StartConfig) -> Self {
        Self::new(AircraftData::j29f(), start)
    }

    pub fn tick(&mut self, delta_time: f64, simulation_time: f64) {
        jetsim::systems::update_physics(
            &mut self.state,
            &mut self.physics,
            &self.data,
            &self.environment,
            &self.config,
            delta_time,
            simulation_time,
        );
    }

    pub fn rebuild_cache(&mut self, simulation_time: f64) {
        jetsim::systems::update_physics_data(
            &mut self.physics,
            &self.state,
            &self.data,
            &self.environment,
            &self.config,
            simulation_time,
        );
    }
}
