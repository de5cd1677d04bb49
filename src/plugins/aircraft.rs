use bevy::prelude::*;

use crate::components::{AircraftControls, AircraftData, AircraftState, PhysicsData, StartConfig};

/// Spawns one jet at startup.
pub struct AircraftPlugin {
    data: AircraftData,
    start: StartConfig,
}

impl AircraftPlugin {
    pub fn new(data: AircraftData, start: StartConfig) -> Self {
        Self { data, start }
    }

    fn setup_aircraft(mut commands: Commands, data: AircraftData, start: StartConfig) {
        info!(
            "Spawning {} at ({:.0}, {:.0}, {:.0})",
            data.name, start.position.x, start.position.y, start.position.z
        );
        commands.spawn(aircraft_bundle(data, &start));
    }
}

/// Components of a simulated aircraft.
pub fn aircraft_bundle(
    data: AircraftData,
    start: &StartConfig,
) -> (AircraftData, AircraftState, AircraftControls, PhysicsData, Name) {
    let state = AircraftState::new(&data, start);
    (
        data.clone(),
        state.clone(),
        state.controls,
        PhysicsData::default(),
        Name::new(data.name),
    )
}

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        let data = self.data.clone();
        let start = self.start.clone();
        app.add_systems(Startup, move |commands: Commands| {
            Self::setup_aircraft(commands, data.clone(), start.clone())
        });
    }
}
