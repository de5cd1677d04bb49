use nalgebra::Vector3;

use super::config::WindConfig;

/// Source of the ambient wind vector (m/s, world frame).
pub trait WindModel {
    fn get_wind(&self, altitude: f64, time: f64) -> Vector3<f64>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CalmWind;

impl WindModel for CalmWind {
    fn get_wind(&self, _altitude: f64, _time: f64) -> Vector3<f64> {
        Vector3::zeros()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConstantWind {
    velocity: Vector3<f64>,
}

impl ConstantWind {
    pub fn new(velocity: Vector3<f64>) -> Self {
        Self { velocity }
    }
}

impl WindModel for ConstantWind {
    fn get_wind(&self, _altitude: f64, _time: f64) -> Vector3<f64> {
        self.velocity
    }
}

/// Wind along +x that strengthens with altitude, with a sinusoidal gust
/// on x and a cosine gust on z.
#[derive(Debug, Clone, Copy)]
pub struct TurbulentWind {
    pub base_speed: f64,
    pub altitude_factor: f64,
    pub turbulence_amplitude: f64,
    pub turbulence_frequency: f64,
}

impl Default for TurbulentWind {
    fn default() -> Self {
        Self {
            base_speed: 2.0,
            altitude_factor: 0.001,
            turbulence_amplitude: 2.0,
            turbulence_frequency: 0.5,
        }
    }
}

impl WindModel for TurbulentWind {
    fn get_wind(&self, altitude: f64, time: f64) -> Vector3<f64> {
        let phase = self.turbulence_frequency * time;
        Vector3::new(
            self.base_speed + self.altitude_factor * altitude + self.turbulence_amplitude * phase.sin(),
            0.0,
            self.turbulence_amplitude * phase.cos(),
        )
    }
}

pub fn build_wind_model(config: &WindConfig) -> Box<dyn WindModel + Send + Sync> {
    match config {
        WindConfig::Calm => Box::new(CalmWind),
        WindConfig::Constant { velocity } => Box::new(ConstantWind::new(*velocity)),
        WindConfig::Turbulent {
            base_speed,
            altitude_factor,
            turbulence_amplitude,
            turbulence_frequency,
        } => Box::new(TurbulentWind {
            base_speed: *base_speed,
            altitude_factor: *altitude_factor,
            turbulence_amplitude: *turbulence_amplitude,
            turbulence_frequency: *turbulence_frequency,
        }),
    }
}
