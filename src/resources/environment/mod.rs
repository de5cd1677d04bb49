mod atmosphere;
mod config;
mod environment;
mod wind;

pub use atmosphere::{AtmosphereSample, StandardAtmosphere};
pub use config::{AtmosphereConfig, AtmosphereType, EnvironmentConfig, WindConfig};
pub use environment::EnvironmentResource;
pub use wind::{build_wind_model, CalmWind, ConstantWind, TurbulentWind, WindModel};
