mod aircraft;
mod loader;
mod start;

pub use aircraft::{AircraftData, AircraftSource};
pub use loader::{parse_record, AircraftCatalog, ConfigError, CATALOG_FIELDS};
pub use start::StartConfig;
