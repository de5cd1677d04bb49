use std::path::Path;
use std::str::FromStr;

use bevy::prelude::*;
use thiserror::Error;

use crate::components::aircraft::config::aircraft::AircraftData;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Line {line}: expected {expected} fields, found {found}")]
    MissingField {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: invalid value {value:?} for field `{field}`")]
    ParseError {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("Aircraft `{0}` not found in catalog")]
    UnknownAircraft(String),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

const DELIMITER: char = '|';

/// Field names of a catalog record, in file order.
pub const CATALOG_FIELDS: [&str; 18] = [
    "name",
    "mass",
    "wingArea",
    "wingSpan",
    "sweepAngle",
    "thrust",
    "afterburnerThrust",
    "maxSpeed",
    "stallSpeed",
    "serviceCeiling",
    "fuelCapacity",
    "cd0",
    "maxAoA",
    "fuelBurn",
    "afterburnerFuelBurn",
    "alpha",
    "kw",
    "Md",
];

fn is_header(line: &str) -> bool {
    line.starts_with('#') || line.contains("name|")
}

fn parse_field<T: FromStr>(
    tokens: &[&str],
    index: usize,
    line: usize,
) -> Result<T, ConfigError> {
    let raw = tokens[index].trim();
    raw.parse::<T>().map_err(|_| ConfigError::ParseError {
        line,
        field: CATALOG_FIELDS[index],
        value: raw.to_string(),
    })
}

/// Parses one pipe-delimited record. `line` is only used for error reports.
pub fn parse_record(record: &str, line: usize) -> Result<AircraftData, ConfigError> {
    let tokens: Vec<&str> = record.split(DELIMITER).collect();
    if tokens.len() < CATALOG_FIELDS.len() {
        return Err(ConfigError::MissingField {
            line,
            expected: CATALOG_FIELDS.len(),
            found: tokens.len(),
        });
    }

    Ok(AircraftData {
        name: tokens[0].trim().to_string(),
        mass: parse_field(&tokens, 1, line)?,
        wing_area: parse_field(&tokens, 2, line)?,
        wing_span: parse_field(&tokens, 3, line)?,
        sweep_angle: parse_field(&tokens, 4, line)?,
        thrust: parse_field(&tokens, 5, line)?,
        afterburner_thrust: parse_field(&tokens, 6, line)?,
        max_speed: parse_field(&tokens, 7, line)?,
        stall_speed: parse_field(&tokens, 8, line)?,
        service_ceiling: parse_field(&tokens, 9, line)?,
        fuel_capacity: parse_field(&tokens, 10, line)?,
        cd0: parse_field(&tokens, 11, line)?,
        max_aoa: parse_field(&tokens, 12, line)?,
        fuel_burn: parse_field(&tokens, 13, line)?,
        afterburner_fuel_burn: parse_field(&tokens, 14, line)?,
        alpha: parse_field(&tokens, 15, line)?,
        kw: parse_field(&tokens, 16, line)?,
        md: parse_field(&tokens, 17, line)?,
    })
}

/// All aircraft of a pipe-delimited data file.
#[derive(Debug, Clone, Default)]
pub struct AircraftCatalog {
    aircraft: Vec<AircraftData>,
}

impl AircraftCatalog {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::parse(&contents)?;
        debug!(
            "Loaded {} aircraft from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// The first line is dropped when it is a header or comment. Blank and
    /// `#` lines are ignored everywhere.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut aircraft = Vec::new();

        for (index, raw_line) in contents.lines().enumerate() {
            let line = raw_line.trim_end_matches('\r');
            if index == 0 && is_header(line) {
                continue;
            }
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            aircraft.push(parse_record(line, index + 1)?);
        }

        Ok(Self { aircraft })
    }

    pub fn names(&self) -> Vec<&str> {
        self.aircraft.iter().map(|a| a.name.as_str()).collect()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Result<&AircraftData, ConfigError> {
        self.aircraft
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| ConfigError::UnknownAircraft(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AircraftData> {
        self.aircraft.iter()
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }
}
