pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const HEAT_CAPACITY_RATIO: f64 = 1.4; // gamma for dry air
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_SEA_LEVEL_SPEED_OF_SOUND: f64 = 340.29; // m/s
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE_ALTITUDE: f64 = 11_000.0; // m
pub const ISA_TROPOPAUSE_TEMP: f64 = 216.65; // K

pub const OSWALD_EFFICIENCY: f64 = 0.8; // typical jet value

// Mach boundaries of the drag regimes
pub const TRANSONIC_MACH: f64 = 0.8;
pub const SUPERSONIC_MACH: f64 = 1.2;

pub const SUBSONIC_DRAG_RISE: f64 = 0.05; // Cd growth towards max speed
pub const RAM_RECOVERY_FACTOR: f64 = 0.3; // thrust gain per unit Mach

// Numerical guards
pub const MIN_SPEED_THRESHOLD: f64 = 1e-6; // m/s
pub const MIN_INDUCED_DRAG_SPEED: f64 = 0.1; // m/s
pub const MIN_VECTOR_NORM: f64 = 1e-6;
pub const MIN_DENSITY: f64 = 1e-9; // kg/m^3
pub const MIN_MASS: f64 = 1e-6; // kg
pub const CACHE_TIME_EPSILON: f64 = 1e-6; // s

// Attitude thresholds used by the lift coefficient branches (rad)
pub const TURN_YAW_THRESHOLD: f64 = 0.01;
pub const TURN_PITCH_THRESHOLD: f64 = 0.01;
pub const CLIMB_ANGLE_THRESHOLD: f64 = 0.01;

pub const MAX_THROTTLE: f64 = 1.01; // > 1.0 engages the afterburner
pub const AFTERBURNER_THROTTLE: f64 = 1.0;
