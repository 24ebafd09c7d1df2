//! Simulation constants and tuning parameters.

/// Speed of light (m/s), for wavelength = c / frequency.
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Speed of sound at sea level (m/s), for Mach conversion.
pub const MACH_M_S: f64 = 340.29;

/// Gravitational acceleration used in turn-rate limits (m/s²).
pub const G_ACCEL_M_S2: f64 = 9.8;

// --- Engagement timing ---

/// Default simulation time step (seconds).
pub const DEFAULT_TIME_STEP_SECS: f64 = 1.0;

/// Hard cap on simulated engagement time (seconds).
pub const SIM_TIME_CAP_SECS: f64 = 600.0;

// --- Guidance ---

/// Structural g-limit for missiles.
pub const MISSILE_G_LIMIT: f64 = 30.0;

/// Structural g-limit for fighters.
pub const FIGHTER_G_LIMIT: f64 = 6.0;

/// Half-width of the bounded random heading perturbation applied to a
/// missile whose launching side has lost track of its target (radians).
pub const DATALINK_LOSS_PERTURBATION_RAD: f64 = 0.2;

/// Floating-point slack allowed when asserting the turn-rate clamp.
pub const TURN_RATE_EPSILON: f64 = 1e-9;

// --- Radar ---

/// Default number of precomputed detection-range azimuth buckets per site.
pub const DEFAULT_NUM_AZIMUTHS: usize = 360;

/// Nose/tail aspect bucket half-width (degrees).
pub const ASPECT_BUCKET_HALF_WIDTH_DEG: f64 = 30.0;

/// Ray-march range limit as a multiple of the free-space detection range.
pub const RAY_MARCH_RANGE_FACTOR: f64 = 1.5;

/// Rain rate below which a sample is treated as clear air (mm/h).
pub const RAIN_NOISE_FLOOR_MM_HR: f64 = 0.05;

// --- Precipitation defaults ---

/// Default rain-rate cap (mm/h).
pub const DEFAULT_MAX_RAIN_RATE_MM_HR: f64 = 100.0;

/// Default precipitation field resolution (cells per kilometer).
pub const DEFAULT_CELLS_PER_KM: f64 = 1.0;
