//! Scenario definition input: static platform specs and engagement options.
//!
//! Specs deserialize from JSON, are validated once with [`ScenarioSpec::validate`],
//! and are then held immutable for the life of the engagement.

use serde::{Deserialize, Serialize};

use crate::components::RcsProfile;
use crate::constants::*;
use crate::enums::{FluctuationModel, IntegrationMode};
use crate::error::ConfigError;
use crate::types::Position;

/// Immutable configuration for one ground radar site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarSiteSpec {
    /// Operating frequency (GHz).
    pub frequency_ghz: f64,
    /// Antenna gain (dB).
    pub antenna_gain_db: f64,
    /// Transmit power (W).
    pub transmit_power_w: f64,
    /// Receiver noise floor (dB).
    pub noise_floor_db: f64,
    /// Desired probability of detection, in (0, 1).
    pub desired_pd: f64,
    /// Probability of false alarm, in (0, 1).
    pub probability_fa: f64,
    /// Target fluctuation model for the minimum-SNR requirement.
    #[serde(default)]
    pub fluctuation: FluctuationModel,
    /// Pulse integration mode.
    #[serde(default)]
    pub integration: IntegrationMode,
    /// Number of integrated pulses per detection opportunity.
    #[serde(default = "default_num_pulses")]
    pub num_pulses: u32,
    /// Calibrated detection range against a 1 m² reference target with no
    /// pulse integration (km).
    pub reference_range_km: f64,
    /// Number of precomputed detection-range azimuth buckets.
    #[serde(default = "default_num_azimuths")]
    pub num_azimuths: usize,

    // --- Weapon fit ---
    /// Maximum effective engagement range (km).
    pub max_effective_range_km: f64,
    /// Time a target must be held in track before launch (seconds).
    pub acquisition_time_secs: f64,
    /// Minimum interval between interceptor launches (seconds).
    pub launch_interval_secs: f64,
    /// Interceptor inventory.
    pub interceptor_count: u32,
    /// Interceptor speed (m/s).
    pub interceptor_speed_m_s: f64,
    /// Interceptor maximum flight range (km).
    pub interceptor_max_range_km: f64,
    /// Interceptor warhead lethal radius (km).
    pub interceptor_kill_radius_km: f64,

    /// Site position (km).
    pub position: Position,
}

fn default_num_pulses() -> u32 {
    1
}

fn default_num_azimuths() -> usize {
    DEFAULT_NUM_AZIMUTHS
}

impl RadarSiteSpec {
    /// Radar wavelength (m), always derived from the operating frequency.
    pub fn wavelength_m(&self) -> f64 {
        SPEED_OF_LIGHT_M_S / (self.frequency_ghz * 1.0e9)
    }
}

/// Immutable configuration for one fighter aircraft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterSpec {
    /// Aspect-dependent radar cross section profile.
    pub rcs: RcsProfile,
    /// Cruise speed (Mach).
    pub speed_mach: f64,
    /// Air-to-ground missile inventory.
    pub weapon_count: u32,
    /// Air-to-ground weapon range (km).
    pub weapon_range_km: f64,
    /// Air-to-ground weapon speed (m/s).
    pub weapon_speed_m_s: f64,
    /// Air-to-ground warhead lethal radius (km).
    pub weapon_kill_radius_km: f64,
    /// Whether the fighter flies evasively once the engagement starts.
    #[serde(default)]
    pub evasive: bool,
    /// Initial position (km).
    pub position: Position,
    /// Initial heading (degrees, 0 = North, clockwise).
    pub heading_deg: f64,
}

/// Optional precipitation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecipitationConfig {
    pub enabled: bool,
    /// Rain-rate cap applied to every field sample (mm/h).
    #[serde(default = "default_max_rain_rate")]
    pub max_rain_rate_mm_hr: f64,
    /// Field resolution (cells per km).
    #[serde(default = "default_cells_per_km")]
    pub cells_per_km: f64,
}

fn default_max_rain_rate() -> f64 {
    DEFAULT_MAX_RAIN_RATE_MM_HR
}

fn default_cells_per_km() -> f64 {
    DEFAULT_CELLS_PER_KM
}

/// Complete scenario definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// RNG seed for determinism. Same seed = same engagement.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Simulation time step (seconds).
    #[serde(default = "default_time_step")]
    pub time_step_secs: f64,
    /// Square world extent, origin-centered (km).
    pub grid_km: f64,
    pub sites: Vec<RadarSiteSpec>,
    pub fighters: Vec<FighterSpec>,
    #[serde(default)]
    pub precipitation: Option<PrecipitationConfig>,
}

fn default_seed() -> u64 {
    42
}

fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP_SECS
}

impl ScenarioSpec {
    /// Validate the scenario before construction. Any failure is fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sites.is_empty() {
            return Err(ConfigError::NoSites);
        }
        if self.fighters.is_empty() {
            return Err(ConfigError::NoFighters);
        }
        if self.time_step_secs <= 0.0 || !self.time_step_secs.is_finite() {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step_secs));
        }
        if self.grid_km <= 0.0 || !self.grid_km.is_finite() {
            return Err(ConfigError::NonPositiveGrid(self.grid_km));
        }
        for site in &self.sites {
            if site.frequency_ghz <= 0.0 {
                return Err(ConfigError::NonPositiveFrequency(site.frequency_ghz));
            }
            if !(0.0..1.0).contains(&site.desired_pd) || site.desired_pd == 0.0 {
                return Err(ConfigError::InvalidPd(site.desired_pd));
            }
            if !(0.0..1.0).contains(&site.probability_fa) || site.probability_fa == 0.0 {
                return Err(ConfigError::InvalidPfa(site.probability_fa));
            }
            if site.reference_range_km <= 0.0 {
                return Err(ConfigError::NonPositiveReferenceRange(
                    site.reference_range_km,
                ));
            }
        }
        if let Some(precipitation) = &self.precipitation {
            if precipitation.cells_per_km <= 0.0 || !precipitation.cells_per_km.is_finite() {
                return Err(ConfigError::NonPositiveFieldResolution(
                    precipitation.cells_per_km,
                ));
            }
            if precipitation.max_rain_rate_mm_hr <= 0.0 {
                return Err(ConfigError::NonPositiveRainCap(
                    precipitation.max_rain_rate_mm_hr,
                ));
            }
        }
        for fighter in &self.fighters {
            let rcs = &fighter.rcs;
            let all_positive = rcs.nose_m2 > 0.0
                && rcs.tail_m2 > 0.0
                && rcs.side_m2 > 0.0
                && rcs.top_m2 > 0.0
                && rcs.bottom_m2 > 0.0;
            if !all_positive {
                return Err(ConfigError::NonPositiveRcs);
            }
        }
        Ok(())
    }
}
