//! Error taxonomy for the engagement engine.
//!
//! Three families per the failure-handling design: configuration errors are
//! fatal before the simulation starts, radar resource errors are recovered
//! locally by falling back to free-space detection, and session errors are
//! rejected at the boundary without touching simulation state.

use thiserror::Error;

/// Fatal scenario configuration errors. The simulation cannot start.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("scenario requires at least one radar site")]
    NoSites,
    #[error("scenario requires at least one fighter")]
    NoFighters,
    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),
    #[error("grid extent must be positive, got {0} km")]
    NonPositiveGrid(f64),
    #[error("radar cross section values must be positive")]
    NonPositiveRcs,
    #[error("desired probability of detection must lie in (0, 1), got {0}")]
    InvalidPd(f64),
    #[error("probability of false alarm must lie in (0, 1), got {0}")]
    InvalidPfa(f64),
    #[error("operating frequency must be positive, got {0} GHz")]
    NonPositiveFrequency(f64),
    #[error("reference detection range must be positive, got {0} km")]
    NonPositiveReferenceRange(f64),
    #[error("precipitation grid resolution must be positive, got {0} cells/km")]
    NonPositiveFieldResolution(f64),
    #[error("rain-rate cap must be positive, got {0} mm/h")]
    NonPositiveRainCap(f64),
}

/// Radar resource errors: attenuation table or precipitation field
/// unavailable or malformed. Never fatal — callers fall back to the
/// unattenuated free-space range.
#[derive(Debug, Error, PartialEq)]
pub enum RadarError {
    #[error("attenuation table queried before its dataset was loaded")]
    TableUninitialized,
    #[error("attenuation dataset malformed: {0}")]
    MalformedDataset(&'static str),
    #[error("rain field sample at ({x_km:.2}, {y_km:.2}) km is not finite")]
    BadFieldSample { x_km: f64, y_km: f64 },
}

/// Session boundary errors for the coordinator registry.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("unknown or expired session key")]
    UnknownSession,
}
