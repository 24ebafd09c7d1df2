//! Radar numerics for the PICKET engagement simulation.
//!
//! Pure functions and lookup tables: dB conversions, the Albersheim/Swerling
//! minimum-SNR model, pulse-integration gain, free-space detection range,
//! rain-attenuation lookup, and the ray-marched attenuated detection range
//! over a sampled precipitation field. No ECS dependency — operates on
//! plain data.

pub mod attenuation;
pub mod field;
pub mod model;

pub use attenuation::AttenuationTable;
pub use field::RainField;
