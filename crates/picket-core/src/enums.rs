//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Missile lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissileStatus {
    /// In flight, guiding on its target.
    #[default]
    Active,
    /// Intercepted its target.
    Kill,
    /// Exceeded maximum range without intercepting.
    Missed,
}

impl MissileStatus {
    /// Whether the missile has reached a terminal state.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, MissileStatus::Active)
    }
}

/// Which side launched a missile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchSide {
    /// Surface-to-air interceptor from a radar site.
    Site,
    /// Air-to-ground weapon from a fighter.
    Fighter,
}

/// Platform lifecycle state. Destroyed is terminal and freezes kinematics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformStatus {
    #[default]
    Active,
    Destroyed,
}

/// Fighter maneuver mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManeuverMode {
    /// Hold current heading.
    #[default]
    None,
    /// Steer away from the nearest radar site under the fighter g-limit.
    Evasive,
}

/// Radar track status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackStatus {
    #[default]
    Tracking,
    Lost,
}

/// Target fluctuation model family affecting required detection SNR.
///
/// Swerling I/III fluctuate scan-to-scan, II/IV pulse-to-pulse; the case
/// number also selects the integration-gain exponent in the radar layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluctuationModel {
    /// Steady (Swerling 0/5) target.
    #[default]
    NonFluctuating,
    SwerlingI,
    SwerlingII,
    SwerlingIII,
    SwerlingIV,
}

/// Pulse integration mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationMode {
    /// Phase-preserving integration.
    Coherent,
    /// Post-detection (video) integration.
    #[default]
    NonCoherent,
}

/// Target aspect bucket for RCS lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aspect {
    Nose,
    Tail,
    Side,
}
