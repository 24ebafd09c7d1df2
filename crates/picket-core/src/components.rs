//! ECS components for hecs entities.
//!
//! Components are plain data structs with no simulation logic.
//! Per-step logic lives in systems, not components.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::ASPECT_BUCKET_HALF_WIDTH_DEG;
use crate::enums::*;
use crate::types::Position;

/// Stable platform identity, assigned at spawn.
///
/// Missiles reference their target by this id rather than by copied state,
/// so guidance always reads the target's current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlatformId(pub u32);

/// Marks an entity as a ground radar site.
#[derive(Debug, Clone, Copy)]
pub struct RadarSite;

/// Marks an entity as a fighter aircraft.
#[derive(Debug, Clone, Copy)]
pub struct Fighter;

/// Heading/speed state for anything that moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Motion {
    /// Heading in radians (0 = North, clockwise).
    pub heading: f64,
    /// Scalar speed (m/s).
    pub speed_m_s: f64,
}

/// Aspect-dependent radar cross section profile. All values in m², > 0.
///
/// Top and bottom aspects are carried for completeness but unreachable in
/// planar geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RcsProfile {
    pub nose_m2: f64,
    pub tail_m2: f64,
    pub side_m2: f64,
    pub top_m2: f64,
    pub bottom_m2: f64,
}

impl RcsProfile {
    /// Bucket an off-nose aspect angle (degrees, any sign) per the ±30° rule.
    pub fn aspect_of(off_nose_deg: f64) -> Aspect {
        let a = off_nose_deg.abs() % 360.0;
        let a = if a > 180.0 { 360.0 - a } else { a };
        if a <= ASPECT_BUCKET_HALF_WIDTH_DEG {
            Aspect::Nose
        } else if a >= 180.0 - ASPECT_BUCKET_HALF_WIDTH_DEG {
            Aspect::Tail
        } else {
            Aspect::Side
        }
    }

    /// RCS (m²) presented at the given off-nose aspect angle (degrees).
    pub fn at_aspect(&self, off_nose_deg: f64) -> f64 {
        match Self::aspect_of(off_nose_deg) {
            Aspect::Nose => self.nose_m2,
            Aspect::Tail => self.tail_m2,
            Aspect::Side => self.side_m2,
        }
    }
}

/// Per-target track record maintained by a radar site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Simulation time at first detection (seconds).
    pub acquired_at_secs: f64,
    /// Range at the most recent detection (km).
    pub last_range_km: f64,
    /// Azimuth at the most recent detection (degrees).
    pub last_azimuth_deg: f64,
    /// Cumulative time this target has been held in track (seconds).
    pub time_in_track_secs: f64,
    pub status: TrackStatus,
}

/// Track store owned by a radar site, keyed by target identity.
///
/// No external mutation path: only the tracking system touches this.
/// Ordered map so iteration (and thus launch order) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct TrackTable {
    pub tracks: BTreeMap<PlatformId, Track>,
}

impl TrackTable {
    /// Whether the site currently holds a track on the given target.
    pub fn is_tracking(&self, target: PlatformId) -> bool {
        self.tracks.contains_key(&target)
    }

    /// Whether the site currently holds any track at all.
    pub fn has_any_track(&self) -> bool {
        !self.tracks.is_empty()
    }
}

/// Precomputed per-azimuth detection ranges for one site against a 1 m²
/// reference, attenuation-sampled once at scenario initialization.
#[derive(Debug, Clone)]
pub struct DetectionEnvelope {
    /// One range (km) per equally-spaced azimuth bucket.
    pub ranges_km: Vec<f64>,
}

impl DetectionEnvelope {
    /// Detection range at the bucket nearest the queried azimuth (degrees).
    ///
    /// The quantization to `round(az/360 · n) mod n` is intentional: the
    /// beam does not resolve finer than its bucket width.
    pub fn range_at_azimuth(&self, azimuth_deg: f64) -> f64 {
        let n = self.ranges_km.len();
        if n == 0 {
            return 0.0;
        }
        let az = azimuth_deg.rem_euclid(360.0);
        let bucket = (az / 360.0 * n as f64).round() as usize % n;
        self.ranges_km[bucket]
    }
}

/// Mutable radar site state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteState {
    pub interceptors_remaining: u32,
    pub interceptors_launched: u32,
    /// Time of the most recent interceptor launch (seconds).
    pub last_launch_secs: Option<f64>,
    pub status: PlatformStatus,
}

/// Mutable fighter state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterState {
    pub speed_mach: f64,
    pub maneuver: ManeuverMode,
    pub weapons_remaining: u32,
    pub status: PlatformStatus,
}

/// In-flight missile state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub side: LaunchSide,
    pub status: MissileStatus,
    /// Platform that fired this missile.
    pub launcher: PlatformId,
    /// Target platform, resolved by identity each step.
    pub target: PlatformId,
    pub launched_at_secs: f64,
    /// Set on kill.
    pub impact_time_secs: Option<f64>,
    /// Set on kill.
    pub impact_position: Option<Position>,
    /// Maximum flight range (km); site-launched only.
    pub max_range_km: Option<f64>,
    /// Cumulative distance flown (km).
    pub traveled_km: f64,
    /// Position at the start of the current step, for the segment
    /// intercept test.
    pub prev_position: Position,
    /// Warhead/fuze lethal radius (km).
    pub kill_radius_km: f64,
}
