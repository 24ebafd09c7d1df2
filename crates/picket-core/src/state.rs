//! State snapshots — the complete visible state returned to callers each
//! step, plus the terminal engagement report.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::components::PlatformId;
use crate::events::EngagementEvent;
use crate::types::{Position, SimTime};

/// Per-step snapshot of the whole engagement, sufficient for a caller to
/// render or log progress without re-deriving simulation internals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepSnapshot {
    pub time: SimTime,
    /// Whether the engagement reached a terminal condition this step.
    pub complete: bool,
    pub sites: Vec<SiteView>,
    pub fighters: Vec<FighterView>,
    pub missiles: Vec<MissileView>,
    /// Events emitted during this step.
    pub events: Vec<EngagementEvent>,
}

/// A radar site on the display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteView {
    pub id: PlatformId,
    pub position: Position,
    pub status: PlatformStatus,
    pub interceptors_remaining: u32,
    pub interceptors_launched: u32,
    pub tracks: Vec<TrackView>,
}

/// One active track held by a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackView {
    pub target: PlatformId,
    pub range_km: f64,
    pub azimuth_deg: f64,
    pub time_in_track_secs: f64,
    pub status: TrackStatus,
}

/// A fighter on the display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterView {
    pub id: PlatformId,
    pub position: Position,
    /// Heading in radians (0 = North, clockwise).
    pub heading: f64,
    pub speed_mach: f64,
    pub maneuver: ManeuverMode,
    pub weapons_remaining: u32,
    pub status: PlatformStatus,
}

/// A missile on the display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub id: PlatformId,
    pub side: LaunchSide,
    pub launcher: PlatformId,
    pub target: PlatformId,
    pub position: Position,
    pub heading: f64,
    pub status: MissileStatus,
}

/// Terminal engagement result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementReport {
    /// True iff at least one site was destroyed while every fighter
    /// survived.
    pub success: bool,
    pub elapsed_secs: f64,
    pub missiles: Vec<MissileRecord>,
}

/// Per-missile launch/impact record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileRecord {
    pub id: PlatformId,
    pub side: LaunchSide,
    pub launcher: PlatformId,
    pub target: PlatformId,
    pub launched_at_secs: f64,
    /// Impact time, or `None` if the missile never connected.
    pub impact_time_secs: Option<f64>,
    /// Impact position, or `None` if the missile never connected.
    pub impact_position: Option<Position>,
    pub status: MissileStatus,
}
