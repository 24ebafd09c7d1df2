//! Events emitted by the simulation for caller feedback and logging.

use serde::{Deserialize, Serialize};

use crate::components::PlatformId;
use crate::enums::LaunchSide;
use crate::types::Position;

/// Discrete events raised while advancing one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngagementEvent {
    /// A site acquired a new track on a fighter.
    TrackAcquired {
        site: PlatformId,
        target: PlatformId,
        range_km: f64,
    },
    /// A site dropped its track (target left the detection envelope).
    TrackDropped { site: PlatformId, target: PlatformId },
    /// A missile left the rail.
    MissileLaunched {
        missile: PlatformId,
        side: LaunchSide,
        target: PlatformId,
    },
    /// A missile intercepted its target.
    MissileKill {
        missile: PlatformId,
        target: PlatformId,
        position: Position,
    },
    /// A site-launched missile exceeded its maximum range.
    MissileMissed { missile: PlatformId },
    /// A platform was destroyed.
    PlatformDestroyed { id: PlatformId },
    /// The engagement reached a terminal condition.
    EngagementComplete { success: bool },
}
