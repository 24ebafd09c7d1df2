//! Entity spawn factories for setting up the engagement world.
//!
//! Creates radar sites, fighters, and missiles with their component
//! bundles, and builds each site's per-azimuth detection envelope.

use hecs::World;
use tracing::debug;

use picket_core::components::*;
use picket_core::config::{FighterSpec, RadarSiteSpec};
use picket_core::constants::MACH_M_S;
use picket_core::enums::{LaunchSide, ManeuverMode, MissileStatus, PlatformStatus};
use picket_core::types::Position;
use picket_radar::model::RadarModel;
use picket_radar::{AttenuationTable, RainField};

/// Spawn a radar site with an empty detection envelope; envelopes are
/// built afterwards by [`build_envelope`] once the rain field is known.
pub fn spawn_site(world: &mut World, id: PlatformId, spec: &RadarSiteSpec) -> hecs::Entity {
    let state = SiteState {
        interceptors_remaining: spec.interceptor_count,
        interceptors_launched: 0,
        last_launch_secs: None,
        status: PlatformStatus::Active,
    };

    world.spawn((
        RadarSite,
        id,
        spec.position,
        spec.clone(),
        state,
        TrackTable::default(),
        DetectionEnvelope { ranges_km: Vec::new() },
    ))
}

/// Spawn a fighter from its spec.
pub fn spawn_fighter(world: &mut World, id: PlatformId, spec: &FighterSpec) -> hecs::Entity {
    let state = FighterState {
        speed_mach: spec.speed_mach,
        maneuver: ManeuverMode::None,
        weapons_remaining: spec.weapon_count,
        status: PlatformStatus::Active,
    };

    let motion = Motion {
        heading: spec.heading_deg.to_radians(),
        speed_m_s: spec.speed_mach * MACH_M_S,
    };

    world.spawn((Fighter, id, spec.position, motion, spec.clone(), state))
}

/// Everything needed to put a missile on the rail.
pub struct MissileLaunch {
    pub side: LaunchSide,
    pub launcher: PlatformId,
    pub target: PlatformId,
    pub position: Position,
    pub heading: f64,
    pub speed_m_s: f64,
    pub max_range_km: Option<f64>,
    pub kill_radius_km: f64,
    pub launched_at_secs: f64,
}

/// Spawn a missile entity from launch parameters.
pub fn spawn_missile(world: &mut World, id: PlatformId, launch: MissileLaunch) -> hecs::Entity {
    let missile = Missile {
        side: launch.side,
        status: MissileStatus::Active,
        launcher: launch.launcher,
        target: launch.target,
        launched_at_secs: launch.launched_at_secs,
        impact_time_secs: None,
        impact_position: None,
        max_range_km: launch.max_range_km,
        traveled_km: 0.0,
        prev_position: launch.position,
        kill_radius_km: launch.kill_radius_km,
    };

    let motion = Motion {
        heading: launch.heading,
        speed_m_s: launch.speed_m_s,
    };

    world.spawn((id, launch.position, motion, missile))
}

/// Build a site's detection envelope: one attenuation-sampled range per
/// azimuth bucket, against the 1 m² reference target.
pub fn build_envelope(
    spec: &RadarSiteSpec,
    rain: Option<(&RainField, &AttenuationTable)>,
) -> DetectionEnvelope {
    let model = RadarModel::from_spec(spec);
    debug!(
        frequency_ghz = spec.frequency_ghz,
        min_snr_db = model.minimum_required_snr_db(),
        attenuated = rain.is_some(),
        "sampling detection envelope"
    );
    let n = spec.num_azimuths.max(1);
    let ranges_km = (0..n)
        .map(|bucket| {
            let azimuth_deg = bucket as f64 / n as f64 * 360.0;
            model.detection_range_km(1.0, &spec.position, azimuth_deg, rain)
        })
        .collect();
    DetectionEnvelope { ranges_km }
}
