//! Site fire control — decides interceptor launches against tracked targets.

use std::collections::HashMap;

use hecs::World;
use tracing::info;

use picket_core::components::*;
use picket_core::config::RadarSiteSpec;
use picket_core::enums::{LaunchSide, PlatformStatus};
use picket_core::events::EngagementEvent;
use picket_core::types::Position;

use crate::world_setup::{spawn_missile, MissileLaunch};

/// Run site launch logic for one step.
///
/// For each tracked target inside the site's maximum effective range, an
/// interceptor is launched once the target has been held in track for the
/// acquisition time, the launch interval has elapsed, and inventory
/// remains. The interceptor departs along the target's current azimuth.
pub fn run(
    world: &mut World,
    next_id: &mut u32,
    index: &mut HashMap<PlatformId, hecs::Entity>,
    now_secs: f64,
    events: &mut Vec<EngagementEvent>,
) {
    let mut launches: Vec<MissileLaunch> = Vec::new();

    for (_entity, (_site, site_id, site_pos, spec, table, state)) in world.query_mut::<(
        &RadarSite,
        &PlatformId,
        &Position,
        &RadarSiteSpec,
        &TrackTable,
        &mut SiteState,
    )>() {
        if state.status == PlatformStatus::Destroyed {
            continue;
        }

        for (target_id, track) in &table.tracks {
            if track.last_range_km > spec.max_effective_range_km {
                continue;
            }
            if track.time_in_track_secs < spec.acquisition_time_secs {
                continue;
            }
            let interval_ok = match state.last_launch_secs {
                Some(last) => now_secs - last >= spec.launch_interval_secs,
                None => true,
            };
            if !interval_ok || state.interceptors_remaining == 0 {
                continue;
            }

            state.interceptors_remaining -= 1;
            state.interceptors_launched += 1;
            state.last_launch_secs = Some(now_secs);

            launches.push(MissileLaunch {
                side: LaunchSide::Site,
                launcher: *site_id,
                target: *target_id,
                position: *site_pos,
                heading: track.last_azimuth_deg.to_radians(),
                speed_m_s: spec.interceptor_speed_m_s,
                max_range_km: Some(spec.interceptor_max_range_km),
                kill_radius_km: spec.interceptor_kill_radius_km,
                launched_at_secs: now_secs,
            });
        }
    }

    for launch in launches {
        let id = PlatformId(*next_id);
        *next_id += 1;
        info!(
            missile = id.0,
            site = launch.launcher.0,
            target = launch.target.0,
            "interceptor away"
        );
        events.push(EngagementEvent::MissileLaunched {
            missile: id,
            side: LaunchSide::Site,
            target: launch.target,
        });
        let entity = spawn_missile(world, id, launch);
        index.insert(id, entity);
    }
}
