//! Fighter strike system — air-to-ground launches against radar sites.

use std::collections::HashMap;

use hecs::World;
use tracing::info;

use picket_core::components::*;
use picket_core::config::FighterSpec;
use picket_core::enums::{LaunchSide, PlatformStatus};
use picket_core::events::EngagementEvent;
use picket_core::types::Position;

use crate::world_setup::{spawn_missile, MissileLaunch};

/// Run fighter launch logic for one step.
///
/// A fighter releases a weapon at every site inside its weapon range that
/// currently holds at least one active track — on any target, not
/// necessarily the launching fighter; a radiating, tracking site is
/// targetable on emissions alone.
pub fn run(
    world: &mut World,
    next_id: &mut u32,
    index: &mut HashMap<PlatformId, hecs::Entity>,
    now_secs: f64,
    events: &mut Vec<EngagementEvent>,
) {
    // Site picture: position, whether it is radiating with a live track.
    let sites: Vec<(PlatformId, Position, bool)> = world
        .query::<(&RadarSite, &PlatformId, &Position, &TrackTable, &SiteState)>()
        .iter()
        .filter(|(_, (_, _, _, _, state))| state.status == PlatformStatus::Active)
        .map(|(_, (_, id, pos, table, _))| (*id, *pos, table.has_any_track()))
        .collect();

    let mut launches: Vec<MissileLaunch> = Vec::new();

    for (_entity, (_fighter, fighter_id, fighter_pos, spec, state)) in world.query_mut::<(
        &Fighter,
        &PlatformId,
        &Position,
        &FighterSpec,
        &mut FighterState,
    )>() {
        if state.status == PlatformStatus::Destroyed {
            continue;
        }

        for (site_id, site_pos, has_track) in &sites {
            if state.weapons_remaining == 0 {
                break;
            }
            let distance_km = fighter_pos.range_to(site_pos);
            if distance_km > spec.weapon_range_km || !has_track {
                continue;
            }

            state.weapons_remaining -= 1;

            launches.push(MissileLaunch {
                side: LaunchSide::Fighter,
                launcher: *fighter_id,
                target: *site_id,
                position: *fighter_pos,
                heading: fighter_pos.bearing_to(site_pos),
                speed_m_s: spec.weapon_speed_m_s,
                max_range_km: None,
                kill_radius_km: spec.weapon_kill_radius_km,
                launched_at_secs: now_secs,
            });
        }
    }

    for launch in launches {
        let id = PlatformId(*next_id);
        *next_id += 1;
        info!(
            missile = id.0,
            fighter = launch.launcher.0,
            target = launch.target.0,
            "air-to-ground weapon away"
        );
        events.push(EngagementEvent::MissileLaunched {
            missile: id,
            side: LaunchSide::Fighter,
            target: launch.target,
        });
        let entity = spawn_missile(world, id, launch);
        index.insert(id, entity);
    }
}
