//! Intercept evaluation system.
//!
//! Tests every active missile against its target's current position: first
//! a straight-line proximity check against the kill radius, then a segment
//! (capsule) check over the missile's previous→current positions to catch
//! high-speed skip-over between discrete steps. Site-launched missiles that
//! outfly their maximum range resolve to a miss.

use std::collections::HashMap;

use hecs::World;
use tracing::info;

use picket_core::components::*;
use picket_core::enums::{MissileStatus, PlatformStatus};
use picket_core::events::EngagementEvent;
use picket_core::types::{point_segment_distance, Position};

/// Run the intercept evaluation for one step.
pub fn run(
    world: &mut World,
    index: &HashMap<PlatformId, hecs::Entity>,
    now_secs: f64,
    events: &mut Vec<EngagementEvent>,
) {
    // Current platform positions, by identity.
    let mut positions: HashMap<PlatformId, Position> = HashMap::new();
    for (_, (_, id, pos)) in world.query::<(&RadarSite, &PlatformId, &Position)>().iter() {
        positions.insert(*id, *pos);
    }
    for (_, (_, id, pos)) in world.query::<(&Fighter, &PlatformId, &Position)>().iter() {
        positions.insert(*id, *pos);
    }

    let mut destroyed: Vec<PlatformId> = Vec::new();

    for (_entity, (missile_id, missile, pos)) in
        world.query_mut::<(&PlatformId, &mut Missile, &Position)>()
    {
        if missile.status.is_resolved() {
            continue;
        }
        let target_pos = match positions.get(&missile.target) {
            Some(p) => *p,
            None => continue,
        };

        let direct_km = pos.range_to(&target_pos);
        let hit = direct_km < missile.kill_radius_km
            || point_segment_distance(&target_pos, &missile.prev_position, pos)
                < missile.kill_radius_km;

        if hit {
            missile.status = MissileStatus::Kill;
            missile.impact_time_secs = Some(now_secs);
            missile.impact_position = Some(*pos);
            destroyed.push(missile.target);
            info!(
                missile = missile_id.0,
                target = missile.target.0,
                time_secs = now_secs,
                "intercept"
            );
            events.push(EngagementEvent::MissileKill {
                missile: *missile_id,
                target: missile.target,
                position: *pos,
            });
            continue;
        }

        if let Some(max_range_km) = missile.max_range_km {
            if missile.traveled_km > max_range_km {
                missile.status = MissileStatus::Missed;
                events.push(EngagementEvent::MissileMissed { missile: *missile_id });
            }
        }
    }

    // Apply terminal platform state after the missile pass.
    for target in destroyed {
        let entity = match index.get(&target) {
            Some(e) => *e,
            None => continue,
        };
        let mut was_active = false;
        if let Ok(mut state) = world.get::<&mut FighterState>(entity) {
            was_active = state.status == PlatformStatus::Active;
            state.status = PlatformStatus::Destroyed;
        } else if let Ok(mut state) = world.get::<&mut SiteState>(entity) {
            was_active = state.status == PlatformStatus::Active;
            state.status = PlatformStatus::Destroyed;
        }
        if was_active {
            info!(platform = target.0, "platform destroyed");
            events.push(EngagementEvent::PlatformDestroyed { id: target });
        }
    }
}
