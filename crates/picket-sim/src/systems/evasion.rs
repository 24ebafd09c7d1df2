//! Fighter evasion system.
//!
//! Escalates an evasive-capable fighter to its evasive mode once a
//! site-launched missile is inbound on it, then steers it away from the
//! nearest surviving site via the maneuver FSM.

use hecs::World;

use picket_core::components::*;
use picket_core::config::FighterSpec;
use picket_core::enums::{LaunchSide, ManeuverMode, MissileStatus, PlatformStatus};
use picket_core::types::Position;

use picket_maneuver::fsm::{evaluate, ManeuverContext};

/// Run the evasion update for all fighters.
pub fn run(world: &mut World, dt: f64) {
    let sites: Vec<Position> = world
        .query::<(&RadarSite, &Position, &SiteState)>()
        .iter()
        .filter(|(_, (_, _, state))| state.status == PlatformStatus::Active)
        .map(|(_, (_, pos, _))| *pos)
        .collect();

    // Fighters with an interceptor currently inbound on them.
    let threatened: Vec<PlatformId> = world
        .query::<&Missile>()
        .iter()
        .filter(|(_, m)| m.status == MissileStatus::Active && m.side == LaunchSide::Site)
        .map(|(_, m)| m.target)
        .collect();

    for (_entity, (_fighter, id, pos, spec, state, motion)) in world.query_mut::<(
        &Fighter,
        &PlatformId,
        &Position,
        &FighterSpec,
        &mut FighterState,
        &mut Motion,
    )>() {
        if state.status == PlatformStatus::Destroyed {
            continue;
        }

        if spec.evasive && threatened.contains(id) {
            state.maneuver = ManeuverMode::Evasive;
        }

        let nearest_site = sites
            .iter()
            .min_by(|a, b| pos.range_to(a).total_cmp(&pos.range_to(b)))
            .copied();

        let ctx = ManeuverContext {
            mode: state.maneuver,
            position: *pos,
            heading: motion.heading,
            speed_m_s: motion.speed_m_s,
            nearest_site,
            dt,
        };
        motion.heading = evaluate(&ctx).new_heading;
    }
}
