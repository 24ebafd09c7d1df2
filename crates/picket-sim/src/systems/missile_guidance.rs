//! Missile guidance system.
//!
//! Guided missiles steer toward their target's current position under the
//! missile g-limit. A site-launched missile whose launching site has lost
//! its track receives a small bounded random heading perturbation instead
//! (loss of guidance datalink).

use std::collections::{HashMap, HashSet};

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use picket_core::components::*;
use picket_core::constants::{DATALINK_LOSS_PERTURBATION_RAD, MISSILE_G_LIMIT};
use picket_core::enums::LaunchSide;
use picket_core::types::Position;

use crate::guidance::steer_toward;

/// Run guidance for all active missiles.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, dt: f64) {
    // Current platform positions, by identity.
    let mut positions: HashMap<PlatformId, Position> = HashMap::new();
    for (_, (_, id, pos)) in world.query::<(&RadarSite, &PlatformId, &Position)>().iter() {
        positions.insert(*id, *pos);
    }
    for (_, (_, id, pos)) in world.query::<(&Fighter, &PlatformId, &Position)>().iter() {
        positions.insert(*id, *pos);
    }

    // (site, target) pairs with a live track, for the datalink check.
    let tracked: HashSet<(PlatformId, PlatformId)> = world
        .query::<(&RadarSite, &PlatformId, &TrackTable)>()
        .iter()
        .flat_map(|(_, (_, site_id, table))| {
            let site = *site_id;
            table.tracks.keys().map(move |target| (site, *target)).collect::<Vec<_>>()
        })
        .collect();

    for (_entity, (motion, missile, pos)) in
        world.query_mut::<(&mut Motion, &Missile, &Position)>()
    {
        if missile.status.is_resolved() {
            continue;
        }

        // A fighter needs no track to guide its own weapon: the launch
        // position of a stationary emitter is enough.
        let has_datalink = match missile.side {
            LaunchSide::Site => tracked.contains(&(missile.launcher, missile.target)),
            LaunchSide::Fighter => true,
        };

        if !has_datalink {
            motion.heading += rng
                .gen_range(-DATALINK_LOSS_PERTURBATION_RAD..DATALINK_LOSS_PERTURBATION_RAD);
            continue;
        }

        if let Some(target_pos) = positions.get(&missile.target) {
            motion.heading = steer_toward(
                pos,
                motion.heading,
                motion.speed_m_s,
                target_pos,
                MISSILE_G_LIMIT,
                dt,
            );
        }
    }
}
