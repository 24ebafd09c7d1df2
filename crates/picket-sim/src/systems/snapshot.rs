//! Snapshot system: queries the ECS world and builds a complete StepSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use picket_core::components::*;
use picket_core::events::EngagementEvent;
use picket_core::state::*;
use picket_core::types::{Position, SimTime};

/// Build a complete StepSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    complete: bool,
    events: Vec<EngagementEvent>,
) -> StepSnapshot {
    StepSnapshot {
        time: *time,
        complete,
        sites: build_sites(world),
        fighters: build_fighters(world),
        missiles: build_missiles(world),
        events,
    }
}

/// Build SiteView list, sorted by platform id.
fn build_sites(world: &World) -> Vec<SiteView> {
    let mut sites: Vec<SiteView> = world
        .query::<(&RadarSite, &PlatformId, &Position, &SiteState, &TrackTable)>()
        .iter()
        .map(|(_, (_, id, pos, state, table))| SiteView {
            id: *id,
            position: *pos,
            status: state.status,
            interceptors_remaining: state.interceptors_remaining,
            interceptors_launched: state.interceptors_launched,
            tracks: table
                .tracks
                .iter()
                .map(|(target, track)| TrackView {
                    target: *target,
                    range_km: track.last_range_km,
                    azimuth_deg: track.last_azimuth_deg,
                    time_in_track_secs: track.time_in_track_secs,
                    status: track.status,
                })
                .collect(),
        })
        .collect();

    sites.sort_by_key(|s| s.id);
    sites
}

/// Build FighterView list, sorted by platform id.
fn build_fighters(world: &World) -> Vec<FighterView> {
    let mut fighters: Vec<FighterView> = world
        .query::<(&Fighter, &PlatformId, &Position, &Motion, &FighterState)>()
        .iter()
        .map(|(_, (_, id, pos, motion, state))| FighterView {
            id: *id,
            position: *pos,
            heading: motion.heading,
            speed_mach: state.speed_mach,
            maneuver: state.maneuver,
            weapons_remaining: state.weapons_remaining,
            status: state.status,
        })
        .collect();

    fighters.sort_by_key(|f| f.id);
    fighters
}

/// Build MissileView list, sorted by platform id.
fn build_missiles(world: &World) -> Vec<MissileView> {
    let mut missiles: Vec<MissileView> = world
        .query::<(&PlatformId, &Position, &Motion, &Missile)>()
        .iter()
        .map(|(_, (id, pos, motion, missile))| MissileView {
            id: *id,
            side: missile.side,
            launcher: missile.launcher,
            target: missile.target,
            position: *pos,
            heading: motion.heading,
            status: missile.status,
        })
        .collect();

    missiles.sort_by_key(|m| m.id);
    missiles
}

/// Build the per-missile records for the terminal engagement report,
/// sorted by platform id.
pub fn build_missile_records(world: &World) -> Vec<MissileRecord> {
    let mut records: Vec<MissileRecord> = world
        .query::<(&PlatformId, &Missile)>()
        .iter()
        .map(|(_, (id, missile))| MissileRecord {
            id: *id,
            side: missile.side,
            launcher: missile.launcher,
            target: missile.target,
            launched_at_secs: missile.launched_at_secs,
            impact_time_secs: missile.impact_time_secs,
            impact_position: missile.impact_position,
            status: missile.status,
        })
        .collect();

    records.sort_by_key(|r| r.id);
    records
}
