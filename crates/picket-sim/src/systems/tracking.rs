//! Radar tracking system.
//!
//! Each step, every (site, fighter) pair is tested against the site's
//! precomputed detection envelope at the pair's azimuth, scaled by the
//! fighter's aspect RCS. Detected targets get their track upserted;
//! a single missed step deletes the track — no hysteresis.

use hecs::World;
use tracing::debug;

use picket_core::components::*;
use picket_core::config::{FighterSpec, RadarSiteSpec};
use picket_core::enums::{PlatformStatus, TrackStatus};
use picket_core::events::EngagementEvent;
use picket_core::types::{wrap_to_pi, Position};

/// Run the tracking update for all site/fighter pairs.
pub fn run(world: &mut World, now_secs: f64, dt: f64, events: &mut Vec<EngagementEvent>) {
    // Collect the fighter picture first to keep the site query exclusive.
    let fighters: Vec<(PlatformId, Position, f64, RcsProfile, PlatformStatus)> = world
        .query::<(&Fighter, &PlatformId, &Position, &Motion, &FighterSpec, &FighterState)>()
        .iter()
        .map(|(_, (_, id, pos, motion, spec, state))| {
            (*id, *pos, motion.heading, spec.rcs, state.status)
        })
        .collect();

    for (_entity, (_site, site_id, site_pos, spec, envelope, table, state)) in world.query_mut::<(
        &RadarSite,
        &PlatformId,
        &Position,
        &RadarSiteSpec,
        &DetectionEnvelope,
        &mut TrackTable,
        &SiteState,
    )>() {
        if state.status == PlatformStatus::Destroyed {
            table.tracks.clear();
            continue;
        }

        for (fighter_id, fighter_pos, fighter_heading, rcs, fighter_status) in &fighters {
            let distance_km = site_pos.range_to(fighter_pos);
            let azimuth_deg = site_pos.bearing_deg_to(fighter_pos);

            // Aspect the fighter presents to this site.
            let off_nose_deg =
                wrap_to_pi(fighter_pos.bearing_to(site_pos) - fighter_heading).to_degrees();
            let rcs_m2 = rcs.at_aspect(off_nose_deg);

            // Envelope ranges are calibrated for 1 m²; aspect RCS enters at
            // the fourth root, as in the free-space law.
            let detection_range_km =
                envelope.range_at_azimuth(azimuth_deg) * rcs_m2.max(0.0).powf(0.25);

            let detected =
                *fighter_status == PlatformStatus::Active && distance_km <= detection_range_km;

            if detected {
                let is_new = !table.tracks.contains_key(fighter_id);
                let track = table.tracks.entry(*fighter_id).or_insert(Track {
                    acquired_at_secs: now_secs,
                    last_range_km: distance_km,
                    last_azimuth_deg: azimuth_deg,
                    time_in_track_secs: 0.0,
                    status: TrackStatus::Tracking,
                });
                track.last_range_km = distance_km;
                track.last_azimuth_deg = azimuth_deg;
                track.time_in_track_secs += dt;
                track.status = TrackStatus::Tracking;

                if is_new {
                    debug!(site = site_id.0, target = fighter_id.0, range_km = distance_km, "track acquired");
                    events.push(EngagementEvent::TrackAcquired {
                        site: *site_id,
                        target: *fighter_id,
                        range_km: distance_km,
                    });
                }
            } else if table.tracks.remove(fighter_id).is_some() {
                debug!(site = site_id.0, target = fighter_id.0, "track dropped");
                events.push(EngagementEvent::TrackDropped {
                    site: *site_id,
                    target: *fighter_id,
                });
            }
        }
    }
}
