//! Tests for the engagement coordinator, tracking, launch logic, guidance,
//! intercept evaluation, and the session registry.

use picket_core::components::{DetectionEnvelope, PlatformId, RadarSite, RcsProfile};
use picket_core::config::{FighterSpec, PrecipitationConfig, RadarSiteSpec, ScenarioSpec};
use picket_core::constants::{G_ACCEL_M_S2, MACH_M_S, MISSILE_G_LIMIT, TURN_RATE_EPSILON};
use picket_core::enums::*;
use picket_core::error::{ConfigError, SessionError};
use picket_core::types::{wrap_to_pi, Position};
use picket_radar::model::free_space_detection_range;

use crate::coordinator::EngagementCoordinator;
use crate::session::SessionRegistry;
use crate::world_setup::MissileLaunch;

fn uniform_rcs(m2: f64) -> RcsProfile {
    RcsProfile {
        nose_m2: m2,
        tail_m2: m2,
        side_m2: m2,
        top_m2: m2,
        bottom_m2: m2,
    }
}

fn base_site() -> RadarSiteSpec {
    RadarSiteSpec {
        frequency_ghz: 10.0,
        antenna_gain_db: 35.0,
        transmit_power_w: 50_000.0,
        noise_floor_db: -110.0,
        desired_pd: 0.9,
        probability_fa: 1.0e-6,
        fluctuation: FluctuationModel::SwerlingI,
        integration: IntegrationMode::NonCoherent,
        num_pulses: 1,
        reference_range_km: 90.0,
        num_azimuths: 360,
        max_effective_range_km: 70.0,
        acquisition_time_secs: 3.0,
        launch_interval_secs: 10.0,
        interceptor_count: 4,
        interceptor_speed_m_s: 1200.0,
        interceptor_max_range_km: 80.0,
        interceptor_kill_radius_km: 0.5,
        position: Position::new(0.0, 0.0),
    }
}

fn base_fighter(position: Position, heading_deg: f64) -> FighterSpec {
    FighterSpec {
        rcs: uniform_rcs(5.0),
        speed_mach: 0.8,
        weapon_count: 2,
        weapon_range_km: 40.0,
        weapon_speed_m_s: 600.0,
        weapon_kill_radius_km: 0.3,
        evasive: false,
        position,
        heading_deg,
    }
}

fn scenario(sites: Vec<RadarSiteSpec>, fighters: Vec<FighterSpec>) -> ScenarioSpec {
    ScenarioSpec {
        seed: 42,
        time_step_secs: 1.0,
        grid_km: 400.0,
        sites,
        fighters,
        precipitation: None,
    }
}

/// Detection range of `base_site()` against `base_fighter()`'s RCS.
fn base_detection_range_km() -> f64 {
    free_space_detection_range(90.0, 5.0, 1, IntegrationMode::NonCoherent)
}

// ---- Construction / validation ----

#[test]
fn test_construction_rejects_invalid_scenarios() {
    let err = EngagementCoordinator::new(&scenario(vec![], vec![base_fighter(
        Position::new(0.0, 100.0),
        180.0,
    )]))
    .err();
    assert_eq!(err, Some(ConfigError::NoSites));

    let err = EngagementCoordinator::new(&scenario(vec![base_site()], vec![])).err();
    assert_eq!(err, Some(ConfigError::NoFighters));
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let spec = scenario(
        vec![base_site()],
        vec![base_fighter(Position::new(0.0, 120.0), 180.0)],
    );
    let mut a = EngagementCoordinator::new(&spec).unwrap();
    let mut b = EngagementCoordinator::new(&spec).unwrap();

    for step in 0..300 {
        let snap_a = a.advance();
        let snap_b = b.advance();
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged at step {step}");
    }
}

// ---- Tracking ----

#[test]
fn test_track_acquired_inside_envelope() {
    let spec = scenario(
        vec![base_site()],
        vec![base_fighter(Position::new(0.0, 100.0), 180.0)],
    );
    let mut coordinator = EngagementCoordinator::new(&spec).unwrap();
    let snap = coordinator.advance();
    assert_eq!(snap.sites[0].tracks.len(), 1, "fighter inside envelope should be tracked");
    let track = &snap.sites[0].tracks[0];
    assert_eq!(track.target, PlatformId(1));
    assert!((track.range_km - 100.0).abs() < 1.0);
}

#[test]
fn test_track_deletion_is_immediate() {
    // Fighter just inside the detection range, flying directly away.
    let detection_km = base_detection_range_km();
    let mut fighter = base_fighter(Position::new(0.0, detection_km - 0.1), 0.0);
    fighter.weapon_count = 0;
    let mut site = base_site();
    site.interceptor_count = 0;

    let mut coordinator = EngagementCoordinator::new(&scenario(vec![site], vec![fighter])).unwrap();

    // Step 1: still inside, tracked.
    let snap = coordinator.advance();
    assert_eq!(snap.sites[0].tracks.len(), 1);

    // The fighter crosses the boundary during step 1; the very next
    // tracking pass must delete the track, with no lag.
    let step_km = 0.8 * MACH_M_S / 1000.0;
    let steps_to_cross = (0.1 / step_km).ceil() as usize;
    let mut dropped_at = None;
    for step in 0..steps_to_cross + 2 {
        let snap = coordinator.advance();
        if snap.sites[0].tracks.is_empty() {
            dropped_at = Some(step);
            break;
        }
    }
    let dropped_at = dropped_at.expect("track should drop after leaving the envelope");
    assert!(
        dropped_at <= steps_to_cross,
        "track lingered {dropped_at} steps, expected <= {steps_to_cross}"
    );
}

// ---- Intercept ----

#[test]
fn test_intercept_kill_at_expected_time() {
    // Stationary fighter 5 km north; missile at 1 km/s with a 1 km kill
    // radius must report the kill at ~5.0 s (5 steps at dt=1).
    let mut site = base_site();
    site.interceptor_count = 0;
    site.acquisition_time_secs = 1.0e9;
    let mut fighter = base_fighter(Position::new(0.0, 5.0), 0.0);
    fighter.speed_mach = 0.0;
    fighter.weapon_count = 0;

    let mut coordinator = EngagementCoordinator::new(&scenario(vec![site], vec![fighter])).unwrap();

    coordinator.spawn_test_missile(MissileLaunch {
        side: LaunchSide::Site,
        launcher: PlatformId(0),
        target: PlatformId(1),
        position: Position::new(0.0, 0.0),
        heading: 0.0,
        speed_m_s: 1000.0,
        max_range_km: Some(50.0),
        kill_radius_km: 1.0,
        launched_at_secs: 0.0,
    });

    let mut kill_snapshot = None;
    for _ in 0..10 {
        let snap = coordinator.advance();
        if snap.missiles[0].status == MissileStatus::Kill {
            kill_snapshot = Some(snap);
            break;
        }
    }
    let snap = kill_snapshot.expect("missile should kill the target");
    assert!(
        (snap.time.elapsed_secs - 5.0).abs() < 1e-9,
        "kill at {} s, expected ~5.0 s",
        snap.time.elapsed_secs
    );

    let report = coordinator.report().expect("engagement should be complete");
    let record = &report.missiles[0];
    assert_eq!(record.status, MissileStatus::Kill);
    assert!((record.impact_time_secs.unwrap() - 5.0).abs() < 1e-9);
    let impact = record.impact_position.unwrap();
    assert!(
        impact.range_to(&Position::new(0.0, 5.0)) <= 1.0,
        "impact should fall within the kill radius of the target"
    );
    // The fighter died, so the engagement failed from the site's view.
    assert!(!report.success);
}

#[test]
fn test_missile_miss_at_max_range() {
    // Missile pointed away from its target runs out its max range.
    let mut site = base_site();
    site.interceptor_count = 0;
    site.acquisition_time_secs = 1.0e9;
    let mut fighter = base_fighter(Position::new(0.0, 5.0), 0.0);
    fighter.speed_mach = 0.0;
    fighter.weapon_count = 0;

    let mut coordinator = EngagementCoordinator::new(&scenario(vec![site], vec![fighter])).unwrap();

    coordinator.spawn_test_missile(MissileLaunch {
        side: LaunchSide::Site,
        launcher: PlatformId(0),
        target: PlatformId(1),
        // Start south of the site, heading south: the turn back north takes
        // long enough that max range expires first.
        position: Position::new(0.0, -40.0),
        heading: std::f64::consts::PI,
        speed_m_s: 4000.0,
        max_range_km: Some(10.0),
        kill_radius_km: 0.2,
        launched_at_secs: 0.0,
    });

    let mut status = MissileStatus::Active;
    for _ in 0..20 {
        let snap = coordinator.advance();
        status = snap.missiles[0].status;
        if status.is_resolved() {
            break;
        }
    }
    assert_eq!(status, MissileStatus::Missed);
}

// ---- Guidance ----

#[test]
fn test_turn_rate_clamp_during_pursuit() {
    // Missile heading north, target due east: a 90° correction at 1000 m/s
    // under 30 g takes multiple steps, each within the per-step limit.
    let mut site = base_site();
    site.interceptor_count = 0;
    site.acquisition_time_secs = 1.0e9;
    let mut fighter = base_fighter(Position::new(100.0, 0.0), 0.0);
    fighter.speed_mach = 0.0;
    fighter.weapon_count = 0;

    let mut coordinator = EngagementCoordinator::new(&scenario(vec![site], vec![fighter])).unwrap();

    coordinator.spawn_test_missile(MissileLaunch {
        side: LaunchSide::Site,
        launcher: PlatformId(0),
        target: PlatformId(1),
        position: Position::new(0.0, 0.0),
        heading: 0.0,
        speed_m_s: 1000.0,
        max_range_km: Some(200.0),
        kill_radius_km: 0.5,
        launched_at_secs: 0.0,
    });

    let limit = MISSILE_G_LIMIT * G_ACCEL_M_S2 / 1000.0; // rad per 1 s step
    let mut prev_heading = 0.0;
    for step in 1..=12 {
        let snap = coordinator.advance();
        let heading = snap.missiles[0].heading;
        let delta = wrap_to_pi(heading - prev_heading).abs();
        assert!(
            delta <= limit + TURN_RATE_EPSILON,
            "step {step}: turned {delta} rad, limit {limit}"
        );
        if step == 1 {
            // The full correction is far beyond one step: the first turn
            // must saturate the limit exactly.
            assert!(
                (delta - limit).abs() < 1e-12,
                "first correction should saturate the turn limit"
            );
        }
        prev_heading = heading;
    }
    // After a dozen saturated steps the missile should have come around to
    // its pursuit bearing (just past east, since it drifted north while
    // turning).
    assert!(
        prev_heading > 1.2,
        "missile failed to come around after 12 steps: heading {prev_heading}"
    );
}

// ---- Launch logic ----

#[test]
fn test_site_launch_gated_by_acquisition_and_interval() {
    let mut site = base_site();
    site.acquisition_time_secs = 3.0;
    site.launch_interval_secs = 1.0e9;
    site.interceptor_count = 4;
    // Fighter inside max effective range from the start.
    let mut fighter = base_fighter(Position::new(0.0, 50.0), 0.0);
    fighter.speed_mach = 0.0;
    fighter.weapon_count = 0;

    let mut coordinator = EngagementCoordinator::new(&scenario(vec![site], vec![fighter])).unwrap();

    // Steps 1-2: track too young to shoot.
    for _ in 0..2 {
        let snap = coordinator.advance();
        assert!(snap.missiles.is_empty(), "launched before acquisition time");
    }
    // Step 3: time-in-track reaches 3 s, one interceptor away. The huge
    // launch interval then blocks any follow-up shot.
    let snap = coordinator.advance();
    assert_eq!(snap.missiles.len(), 1);
    assert_eq!(snap.missiles[0].side, LaunchSide::Site);
    assert_eq!(snap.sites[0].interceptors_remaining, 3);

    let snap = coordinator.advance();
    assert_eq!(snap.missiles.len(), 1, "launch interval should hold fire");
}

#[test]
fn test_fighter_launch_on_any_track_quirk() {
    // The striking fighter is itself undetectable (tiny RCS), but the site
    // is tracking a decoy — emissions alone make it targetable.
    let mut site = base_site();
    site.interceptor_count = 0;
    site.acquisition_time_secs = 1.0e9;

    let mut decoy = base_fighter(Position::new(0.0, 60.0), 0.0);
    decoy.speed_mach = 0.0;
    decoy.weapon_count = 0;

    let mut striker = base_fighter(Position::new(0.0, -30.0), 0.0);
    striker.speed_mach = 0.0;
    striker.weapon_count = 1;
    striker.rcs = uniform_rcs(1.0e-4);

    let mut coordinator =
        EngagementCoordinator::new(&scenario(vec![site], vec![decoy, striker])).unwrap();

    let snap = coordinator.advance();
    // Only the decoy is tracked.
    assert_eq!(snap.sites[0].tracks.len(), 1);
    assert_eq!(snap.sites[0].tracks[0].target, PlatformId(1));
    // The untracked striker still fired on the radiating site.
    assert_eq!(snap.missiles.len(), 1);
    let missile = &snap.missiles[0];
    assert_eq!(missile.side, LaunchSide::Fighter);
    assert_eq!(missile.launcher, PlatformId(2));
    assert_eq!(missile.target, PlatformId(0));

    // Let the weapon fly home: the site dies and the raid succeeds.
    let mut report_success = None;
    for _ in 0..120 {
        let snap = coordinator.advance();
        if snap.complete {
            report_success = Some(coordinator.report().unwrap().success);
            break;
        }
    }
    assert_eq!(
        report_success,
        Some(true),
        "site destroyed with both fighters alive should read as success"
    );
}

// ---- Termination ----

#[test]
fn test_termination_at_time_cap_with_no_launches() {
    // No interceptors, no weapons: nothing ever flies, and the engagement
    // runs out the 600 s clock.
    let mut site = base_site();
    site.interceptor_count = 0;
    let mut fighter = base_fighter(Position::new(0.0, 100.0), 0.0);
    fighter.speed_mach = 0.0;
    fighter.weapon_count = 0;

    let mut coordinator = EngagementCoordinator::new(&scenario(vec![site], vec![fighter])).unwrap();

    for _ in 0..600 {
        let snap = coordinator.advance();
        assert!(!snap.complete, "should not complete before the cap");
    }
    let snap = coordinator.advance();
    assert!(snap.complete, "should complete once past the cap");

    let report = coordinator.report().unwrap();
    assert!(!report.success);
    assert!(report.missiles.is_empty());
    assert!(report.elapsed_secs > 600.0);
}

#[test]
fn test_advance_after_completion_is_stable() {
    let mut site = base_site();
    site.interceptor_count = 0;
    site.acquisition_time_secs = 1.0e9;
    let mut fighter = base_fighter(Position::new(0.0, 5.0), 0.0);
    fighter.speed_mach = 0.0;
    fighter.weapon_count = 0;

    let mut coordinator = EngagementCoordinator::new(&scenario(vec![site], vec![fighter])).unwrap();
    coordinator.spawn_test_missile(MissileLaunch {
        side: LaunchSide::Site,
        launcher: PlatformId(0),
        target: PlatformId(1),
        position: Position::new(0.0, 0.0),
        heading: 0.0,
        speed_m_s: 1000.0,
        max_range_km: Some(50.0),
        kill_radius_km: 1.0,
        launched_at_secs: 0.0,
    });

    while !coordinator.advance().complete {}
    let elapsed = coordinator.time().elapsed_secs;
    let snap = coordinator.advance();
    assert!(snap.complete);
    assert_eq!(snap.time.elapsed_secs, elapsed, "time frozen after completion");
}

// ---- Full engagement ----

#[test]
fn test_end_to_end_engagement_resolves() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut fighter = base_fighter(Position::new(0.0, 120.0), 180.0);
    fighter.evasive = true;
    let spec = scenario(vec![base_site()], vec![fighter]);
    let mut coordinator = EngagementCoordinator::new(&spec).unwrap();

    let mut completed = false;
    for _ in 0..650 {
        if coordinator.advance().complete {
            completed = true;
            break;
        }
    }
    assert!(completed, "engagement should reach a terminal condition");

    let report = coordinator.report().unwrap();
    assert!(
        !report.missiles.is_empty(),
        "an approaching fighter should draw at least one launch"
    );
    assert!(report.elapsed_secs <= 601.0);
}

// ---- Precipitation ----

#[test]
fn test_precipitation_shrinks_envelopes() {
    let mut spec = scenario(
        vec![base_site()],
        vec![base_fighter(Position::new(0.0, 120.0), 180.0)],
    );
    spec.precipitation = Some(PrecipitationConfig {
        enabled: true,
        max_rain_rate_mm_hr: 100.0,
        cells_per_km: 1.0,
    });

    let mut coordinator = EngagementCoordinator::new(&spec).unwrap();
    let free_space: Vec<f64> = envelope_ranges(&coordinator);

    coordinator.load_precipitation(|_, _| 40.0).unwrap();
    let attenuated: Vec<f64> = envelope_ranges(&coordinator);

    assert_eq!(free_space.len(), attenuated.len());
    for (bucket, (fs, att)) in free_space.iter().zip(&attenuated).enumerate() {
        assert!(
            att < fs,
            "bucket {bucket}: heavy uniform rain should strictly shrink the \
             range, got {att} km vs free-space {fs} km"
        );
    }
}

fn envelope_ranges(coordinator: &EngagementCoordinator) -> Vec<f64> {
    coordinator
        .world()
        .query::<(&RadarSite, &DetectionEnvelope)>()
        .iter()
        .flat_map(|(_, (_, env))| env.ranges_km.clone())
        .collect()
}

// ---- Session registry ----

#[test]
fn test_session_registry_lifecycle() {
    let mut registry = SessionRegistry::new();
    let spec = scenario(
        vec![base_site()],
        vec![base_fighter(Position::new(0.0, 120.0), 180.0)],
    );

    let key = registry.create(&spec).unwrap();
    assert_eq!(registry.len(), 1);

    let snap = registry.advance(key).unwrap();
    assert_eq!(snap.time.step, 1);
    assert!(registry.report(key).unwrap().is_none());

    registry.end(key).unwrap();
    assert!(registry.is_empty());
    assert_eq!(
        registry.advance(key).unwrap_err(),
        SessionError::UnknownSession
    );
}

#[test]
fn test_session_registry_rejects_bad_config_and_keys() {
    let mut registry = SessionRegistry::new();

    let bad = scenario(vec![], vec![base_fighter(Position::new(0.0, 120.0), 180.0)]);
    assert_eq!(registry.create(&bad), Err(ConfigError::NoSites));
    assert!(registry.is_empty());

    let good = scenario(
        vec![base_site()],
        vec![base_fighter(Position::new(0.0, 120.0), 180.0)],
    );
    let key = registry.create(&good).unwrap();
    registry.end(key).unwrap();
    assert_eq!(registry.end(key), Err(SessionError::UnknownSession));
}

#[test]
fn test_sessions_are_isolated() {
    let mut registry = SessionRegistry::new();
    let spec = scenario(
        vec![base_site()],
        vec![base_fighter(Position::new(0.0, 120.0), 180.0)],
    );

    let a = registry.create(&spec).unwrap();
    let b = registry.create(&spec).unwrap();
    assert_ne!(a, b);

    for _ in 0..10 {
        registry.advance(a).unwrap();
    }
    assert_eq!(registry.coordinator(a).unwrap().time().step, 10);
    assert!(!registry.coordinator(a).unwrap().is_complete());
    assert_eq!(
        registry.coordinator(b).unwrap().time().step,
        0,
        "stepping one session must not touch another"
    );
}
