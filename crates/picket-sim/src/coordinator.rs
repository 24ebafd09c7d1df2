//! Engagement coordinator — the core of the simulation.
//!
//! `EngagementCoordinator` owns the hecs ECS world, advances the engagement
//! one fixed time step at a time, and produces `StepSnapshot`s plus a
//! terminal `EngagementReport`. Completely headless, enabling deterministic
//! testing.

use std::collections::HashMap;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use picket_core::components::*;
use picket_core::config::{PrecipitationConfig, RadarSiteSpec, ScenarioSpec};
use picket_core::constants::SIM_TIME_CAP_SECS;
use picket_core::enums::PlatformStatus;
use picket_core::error::{ConfigError, RadarError};
use picket_core::events::EngagementEvent;
use picket_core::state::{EngagementReport, StepSnapshot};
use picket_core::types::{Position, SimTime};
use picket_radar::{AttenuationTable, RainField};

use crate::systems;
use crate::world_setup;

/// The engagement coordinator. Owns the ECS world and all run state.
///
/// Exactly one engagement run per instance; hosting systems hand out one
/// coordinator per session key (see [`crate::session::SessionRegistry`]).
pub struct EngagementCoordinator {
    world: World,
    time: SimTime,
    dt: f64,
    grid_km: f64,
    precipitation: Option<PrecipitationConfig>,
    rng: ChaCha8Rng,
    next_platform_id: u32,
    /// Identity → entity lookup for target resolution.
    index: HashMap<PlatformId, hecs::Entity>,
    /// Rain field + attenuation table, present once precipitation is loaded.
    rain: Option<(RainField, AttenuationTable)>,
    events: Vec<EngagementEvent>,
    complete: bool,
    report: Option<EngagementReport>,
}

impl EngagementCoordinator {
    /// Create a coordinator from a validated scenario. Detection envelopes
    /// are built free-space; load a precipitation field afterwards to
    /// resample them under rain.
    pub fn new(spec: &ScenarioSpec) -> Result<Self, ConfigError> {
        spec.validate()?;

        let mut world = World::new();
        let mut index = HashMap::new();
        let mut next_platform_id = 0u32;

        for site_spec in &spec.sites {
            let id = PlatformId(next_platform_id);
            next_platform_id += 1;
            let entity = world_setup::spawn_site(&mut world, id, site_spec);
            index.insert(id, entity);
        }
        for fighter_spec in &spec.fighters {
            let id = PlatformId(next_platform_id);
            next_platform_id += 1;
            let entity = world_setup::spawn_fighter(&mut world, id, fighter_spec);
            index.insert(id, entity);
        }

        let mut coordinator = Self {
            world,
            time: SimTime::default(),
            dt: spec.time_step_secs,
            grid_km: spec.grid_km,
            precipitation: spec.precipitation.clone(),
            rng: ChaCha8Rng::seed_from_u64(spec.seed),
            next_platform_id,
            index,
            rain: None,
            events: Vec::new(),
            complete: false,
            report: None,
        };
        coordinator.rebuild_envelopes();
        Ok(coordinator)
    }

    /// Load (or reload) the precipitation field from a sampling function
    /// over the scenario grid, then resample every site's detection
    /// envelope under it.
    ///
    /// Table or field failures leave the coordinator on free-space
    /// envelopes — resource errors are never fatal.
    pub fn load_precipitation<F>(&mut self, sampler: F) -> Result<(), RadarError>
    where
        F: Fn(f64, f64) -> f64,
    {
        let (cells_per_km, cap_mm_hr) = match self.precipitation.as_ref() {
            Some(cfg) if cfg.enabled => (cfg.cells_per_km, cfg.max_rain_rate_mm_hr),
            _ => {
                self.rain = None;
                self.rebuild_envelopes();
                return Ok(());
            }
        };

        let table = AttenuationTable::load()?;
        let origin = Position::new(-self.grid_km / 2.0, -self.grid_km / 2.0);
        let field = RainField::from_fn(origin, self.grid_km, cells_per_km, cap_mm_hr, sampler);
        self.rain = Some((field, table));
        self.rebuild_envelopes();
        Ok(())
    }

    /// Advance the engagement by one step and return the resulting snapshot.
    /// Once complete, further calls return the final state unchanged.
    pub fn advance(&mut self) -> StepSnapshot {
        if !self.complete {
            self.time.advance(self.dt);
            self.run_systems();
            self.check_completion();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.complete, events)
    }

    /// Whether the engagement has reached a terminal condition.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The terminal report, once the engagement is complete.
    pub fn report(&self) -> Option<&EngagementReport> {
        self.report.as_ref()
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a missile directly (for tests that bypass launch logic).
    #[cfg(test)]
    pub fn spawn_test_missile(&mut self, launch: world_setup::MissileLaunch) -> PlatformId {
        let id = PlatformId(self.next_platform_id);
        self.next_platform_id += 1;
        let entity = world_setup::spawn_missile(&mut self.world, id, launch);
        self.index.insert(id, entity);
        id
    }

    /// Rebuild every site's detection envelope against the current rain
    /// state (free-space when no field is loaded).
    fn rebuild_envelopes(&mut self) {
        let rain = self.rain.as_ref().map(|(field, table)| (field, table));
        let envelopes: Vec<(hecs::Entity, DetectionEnvelope)> = self
            .world
            .query::<(&RadarSite, &RadarSiteSpec)>()
            .iter()
            .map(|(entity, (_, spec))| (entity, world_setup::build_envelope(spec, rain)))
            .collect();

        for (entity, envelope) in envelopes {
            if let Ok(mut slot) = self.world.get::<&mut DetectionEnvelope>(entity) {
                *slot = envelope;
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;
        // 1. Tracking update
        systems::tracking::run(&mut self.world, now, self.dt, &mut self.events);
        // 2. Site launch logic
        systems::fire_control::run(
            &mut self.world,
            &mut self.next_platform_id,
            &mut self.index,
            now,
            &mut self.events,
        );
        // 3. Aircraft launch logic
        systems::strike::run(
            &mut self.world,
            &mut self.next_platform_id,
            &mut self.index,
            now,
            &mut self.events,
        );
        // 4. Missile guidance
        systems::missile_guidance::run(&mut self.world, &mut self.rng, self.dt);
        // 5. Missile kinematics
        systems::kinematics::run_missiles(&mut self.world, self.dt);
        // 6. Fighter evasive maneuver
        systems::evasion::run(&mut self.world, self.dt);
        // 7. Fighter kinematics
        systems::kinematics::run_fighters(&mut self.world, self.dt);
        // 8. Kill evaluation
        systems::intercept::run(&mut self.world, &self.index, now, &mut self.events);
    }

    /// Evaluate the completion conditions and, if met, build the report.
    fn check_completion(&mut self) {
        let any_site_destroyed = self
            .world
            .query::<&SiteState>()
            .iter()
            .any(|(_, s)| s.status == PlatformStatus::Destroyed);
        let any_fighter_destroyed = self
            .world
            .query::<&FighterState>()
            .iter()
            .any(|(_, s)| s.status == PlatformStatus::Destroyed);

        let mut launched = 0usize;
        let mut unresolved = 0usize;
        for (_, missile) in self.world.query::<&Missile>().iter() {
            launched += 1;
            if !missile.status.is_resolved() {
                unresolved += 1;
            }
        }

        let all_missiles_resolved = launched > 0 && unresolved == 0;
        let time_expired = self.time.elapsed_secs > SIM_TIME_CAP_SECS;

        if !(any_site_destroyed || any_fighter_destroyed || all_missiles_resolved || time_expired)
        {
            return;
        }

        self.complete = true;
        let success = any_site_destroyed && !any_fighter_destroyed;
        self.report = Some(EngagementReport {
            success,
            elapsed_secs: self.time.elapsed_secs,
            missiles: systems::snapshot::build_missile_records(&self.world),
        });
        info!(
            success,
            elapsed_secs = self.time.elapsed_secs,
            "engagement complete"
        );
        self.events
            .push(EngagementEvent::EngagementComplete { success });
    }
}
