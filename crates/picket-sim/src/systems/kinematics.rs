//! Kinematic integration systems.
//!
//! Positions advance by `speed · heading-unit-vector · dt`. Missiles also
//! record their previous position (for the segment intercept test) and
//! accumulate traveled distance (for the max-range check).

use hecs::World;

use picket_core::components::*;
use picket_core::enums::PlatformStatus;
use picket_core::types::Position;

/// Integrate all active missiles forward one step.
pub fn run_missiles(world: &mut World, dt: f64) {
    for (_entity, (pos, motion, missile)) in
        world.query_mut::<(&mut Position, &Motion, &mut Missile)>()
    {
        if missile.status.is_resolved() {
            continue;
        }
        missile.prev_position = *pos;
        let step_km = motion.speed_m_s * dt / 1000.0;
        pos.x += step_km * motion.heading.sin();
        pos.y += step_km * motion.heading.cos();
        missile.traveled_km += step_km;
    }
}

/// Integrate all active fighters forward one step. Destroyed fighters are
/// frozen in place.
pub fn run_fighters(world: &mut World, dt: f64) {
    for (_entity, (_fighter, pos, motion, state)) in
        world.query_mut::<(&Fighter, &mut Position, &Motion, &FighterState)>()
    {
        if state.status == PlatformStatus::Destroyed {
            continue;
        }
        let step_km = motion.speed_m_s * dt / 1000.0;
        pos.x += step_km * motion.heading.sin();
        pos.y += step_km * motion.heading.cos();
    }
}
