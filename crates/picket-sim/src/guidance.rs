//! Guidance algorithms for in-flight missiles.
//!
//! Pursuit steering toward a moving target under a g-limited turn rate,
//! with angular continuity across the ±π boundary.

use picket_core::constants::G_ACCEL_M_S2;
use picket_core::types::{update_heading, wrap_to_pi, Position};

/// Maximum turn rate (rad/s) at the given speed under a g-limit.
pub fn max_turn_rate(g_limit: f64, speed_m_s: f64) -> f64 {
    if speed_m_s <= 0.0 {
        return 0.0;
    }
    g_limit * G_ACCEL_M_S2 / speed_m_s
}

/// Steer a heading toward the bearing to `target`, clamped to the turn
/// achievable in one step of `dt` seconds under `g_limit`.
///
/// A target closer than ~1 m yields a degenerate bearing; the current
/// heading is kept to avoid steering on noise.
pub fn steer_toward(
    position: &Position,
    heading: f64,
    speed_m_s: f64,
    target: &Position,
    g_limit: f64,
    dt: f64,
) -> f64 {
    if position.range_to(target) < 1.0e-3 {
        return heading;
    }
    let desired = position.bearing_to(target);
    let delta = wrap_to_pi(desired - heading);
    let limit = max_turn_rate(g_limit, speed_m_s) * dt;
    let clamped = delta.clamp(-limit, limit);
    update_heading(heading, heading + clamped)
}
