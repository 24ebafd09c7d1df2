//! Fighter maneuver state machine.
//!
//! Computes the next heading for a fighter based on its maneuver mode and
//! the threat picture. Evasive flight steers directly away from the nearest
//! radar site, bounded by the fighter g-limit.

use picket_core::constants::{FIGHTER_G_LIMIT, G_ACCEL_M_S2};
use picket_core::enums::ManeuverMode;
use picket_core::types::{update_heading, wrap_to_pi, Position};

/// Input to the maneuver FSM for a single fighter.
pub struct ManeuverContext {
    pub mode: ManeuverMode,
    pub position: Position,
    /// Current heading (radians, 0 = North, clockwise).
    pub heading: f64,
    /// Current speed (m/s).
    pub speed_m_s: f64,
    /// Position of the nearest surviving radar site, if any.
    pub nearest_site: Option<Position>,
    /// Step duration (seconds).
    pub dt: f64,
}

/// Output from the maneuver FSM.
pub struct ManeuverUpdate {
    pub new_heading: f64,
}

/// Maximum turn rate (rad/s) at the given speed under the fighter g-limit.
pub fn max_turn_rate(speed_m_s: f64) -> f64 {
    if speed_m_s <= 0.0 {
        return 0.0;
    }
    FIGHTER_G_LIMIT * G_ACCEL_M_S2 / speed_m_s
}

/// Evaluate the FSM for one fighter. Returns the updated heading.
pub fn evaluate(ctx: &ManeuverContext) -> ManeuverUpdate {
    let hold = ManeuverUpdate {
        new_heading: ctx.heading,
    };

    match ctx.mode {
        ManeuverMode::None => hold,
        ManeuverMode::Evasive => {
            let site = match ctx.nearest_site {
                Some(p) => p,
                None => return hold,
            };
            // Steer to put the site directly astern.
            let away = ctx.position.bearing_to(&site) + std::f64::consts::PI;
            let delta = wrap_to_pi(away - ctx.heading);
            let limit = max_turn_rate(ctx.speed_m_s) * ctx.dt;
            let clamped = delta.clamp(-limit, limit);
            ManeuverUpdate {
                new_heading: update_heading(ctx.heading, ctx.heading + clamped),
            }
        }
    }
}
