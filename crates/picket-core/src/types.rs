//! Fundamental geometric and simulation types.
//!
//! The engagement is strictly planar: positions are 2D, in kilometers.
//! Bearings and headings are radians, 0 = North, clockwise positive.

use serde::{Deserialize, Serialize};

/// 2D position in simulation space (kilometers, Cartesian).
/// x = East, y = North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current step number (increments by 1 each step).
    pub step: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Range to another position in kilometers.
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing to another position in radians (0 = North, clockwise).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.atan2(dy).rem_euclid(std::f64::consts::TAU)
    }

    /// Bearing to another position in degrees [0, 360).
    pub fn bearing_deg_to(&self, other: &Position) -> f64 {
        self.bearing_to(other).to_degrees()
    }

    /// Position offset by `range_km` along `bearing` (radians, 0 = North).
    pub fn offset(&self, bearing: f64, range_km: f64) -> Position {
        Position::new(
            self.x + range_km * bearing.sin(),
            self.y + range_km * bearing.cos(),
        )
    }
}

impl SimTime {
    /// Advance by one step of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.step += 1;
        self.elapsed_secs += dt;
    }
}

/// Wrap an angle into [-π, π].
pub fn wrap_to_pi(a: f64) -> f64 {
    a.sin().atan2(a.cos())
}

/// Blend a heading toward a target heading along the shortest angular path.
///
/// Returns a heading equal to `current` modulo 2π but numerically continuous
/// with `prev`, so headings never jump across the ±π boundary.
pub fn update_heading(prev: f64, current: f64) -> f64 {
    prev + wrap_to_pi(current - prev)
}

/// Perpendicular distance from `point` to the segment `a`→`b`, with the
/// closest approach restricted to t ∈ [0, 1] along the segment.
pub fn point_segment_distance(point: &Position, a: &Position, b: &Position) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 1e-12 {
        return point.range_to(a);
    }
    let apx = point.x - a.x;
    let apy = point.y - a.y;
    let t = ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0);
    let closest = Position::new(a.x + abx * t, a.y + aby * t);
    point.range_to(&closest)
}
