//! Fighter decision layer for the PICKET engagement simulation.
//!
//! Pure functions that compute maneuver headings and weapon-release
//! decisions from plain data. No ECS dependency.

pub mod fsm;
pub mod launch;

pub use fsm::{evaluate, ManeuverContext, ManeuverUpdate};
pub use launch::should_launch_air_to_ground;
