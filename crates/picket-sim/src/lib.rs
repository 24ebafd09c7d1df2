//! Engagement simulation engine for PICKET.
//!
//! Owns the hecs ECS world, advances the engagement one fixed time step at
//! a time, and produces `StepSnapshot`s and a terminal `EngagementReport`.
//! Completely headless, enabling deterministic testing.

pub mod coordinator;
pub mod guidance;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use coordinator::EngagementCoordinator;
pub use picket_core as core;
pub use session::{SessionKey, SessionRegistry};

#[cfg(test)]
mod tests;
