//! Core types and definitions for the PICKET engagement simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, scenario configuration, state snapshots, events, errors,
//! and constants. It has no dependency on any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
