//! Session-keyed registry of engagement coordinators.
//!
//! Each hosted run gets its own coordinator behind an opaque key; a
//! mutating call with a missing or stale key is rejected at the boundary
//! with the simulation state untouched. No ambient or global state: the
//! registry is constructed explicitly and borrowed mutably throughout.

use std::collections::HashMap;

use picket_core::config::ScenarioSpec;
use picket_core::error::{ConfigError, SessionError};
use picket_core::state::{EngagementReport, StepSnapshot};

use crate::coordinator::EngagementCoordinator;

/// Opaque handle to one hosted engagement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey(u64);

/// Registry mapping session keys to their coordinator instances.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionKey, EngagementCoordinator>,
    next_key: u64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a coordinator for the scenario and issue its session key.
    pub fn create(&mut self, spec: &ScenarioSpec) -> Result<SessionKey, ConfigError> {
        let coordinator = EngagementCoordinator::new(spec)?;
        let key = SessionKey(self.next_key);
        self.next_key += 1;
        self.sessions.insert(key, coordinator);
        Ok(key)
    }

    /// Advance the keyed engagement one step.
    pub fn advance(&mut self, key: SessionKey) -> Result<StepSnapshot, SessionError> {
        self.sessions
            .get_mut(&key)
            .map(EngagementCoordinator::advance)
            .ok_or(SessionError::UnknownSession)
    }

    /// Read-only access to a session's coordinator.
    pub fn coordinator(&self, key: SessionKey) -> Result<&EngagementCoordinator, SessionError> {
        self.sessions.get(&key).ok_or(SessionError::UnknownSession)
    }

    /// Mutable access to a session's coordinator (e.g. to load a
    /// precipitation field before stepping).
    pub fn coordinator_mut(
        &mut self,
        key: SessionKey,
    ) -> Result<&mut EngagementCoordinator, SessionError> {
        self.sessions
            .get_mut(&key)
            .ok_or(SessionError::UnknownSession)
    }

    /// The terminal report for a session, if its engagement has completed.
    pub fn report(&self, key: SessionKey) -> Result<Option<&EngagementReport>, SessionError> {
        self.coordinator(key).map(EngagementCoordinator::report)
    }

    /// End a session, dropping its coordinator.
    pub fn end(&mut self, key: SessionKey) -> Result<(), SessionError> {
        self.sessions
            .remove(&key)
            .map(|_| ())
            .ok_or(SessionError::UnknownSession)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
