//! Session registry for hosts that run many games at once.
//!
//! Each session owns one [`GameEngine`] behind its own lock. Sessions share
//! nothing, so work on one never waits on another beyond the registry lookup.

use crate::config::EngineConfig;
use crate::games::tictactoe::GameEngine;
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Error from the session registry.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// No session with this ID.
    #[display("Session {} not found", _0)]
    NotFound(#[error(not(source))] SessionId),

    /// A session with this ID already exists.
    #[display("Session {} already exists", _0)]
    AlreadyExists(#[error(not(source))] SessionId),

    /// A thread panicked while holding a lock.
    #[display("Session lock poisoned")]
    LockPoisoned,
}

type SharedEngine = Arc<Mutex<GameEngine>>;

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, SharedEngine>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    /// Creates a new session with an engine built from `config`.
    #[instrument(skip(self, config))]
    pub fn create_session(
        &self,
        id: SessionId,
        config: &EngineConfig,
    ) -> Result<SessionId, SessionError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| SessionError::LockPoisoned)?;

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        let engine = GameEngine::with_config(config);
        sessions.insert(id.clone(), Arc::new(Mutex::new(engine)));

        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Runs `f` on the session's engine while holding its lock.
    ///
    /// The registry lock is released before `f` runs.
    #[instrument(skip(self, f))]
    pub fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameEngine) -> R,
    ) -> Result<R, SessionError> {
        let engine = {
            let sessions = self
                .sessions
                .lock()
                .map_err(|_| SessionError::LockPoisoned)?;
            sessions.get(id).cloned().ok_or_else(|| {
                debug!(session_id = id, "Session not found");
                SessionError::NotFound(id.to_string())
            })?
        };

        let mut engine = engine.lock().map_err(|_| SessionError::LockPoisoned)?;
        Ok(f(&mut engine))
    }

    /// Removes a session, returning its engine as it was last left.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<GameEngine, SessionError> {
        let removed = self
            .sessions
            .lock()
            .map_err(|_| SessionError::LockPoisoned)?
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let engine = removed
            .lock()
            .map_err(|_| SessionError::LockPoisoned)?
            .clone();
        info!(session_id = id, "Removed session");
        Ok(engine)
    }

    /// Lists all active session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Result<Vec<SessionId>, SessionError> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| SessionError::LockPoisoned)?;
        let mut ids: Vec<_> = sessions.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_duplicate_session_rejected() {
        let manager = SessionManager::new();
        manager.create_session("a".into(), &EngineConfig::default()).unwrap();
        assert_eq!(
            manager.create_session("a".into(), &EngineConfig::default()),
            Err(SessionError::AlreadyExists("a".into()))
        );
    }

    #[test]
    fn test_unknown_session() {
        let manager = SessionManager::new();
        assert_eq!(
            manager.with_session("missing", |engine| engine.scores()),
            Err(SessionError::NotFound("missing".into()))
        );
    }

    #[test]
    fn test_remove_returns_engine() {
        let manager = SessionManager::new();
        let config = EngineConfig::new(false, Some(Mark::X));
        manager.create_session("a".into(), &config).unwrap();
        manager
            .with_session("a", |engine| engine.apply_move(4).map(|_| ()))
            .unwrap()
            .unwrap();

        let engine = manager.remove_session("a").unwrap();

        assert_eq!(engine.history().len(), 1);
        assert!(manager.list_sessions().unwrap().is_empty());
    }
}
