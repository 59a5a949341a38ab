//! Session state store - one character and quest log per session
//!
//! The manager owns every session's character exclusively; handlers reach a
//! character only through a `SessionId`, so cross-session isolation holds by
//! construction. The manager sits behind `tokio::sync::RwLock` in `AppState`:
//! one writer at a time per mutation, readers always see a consistent
//! snapshot (never a half-applied attribute replacement or objective
//! increment).

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::entities::Character;
use crate::domain::error::EngineError;
use crate::domain::services::attribute_deriver;
use crate::domain::value_objects::{Attributes, SessionId};

/// One active play session
pub struct GameSession {
    pub id: SessionId,
    pub character: Character,
    pub created_at: DateTime<Utc>,
}

impl GameSession {
    fn new(character: Character) -> Self {
        Self {
            id: SessionId::new(),
            character,
            created_at: Utc::now(),
        }
    }
}

/// Error types for session operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Manages active game sessions
pub struct SessionManager {
    /// Active sessions by session ID
    sessions: HashMap<SessionId, GameSession>,
    /// Attributes used when session creation supplies none
    default_attributes: Attributes,
    /// Level used when session creation supplies none
    default_level: i32,
}

impl SessionManager {
    pub fn new(default_attributes: Attributes, default_level: i32) -> Self {
        Self {
            sessions: HashMap::new(),
            default_attributes,
            default_level,
        }
    }

    /// Create a session with its character, deriving combat stats immediately
    pub fn create_session(
        &mut self,
        attributes: Option<Attributes>,
        level: Option<i32>,
    ) -> Result<(SessionId, &Character), SessionError> {
        let attributes = attributes.unwrap_or(self.default_attributes);
        let level = level.unwrap_or(self.default_level);
        let derived = attribute_deriver::derive(&attributes, level)?;

        let session = GameSession::new(Character::new(attributes, level, derived));
        let session_id = session.id;
        self.sessions.insert(session_id, session);
        tracing::info!(
            "Session created: {} ({} active)",
            session_id,
            self.session_count()
        );

        Ok((session_id, &self.sessions[&session_id].character))
    }

    /// End a session, dropping its character and quest log
    pub fn end_session(&mut self, session_id: SessionId) -> Result<(), SessionError> {
        let session = self
            .sessions
            .remove(&session_id)
            .ok_or(SessionError::NotFound(session_id))?;

        let lifetime = Utc::now() - session.created_at;
        tracing::info!(
            "Session ended: {} (lived {}s, {} quests in log)",
            session_id,
            lifetime.num_seconds(),
            session.character.quest_log.len()
        );
        Ok(())
    }

    pub fn character(&self, session_id: SessionId) -> Result<&Character, SessionError> {
        self.sessions
            .get(&session_id)
            .map(|s| &s.character)
            .ok_or(SessionError::NotFound(session_id))
    }

    pub fn character_mut(&mut self, session_id: SessionId) -> Result<&mut Character, SessionError> {
        self.sessions
            .get_mut(&session_id)
            .map(|s| &mut s.character)
            .ok_or(SessionError::NotFound(session_id))
    }

    /// Replace a character's attributes and level, recomputing derived stats
    ///
    /// Derivation runs before anything is written, so a failed derive leaves
    /// the character exactly as it was.
    pub fn replace_attributes(
        &mut self,
        session_id: SessionId,
        attributes: Attributes,
        level: i32,
    ) -> Result<&Character, SessionError> {
        let session = self
            .sessions
            .get_mut(&session_id)
            .ok_or(SessionError::NotFound(session_id))?;

        let derived = attribute_deriver::derive(&attributes, level)?;
        session.character.replace_attributes(attributes, level, derived);
        tracing::debug!("Attributes replaced for session {}", session_id);

        Ok(&session.character)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
