use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use shared::domain::{Section, SessionId, SessionState};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session not found: {id}")]
    SessionNotFound { id: SessionId },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl SessionRecord {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            state: SessionState::new(),
            created_at: now,
            last_seen: now,
        }
    }
}

/// Memory-resident session table. Cloning shares the table.
///
/// Nothing here is written to disk; dropping the last handle (or restarting the
/// process) ends every session.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    /// Sets the session to Home only if it has no state yet.
    pub async fn initialize(&self, id: SessionId) -> SessionState {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let record = sessions.entry(id).or_insert_with(|| {
            debug!(session_id = %id, "session initialized");
            SessionRecord::new(now)
        });
        record.last_seen = now;
        record.state
    }

    pub async fn create(&self) -> (SessionId, SessionState) {
        let id = SessionId::generate();
        let state = self.initialize(id).await;
        (id, state)
    }

    pub async fn get(&self, id: SessionId) -> Option<SessionState> {
        let mut sessions = self.sessions.write().await;
        let record = sessions.get_mut(&id)?;
        record.last_seen = Utc::now();
        Some(record.state)
    }

    pub async fn record(&self, id: SessionId) -> Option<SessionRecord> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn select(&self, id: SessionId, section: Section) -> Result<SessionState> {
        let mut sessions = self.sessions.write().await;
        let record = sessions
            .get_mut(&id)
            .ok_or(StoreError::SessionNotFound { id })?;
        record.state.select(section);
        record.last_seen = Utc::now();
        Ok(record.state)
    }

    pub async fn end(&self, id: SessionId) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Drops every session idle for at least `idle_ttl` as of `now`. A deadline
    /// past the end of the calendar never expires.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, record| {
            record
                .last_seen
                .checked_add_signed(self.idle_ttl)
                .map_or(true, |deadline| deadline > now)
        });
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
