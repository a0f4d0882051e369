use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::SessionRecord;
use super::errors::RepositoryError;

/// Repository trait for login sessions, keyed by token
#[async_trait]
pub trait SessionRepositoryTrait: Send + Sync + std::fmt::Debug {
    /// Store a new session
    async fn insert(&self, session: SessionRecord) -> Result<(), RepositoryError>;

    /// Look up a session by token
    async fn get(&self, token: &str) -> Result<Option<SessionRecord>, RepositoryError>;

    /// Remove a session, returning it if it existed
    async fn remove(&self, token: &str) -> Result<Option<SessionRecord>, RepositoryError>;

    /// Drop every session that has expired at `now`, returning how many were dropped
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, RepositoryError>;
}

/// In-memory session table
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
}

impl InMemorySessionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepositoryTrait for InMemorySessionRepository {
    async fn insert(&self, session: SessionRecord) -> Result<(), RepositoryError> {
        if session.token.is_empty() {
            return Err(RepositoryError::Validation("session token must not be empty".to_string()));
        }

        let mut store = self.sessions.write()?;
        store.insert(session.token.clone(), session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<SessionRecord>, RepositoryError> {
        let store = self.sessions.read()?;
        Ok(store.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<Option<SessionRecord>, RepositoryError> {
        let mut store = self.sessions.write()?;
        Ok(store.remove(token))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, RepositoryError> {
        let mut store = self.sessions.write()?;
        let before = store.len();
        store.retain(|_, session| !session.is_expired(now));
        let purged = before - store.len();
        if purged > 0 {
            debug!(purged, "Purged expired sessions");
        }
        Ok(purged)
    }
}
