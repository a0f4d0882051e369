use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::OtpRecord;
use super::errors::RepositoryError;

/// Repository trait for pending one-time codes, keyed by email
#[async_trait]
pub trait OtpRepositoryTrait: Send + Sync + std::fmt::Debug {
    /// Store a code, replacing any code already pending for the same email
    async fn put(&self, record: OtpRecord) -> Result<(), RepositoryError>;

    /// Look up the pending code for an email without consuming it
    async fn get(&self, email: &str) -> Result<Option<OtpRecord>, RepositoryError>;

    /// Remove and return the pending code for an email
    async fn take(&self, email: &str) -> Result<Option<OtpRecord>, RepositoryError>;

    /// Drop every code that has expired at `now`, returning how many were dropped
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, RepositoryError>;
}

/// In-memory store of pending one-time codes
#[derive(Debug, Clone, Default)]
pub struct InMemoryOtpRepository {
    pending: Arc<RwLock<HashMap<String, OtpRecord>>>,
}

impl InMemoryOtpRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpRepositoryTrait for InMemoryOtpRepository {
    async fn put(&self, record: OtpRecord) -> Result<(), RepositoryError> {
        let mut store = self.pending.write()?;
        if store.insert(record.email.clone(), record).is_some() {
            debug!("Replaced a pending one-time code");
        }
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<OtpRecord>, RepositoryError> {
        let store = self.pending.read()?;
        Ok(store.get(email).cloned())
    }

    async fn take(&self, email: &str) -> Result<Option<OtpRecord>, RepositoryError> {
        let mut store = self.pending.write()?;
        Ok(store.remove(email))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, RepositoryError> {
        let mut store = self.pending.write()?;
        let before = store.len();
        store.retain(|_, record| !record.is_expired(now));
        let purged = before - store.len();
        if purged > 0 {
            debug!(purged, "Purged expired one-time codes");
        }
        Ok(purged)
    }
}
