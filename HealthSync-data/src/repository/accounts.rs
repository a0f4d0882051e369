use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use tracing::debug;

use crate::models::AccountRecord;
use super::errors::RepositoryError;

/// Repository trait for registered accounts
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync + std::fmt::Debug {
    /// Store an account under its username, returning the account it replaced
    async fn upsert(&self, account: AccountRecord) -> Result<Option<AccountRecord>, RepositoryError>;

    /// Look up an account by username
    async fn get(&self, username: &str) -> Result<Option<AccountRecord>, RepositoryError>;

    /// Number of registered accounts
    async fn count(&self) -> Result<usize, RepositoryError>;
}

/// In-memory account table. Lives for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, AccountRecord>>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepositoryTrait for InMemoryAccountRepository {
    async fn upsert(&self, account: AccountRecord) -> Result<Option<AccountRecord>, RepositoryError> {
        if account.username.trim().is_empty() {
            return Err(RepositoryError::Validation("username must not be empty".to_string()));
        }

        let mut store = self.accounts.write()?;
        debug!(username = %account.username, "Storing account");
        Ok(store.insert(account.username.clone(), account))
    }

    async fn get(&self, username: &str) -> Result<Option<AccountRecord>, RepositoryError> {
        let store = self.accounts.read()?;
        Ok(store.get(username).cloned())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.accounts.read()?;
        Ok(store.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account(username: &str, password: &str) -> AccountRecord {
        AccountRecord {
            username: username.to_string(),
            full_name: username.to_string(),
            email: format!("{}@example.com", username.to_lowercase()),
            phone: "555-0100".to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let repo = InMemoryAccountRepository::new();

        let replaced = repo.upsert(account("Divya", "secret")).await.unwrap();
        assert!(replaced.is_none());

        let stored = repo.get("Divya").await.unwrap().unwrap();
        assert_eq!(stored.password, "secret");
        assert!(repo.get("Soumya").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_account() {
        let repo = InMemoryAccountRepository::new();
        repo.upsert(account("Divya", "first")).await.unwrap();

        let replaced = repo.upsert(account("Divya", "second")).await.unwrap();
        assert_eq!(replaced.map(|a| a.password), Some("first".to_string()));
        assert_eq!(repo.get("Divya").await.unwrap().unwrap().password, "second");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_upsert_rejects_blank_username() {
        let repo = InMemoryAccountRepository::new();
        let result = repo.upsert(account("   ", "secret")).await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryAccountRepository::new();
        let other = repo.clone();
        repo.upsert(account("Divya", "secret")).await.unwrap();
        assert!(other.get("Divya").await.unwrap().is_some());
    }
}
