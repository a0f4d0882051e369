//! Demo account flow for HealthSync
//!
//! Registration is gated by a one-time code that is handed straight back to
//! the caller instead of being delivered. Passwords are compared in plaintext.
//! Sessions are opaque bearer tokens held in memory.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;
use validator::Validate;

use health_sync_data::models::{AccountRecord, OtpRecord, SessionRecord};
use health_sync_data::repository::{
    AccountRepositoryTrait, InMemoryAccountRepository, InMemoryOtpRepository, InMemorySessionRepository,
    OtpRepositoryTrait, RepositoryError, SessionRepositoryTrait,
};

use crate::entities::account::{IssuedOtp, LoginRequest, OtpRequest, RegisterRequest, Session, UserInfo};
use crate::services::validation::describe_validation_errors;

pub mod logging;

use logging::{log_failed_login, log_logout, log_otp_issued, log_registration, log_successful_login};

/// Account service errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Email or phone missing from a code request
    #[error("Please provide email and phone.")]
    MissingContact,

    /// Code missing or not matching the pending one
    #[error("Invalid or missing OTP.")]
    InvalidOtp,

    /// Unknown user or wrong password
    #[error("Invalid credentials. Please check username/password.")]
    InvalidCredentials,

    /// Missing, unknown or expired session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RepositoryError> for AccountServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(msg) => AccountServiceError::ValidationError(msg),
            other => AccountServiceError::RepositoryError(other.to_string()),
        }
    }
}

/// Tunables for the account service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountSettings {
    /// How long a session stays valid after login
    pub session_ttl: Duration,
    /// How long an issued one-time code can be redeemed
    pub otp_ttl: Duration,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            session_ttl: Duration::minutes(60),
            otp_ttl: Duration::minutes(10),
        }
    }
}

/// Trait for account operations
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Issue a one-time code for an email/phone pair
    async fn request_otp(&self, request: OtpRequest) -> Result<IssuedOtp, AccountServiceError>;

    /// Register an account using a previously issued code
    async fn register(&self, request: RegisterRequest) -> Result<UserInfo, AccountServiceError>;

    /// Check credentials and open a session
    async fn login(&self, request: LoginRequest) -> Result<Session, AccountServiceError>;

    /// Resolve a session token to its user
    async fn authenticate(&self, token: &str) -> Result<UserInfo, AccountServiceError>;

    /// Close a session
    async fn logout(&self, token: &str) -> Result<(), AccountServiceError>;

    /// Number of registered accounts. Doubles as a store liveness check.
    async fn account_count(&self) -> Result<usize, AccountServiceError>;
}

/// Account service over the account, code and session repositories
#[derive(Debug, Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountRepositoryTrait>,
    otps: Arc<dyn OtpRepositoryTrait>,
    sessions: Arc<dyn SessionRepositoryTrait>,
    settings: AccountSettings,
}

impl AccountService {
    /// Create a new account service
    pub fn new(
        accounts: Arc<dyn AccountRepositoryTrait>,
        otps: Arc<dyn OtpRepositoryTrait>,
        sessions: Arc<dyn SessionRepositoryTrait>,
        settings: AccountSettings,
    ) -> Self {
        Self {
            accounts,
            otps,
            sessions,
            settings,
        }
    }
}

/// Six-digit code in 100000..=999999
fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// Login key for a registration: the full name, or the email when no name was given
fn username_key(request: &RegisterRequest) -> String {
    let full_name = request.full_name.trim();
    if full_name.is_empty() {
        request.email.trim().to_string()
    } else {
        full_name.to_string()
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    async fn request_otp(&self, request: OtpRequest) -> Result<IssuedOtp, AccountServiceError> {
        let email = request.email.trim();
        let phone = request.phone.trim();
        if email.is_empty() || phone.is_empty() {
            return Err(AccountServiceError::MissingContact);
        }
        if let Err(errors) = request.validate() {
            return Err(AccountServiceError::ValidationError(describe_validation_errors(&errors)));
        }

        let now = Utc::now();
        self.otps.purge_expired(now).await?;

        let record = OtpRecord {
            email: email.to_string(),
            phone: phone.to_string(),
            code: generate_otp(),
            issued_at: now,
            expires_at: now + self.settings.otp_ttl,
        };
        self.otps.put(record.clone()).await?;
        log_otp_issued(email);

        Ok(IssuedOtp {
            email: record.email,
            code: record.code,
            issued_at: record.issued_at,
            expires_at: record.expires_at,
        })
    }

    async fn register(&self, request: RegisterRequest) -> Result<UserInfo, AccountServiceError> {
        if let Err(errors) = request.validate() {
            return Err(AccountServiceError::ValidationError(describe_validation_errors(&errors)));
        }

        let email = request.email.trim();
        let otp = request.otp.trim();
        let matches = match self.otps.get(email).await? {
            Some(pending) if pending.is_expired(Utc::now()) => {
                debug!("Pending one-time code expired");
                self.otps.take(email).await?;
                false
            }
            Some(pending) => !otp.is_empty() && pending.code == otp,
            None => false,
        };
        // The code is consumed before the account is stored
        if !matches || self.otps.take(email).await?.is_none() {
            log_registration(email, false, Some("Invalid or missing OTP"));
            return Err(AccountServiceError::InvalidOtp);
        }

        let username = username_key(&request);
        let record = AccountRecord {
            username: username.clone(),
            full_name: request.full_name.trim().to_string(),
            email: email.to_string(),
            phone: request.phone.trim().to_string(),
            password: request.password,
            created_at: Utc::now(),
        };

        if self.accounts.upsert(record.clone()).await?.is_some() {
            warn!(username = %username, "Registration replaced an existing account");
        }
        log_registration(&username, true, None);

        Ok(UserInfo::from(record))
    }

    async fn login(&self, request: LoginRequest) -> Result<Session, AccountServiceError> {
        let account = match self.accounts.get(&request.username).await? {
            Some(account) if account.password == request.password => account,
            Some(_) => {
                log_failed_login(&request.username, "Password mismatch");
                return Err(AccountServiceError::InvalidCredentials);
            }
            None => {
                log_failed_login(&request.username, "Unknown user");
                return Err(AccountServiceError::InvalidCredentials);
            }
        };

        let now = Utc::now();
        self.sessions.purge_expired(now).await?;

        let session = SessionRecord {
            token: Uuid::new_v4().to_string(),
            username: account.username.clone(),
            created_at: now,
            expires_at: now + self.settings.session_ttl,
        };
        self.sessions.insert(session.clone()).await?;
        log_successful_login(&account.username);

        Ok(Session {
            token: session.token,
            expires_at: session.expires_at,
            user: UserInfo::from(account),
        })
    }

    async fn authenticate(&self, token: &str) -> Result<UserInfo, AccountServiceError> {
        let session = self
            .sessions
            .get(token)
            .await?
            .ok_or_else(|| AccountServiceError::Unauthorized("Unknown session".to_string()))?;

        if session.is_expired(Utc::now()) {
            debug!(username = %session.username, "Session expired");
            self.sessions.remove(token).await?;
            return Err(AccountServiceError::Unauthorized("Session expired".to_string()));
        }

        let account = self
            .accounts
            .get(&session.username)
            .await?
            .ok_or_else(|| AccountServiceError::Unauthorized("Account no longer exists".to_string()))?;

        Ok(UserInfo::from(account))
    }

    async fn logout(&self, token: &str) -> Result<(), AccountServiceError> {
        match self.sessions.remove(token).await? {
            Some(session) => {
                log_logout(&session.username);
                Ok(())
            }
            None => Err(AccountServiceError::Unauthorized("Unknown session".to_string())),
        }
    }

    async fn account_count(&self) -> Result<usize, AccountServiceError> {
        Ok(self.accounts.count().await?)
    }
}

/// Create an account service backed by fresh in-memory repositories
pub fn create_default_account_service(settings: AccountSettings) -> AccountService {
    AccountService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(InMemoryOtpRepository::new()),
        Arc::new(InMemorySessionRepository::new()),
        settings,
    )
}
