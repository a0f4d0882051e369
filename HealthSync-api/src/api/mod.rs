pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;

use health_sync_domain::auth::{create_default_account_service, AccountServiceTrait};
use health_sync_domain::health::{HealthService, HealthServiceTrait};
use health_sync_domain::services::{create_default_assessment_service, AssessmentServiceTrait};
use health_sync_domain::speech::{create_voice_output, UnavailableVoice, VoiceOutput};

use crate::config::{AppConfig, ConfigError};

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Classifier and report builder
    pub assessments: Arc<dyn AssessmentServiceTrait>,
    /// Demo accounts and sessions
    pub accounts: Arc<dyn AccountServiceTrait>,
    /// Voice output for spoken verdicts
    pub voice: Arc<dyn VoiceOutput>,
    /// System health check
    pub health: Arc<dyn HealthServiceTrait>,
    /// Deployment environment name
    pub environment: String,
}

impl AppState {
    /// Wire the in-memory services described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let voice = create_voice_output(&config.voice_output, config.voice_rate).ok_or_else(|| {
            ConfigError::InvalidValue {
                name: "VOICE_OUTPUT",
                value: config.voice_output.clone(),
            }
        })?;
        let accounts: Arc<dyn AccountServiceTrait> =
            Arc::new(create_default_account_service(config.account_settings()));

        Ok(Self::new(accounts, voice, config.environment.clone()))
    }

    /// Build state around an account service and voice output
    pub fn new(accounts: Arc<dyn AccountServiceTrait>, voice: Arc<dyn VoiceOutput>, environment: String) -> Self {
        let health: Arc<dyn HealthServiceTrait> = Arc::new(HealthService::new(accounts.clone(), voice.clone()));
        Self {
            assessments: Arc::new(create_default_assessment_service()),
            accounts,
            voice,
            health,
            environment,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        let config = AppConfig::default();
        let accounts: Arc<dyn AccountServiceTrait> =
            Arc::new(create_default_account_service(config.account_settings()));
        Self::new(accounts, Arc::new(UnavailableVoice), config.environment)
    }
}

/// Create the application router
pub fn create_application(state: AppState) -> Router {
    routes::create_app(state)
}
