//! Domain layer health check functionality
//! This module reports the status of the services the API depends on

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::AccountServiceTrait;
use crate::speech::VoiceOutput;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced capability
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Health service probing the account store and the voice output
pub struct HealthService {
    accounts: Arc<dyn AccountServiceTrait>,
    voice: Arc<dyn VoiceOutput>,
}

impl HealthService {
    /// Create a new health service
    pub fn new(accounts: Arc<dyn AccountServiceTrait>, voice: Arc<dyn VoiceOutput>) -> Self {
        Self { accounts, voice }
    }
}

/// Roll component statuses up into a system status.
///
/// Optional components never make the system unhealthy or degraded.
pub fn overall_status<'a, I>(required: I) -> SystemStatus
where
    I: IntoIterator<Item = &'a HealthComponent>,
{
    let mut status = SystemStatus::Healthy;
    for component in required {
        match component.status {
            ComponentStatus::Unhealthy => return SystemStatus::Unhealthy,
            ComponentStatus::Degraded => status = SystemStatus::Degraded,
            ComponentStatus::Healthy => {}
        }
    }
    status
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let accounts = match self.accounts.account_count().await {
            Ok(count) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: Some(format!("{} registered account(s)", count)),
            },
            Err(e) => HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some(e.to_string()),
            },
        };

        let classifier = HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        };

        let voice = if self.voice.is_available() {
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            }
        } else {
            HealthComponent {
                status: ComponentStatus::Degraded,
                details: Some("Voice not available".to_string()),
            }
        };

        let status = overall_status([&accounts, &classifier]);

        SystemHealth {
            status,
            components: vec![
                ("accounts".to_string(), accounts),
                ("classifier".to_string(), classifier),
                ("voice".to_string(), voice),
            ]
            .into_iter()
            .collect(),
        }
    }
}
