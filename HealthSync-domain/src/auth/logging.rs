use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Types of authentication events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthEventType {
    /// Successful login
    Login,
    /// User logout
    Logout,
    /// One-time code issued
    OtpIssued,
    /// User registration
    Registration,
    /// Failed login attempt
    FailedLogin,
    /// Session token check on a protected route
    SessionValidation,
}

impl std::fmt::Display for AuthEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthEventType::Login => write!(f, "LOGIN"),
            AuthEventType::Logout => write!(f, "LOGOUT"),
            AuthEventType::OtpIssued => write!(f, "OTP_ISSUED"),
            AuthEventType::Registration => write!(f, "REGISTRATION"),
            AuthEventType::FailedLogin => write!(f, "FAILED_LOGIN"),
            AuthEventType::SessionValidation => write!(f, "SESSION_VALIDATION"),
        }
    }
}

/// Authentication event record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEvent {
    /// Type of authentication event
    pub event_type: AuthEventType,
    /// Username (if known)
    pub user_id: Option<String>,
    /// Timestamp when the event occurred
    pub timestamp: DateTime<Utc>,
    /// Whether the event was successful
    pub success: bool,
    /// Additional details about the event
    pub details: Option<String>,
    /// The resource being accessed (if applicable)
    pub resource: Option<String>,
    /// Duration of the operation in milliseconds (if applicable)
    pub duration_ms: Option<u64>,
}

impl AuthEvent {
    /// Create a new authentication event
    pub fn new(event_type: AuthEventType, user_id: Option<&str>, success: bool) -> Self {
        Self {
            event_type,
            user_id: user_id.map(String::from),
            timestamp: Utc::now(),
            success,
            details: None,
            resource: None,
            duration_ms: None,
        }
    }

    /// Set the details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Set the resource
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Set the duration
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Log an authentication event
pub fn log_auth_event(event: AuthEvent) {
    let user_id = event.user_id.as_deref().unwrap_or("anonymous");
    let details = event.details.as_deref().unwrap_or("");
    let resource = event.resource.as_deref().unwrap_or("");

    if event.success {
        info!(
            event = %event.event_type,
            user = user_id,
            resource,
            duration_ms = event.duration_ms,
            timestamp = %event.timestamp.to_rfc3339(),
            "AUTH-LOG {}",
            details
        );
    } else {
        warn!(
            event = %event.event_type,
            user = user_id,
            resource,
            duration_ms = event.duration_ms,
            timestamp = %event.timestamp.to_rfc3339(),
            "AUTH-LOG {}",
            details
        );
    }
}

/// Log a successful login
pub fn log_successful_login(user_id: &str) {
    log_auth_event(AuthEvent::new(AuthEventType::Login, Some(user_id), true));
}

/// Log a failed login attempt
pub fn log_failed_login(username: &str, reason: &str) {
    let event = AuthEvent::new(AuthEventType::FailedLogin, Some(username), false).with_details(reason);
    log_auth_event(event);
}

/// Log a logout event
pub fn log_logout(user_id: &str) {
    log_auth_event(AuthEvent::new(AuthEventType::Logout, Some(user_id), true));
}

/// Log a registration attempt
pub fn log_registration(user_id: &str, success: bool, details: Option<&str>) {
    let mut event = AuthEvent::new(AuthEventType::Registration, Some(user_id), success);
    if let Some(d) = details {
        event = event.with_details(d);
    }
    log_auth_event(event);
}

/// Log a one-time code being issued. The code itself is never logged.
pub fn log_otp_issued(email: &str) {
    log_auth_event(AuthEvent::new(AuthEventType::OtpIssued, Some(email), true));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_auth_event() {
        let event = AuthEvent::new(AuthEventType::Login, Some("Divya"), true)
            .with_details("Login from dashboard")
            .with_resource("/auth/login")
            .with_duration(150);

        assert_eq!(event.event_type, AuthEventType::Login);
        assert_eq!(event.user_id, Some("Divya".to_string()));
        assert!(event.success);
        assert_eq!(event.details, Some("Login from dashboard".to_string()));
        assert_eq!(event.resource, Some("/auth/login".to_string()));
        assert_eq!(event.duration_ms, Some(150));
    }

    #[test]
    fn test_event_type_display() {
        assert_eq!(AuthEventType::Login.to_string(), "LOGIN");
        assert_eq!(AuthEventType::OtpIssued.to_string(), "OTP_ISSUED");
        assert_eq!(AuthEventType::FailedLogin.to_string(), "FAILED_LOGIN");
    }
}
