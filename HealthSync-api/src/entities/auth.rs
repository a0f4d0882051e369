use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use health_sync_domain::entities::account::UserInfo;

/// Response to a one-time code request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OtpResponse {
    /// Email the code was issued for
    pub email: String,

    /// The code itself. Returned directly because delivery is simulated.
    pub otp: String,

    /// When the code stops being redeemable
    pub expires_at: DateTime<Utc>,

    /// Human-readable message
    pub message: String,
}

/// Response to a successful registration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    /// Human-readable message
    pub message: String,

    /// The registered user
    pub user: UserInfo,
}

/// Login response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Session token
    pub access_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,

    /// Greeting
    pub message: String,

    /// User information
    pub user: UserInfo,
}
