use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use health_sync_data::models::AccountRecord;

/// Request for a demo one-time code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct OtpRequest {
    /// Email the code is "sent" to
    #[validate(length(max = 254, message = "Email cannot exceed 254 characters"))]
    pub email: String,

    /// Phone number
    #[validate(length(max = 32, message = "Phone cannot exceed 32 characters"))]
    pub phone: String,
}

/// A one-time code issued by the demo flow. The code is returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct IssuedOtp {
    /// Email the code was issued for
    pub email: String,

    /// Six-digit code
    pub code: String,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,

    /// When the code stops being redeemable
    pub expires_at: DateTime<Utc>,
}

/// Request payload for registering an account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct RegisterRequest {
    /// Full name. Used as the login username when present.
    #[serde(default)]
    #[validate(length(max = 100, message = "Full name cannot exceed 100 characters"))]
    pub full_name: String,

    /// Email the one-time code was issued for
    #[validate(length(max = 254, message = "Email cannot exceed 254 characters"))]
    pub email: String,

    /// Phone number
    #[validate(length(max = 32, message = "Phone cannot exceed 32 characters"))]
    pub phone: String,

    /// Password
    #[validate(length(min = 1, max = 128, message = "Password must be between 1 and 128 characters"))]
    pub password: String,

    /// One-time code received from the code request
    #[serde(default)]
    pub otp: String,
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct LoginRequest {
    /// Username (full name) or email
    pub username: String,
    /// Password
    pub password: String,
}

/// Public view of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct UserInfo {
    /// Login username
    pub username: String,
    /// Full name
    pub full_name: String,
    /// Email
    pub email: String,
    /// Phone number
    pub phone: String,
}

impl From<AccountRecord> for UserInfo {
    fn from(record: AccountRecord) -> Self {
        Self {
            username: record.username,
            full_name: record.full_name,
            email: record.email,
            phone: record.phone,
        }
    }
}

/// Session handed out on login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Session {
    /// Bearer token to send with authenticated requests
    pub token: String,

    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,

    /// The signed-in user
    pub user: UserInfo,
}
