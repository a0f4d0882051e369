use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Storage model for a registered account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountRecord {
    /// Lookup key used at login (full name, or email when no name was given)
    pub username: String,

    /// Full name as entered at registration
    pub full_name: String,

    /// Email the one-time code was issued for
    pub email: String,

    /// Phone number given at registration
    pub phone: String,

    /// Plaintext password. Demo only.
    pub password: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}
