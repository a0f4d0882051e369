use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Storage model for a login session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    /// Opaque bearer token
    pub token: String,

    /// Username of the account the session belongs to
    pub username: String,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// When the session stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Whether the session has expired at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
