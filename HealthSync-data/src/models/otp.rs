use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A one-time code waiting to be redeemed by a registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OtpRecord {
    /// Email the code was issued for
    pub email: String,

    /// Phone number supplied with the request
    pub phone: String,

    /// Six-digit code
    pub code: String,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,

    /// When the code stops being redeemable
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Whether the code has expired at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
