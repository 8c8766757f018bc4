use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Seconds a displayed token stays valid before rotation.
pub const ROTATION_SECONDS: u64 = 60;

/// A rotating attendance token. Tokens are superseded, never mutated: issuing
/// a new one replaces the previous value for display purposes only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionToken {
    /// Opaque value rendered as the scannable code.
    pub value: String,
    pub issued_at: DateTime<Utc>,
    /// Length of the validity window, in seconds.
    pub validity_secs: u64,
}

impl SessionToken {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_at + Duration::seconds(self.validity_secs as i64)
    }
}
