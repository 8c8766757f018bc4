use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role a portal account holds. Admins run the rotating token display;
/// members scan it to claim attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Member,
}

/// A portal account, persisted verbatim under the `current-session-user` key
/// while a session is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    /// Total successful claims; increases by exactly 1 per accepted claim.
    pub attendance: u32,
    /// Calendar date of the most recent successful claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attendance: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
}

impl User {
    pub fn has_claimed_on(&self, day: NaiveDate) -> bool {
        self.last_attendance == Some(day)
    }

    /// Applies the user half of an accepted claim.
    pub fn record_claim(&mut self, day: NaiveDate) {
        self.attendance += 1;
        self.last_attendance = Some(day);
    }
}
