use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One accepted claim. Records are append-only; nothing updates or deletes
/// them once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub user_id: String,
    pub username: String,
    pub name: String,
    /// Full instant of the claim, not just the day.
    pub timestamp: DateTime<Utc>,
    /// Token value presented at claim time, kept for audit.
    pub session_token: String,
}

impl AttendanceRecord {
    /// Calendar day of the claim in local time, the granularity the
    /// once-per-day rule works at.
    pub fn taken_on(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serde_round_trip_is_lossless() {
        let record = AttendanceRecord {
            user_id: "2".into(),
            username: "member1".into(),
            name: "John Smith".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 11, 6, 17, 4, 33).unwrap(),
            session_token: "session_abc123".into(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn taken_on_uses_the_local_calendar_day() {
        let local = Local.with_ymd_and_hms(2025, 11, 6, 17, 4, 33).unwrap();
        let record = AttendanceRecord {
            user_id: "2".into(),
            username: "member1".into(),
            name: "John Smith".into(),
            timestamp: local.with_timezone(&Utc),
            session_token: "session_abc123".into(),
        };
        assert_eq!(record.taken_on(), local.date_naive());
    }
}
