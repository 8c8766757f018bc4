//! Read-only attendance reporting for admin views.

use crate::error::ServiceError;
use chrono::{DateTime, NaiveDate, Utc};
use db::ledger::Ledger;
use serde::Serialize;

/// One row of the daily-present list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresenceRow {
    pub user_id: String,
    pub username: String,
    pub name: String,
    pub marked_at: DateTime<Utc>,
}

pub struct ReportService {
    ledger: Ledger,
}

impl ReportService {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// Members present on `day`, in the order they claimed.
    pub fn daily_presence(&self, day: NaiveDate) -> Result<Vec<PresenceRow>, ServiceError> {
        Ok(self
            .ledger
            .query_by_day(day)?
            .map(|record| PresenceRow {
                user_id: record.user_id,
                username: record.username,
                name: record.name,
                marked_at: record.timestamp,
            })
            .collect())
    }

    pub fn headcount(&self, day: NaiveDate) -> Result<usize, ServiceError> {
        Ok(self.ledger.count_for_day(day)?)
    }
}
