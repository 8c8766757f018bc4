//! Claim validation and commit.
//!
//! A confirmed scan becomes a claim here. Business rules: members only, one
//! claim per calendar day, and the candidate token must be present. The
//! candidate is not cross-checked against the token currently on display:
//! any non-empty value a scanner produced is taken at face value, so rotation
//! limits code sharing only at the display, not at claim time.

use crate::error::{ClaimRejected, ServiceError};
use crate::session::SessionHandle;
use chrono::{DateTime, Local, Utc};
use db::ledger::Ledger;
use db::models::attendance_record::AttendanceRecord;
use db::models::user::{Role, User};

/// Result of an accepted claim: the updated user snapshot plus the record
/// that went into the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimAccepted {
    pub user: User,
    pub record: AttendanceRecord,
}

pub struct ClaimService {
    ledger: Ledger,
    session: SessionHandle,
}

impl ClaimService {
    pub fn new(ledger: Ledger, session: SessionHandle) -> Self {
        Self { ledger, session }
    }

    /// Validates and commits a claim at instant `now`. The once-per-day rule
    /// works on the local calendar date of `now`.
    ///
    /// The ledger append and the user/session update commit together: if the
    /// append fails after the session was rewritten, the session is rolled
    /// back to its prior snapshot.
    pub fn claim(
        &self,
        user: &User,
        candidate_token: &str,
        now: DateTime<Utc>,
    ) -> Result<ClaimAccepted, ServiceError> {
        if user.role != Role::Member {
            return Err(ClaimRejected::NotAMember.into());
        }

        let today = now.with_timezone(&Local).date_naive();
        if user.has_claimed_on(today) {
            log::info!("{} already claimed attendance today", user.username);
            return Err(ClaimRejected::AlreadyClaimedToday.into());
        }

        let token = candidate_token.trim();
        if token.is_empty() {
            return Err(ClaimRejected::MissingToken.into());
        }

        let mut updated = user.clone();
        updated.record_claim(today);
        let record = AttendanceRecord {
            user_id: updated.id.clone(),
            username: updated.username.clone(),
            name: updated.name.clone(),
            timestamp: now,
            session_token: token.to_owned(),
        };

        self.session.update(&updated)?;
        if let Err(err) = self.ledger.append(record.clone()) {
            if let Err(rollback) = self.session.update(user) {
                log::error!("session rollback after failed ledger append also failed: {rollback}");
            }
            return Err(err.into());
        }

        log::info!(
            "attendance recorded for {} (total {})",
            updated.username,
            updated.attendance
        );
        Ok(ClaimAccepted {
            user: updated,
            record,
        })
    }
}
