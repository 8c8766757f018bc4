//! Member directory and credential verification seams.
//!
//! Both are capability traits so a real backend can be swapped in without
//! touching the token or claim logic. The shipped implementations are the
//! portal's fixed in-memory roster and a verifier that accepts anything,
//! mirroring the stubbed login this portal runs with.

use chrono::NaiveDate;
use db::models::user::{Role, User};
use std::collections::HashMap;

pub trait MemberDirectory: Send + Sync {
    fn find_by_username(&self, username: &str) -> Option<User>;
    fn all(&self) -> Vec<User>;
}

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Stub verifier: passwords are never checked. A real deployment must
/// replace this with verified credential issuance.
pub struct AcceptAllVerifier;

impl CredentialVerifier for AcceptAllVerifier {
    fn verify(&self, _username: &str, _password: &str) -> bool {
        true
    }
}

/// Fixed lookup table of portal accounts.
pub struct MockDirectory {
    users: HashMap<String, User>,
}

impl MockDirectory {
    /// The seeded roster: one admin and two members.
    pub fn seeded() -> Self {
        let users = [
            User {
                id: "1".into(),
                username: "admin1".into(),
                role: Role::Admin,
                name: "Admin User".into(),
                email: "admin@datascienceclub.com".into(),
                attendance: 0,
                last_attendance: None,
                badges: Vec::new(),
            },
            User {
                id: "2".into(),
                username: "member1".into(),
                role: Role::Member,
                name: "John Smith".into(),
                email: "john@example.com".into(),
                attendance: 15,
                last_attendance: NaiveDate::from_ymd_opt(2025, 11, 5),
                badges: vec!["Early Bird".into(), "Regular Attendee".into()],
            },
            User {
                id: "3".into(),
                username: "member2".into(),
                role: Role::Member,
                name: "Sarah Johnson".into(),
                email: "sarah@example.com".into(),
                attendance: 12,
                last_attendance: NaiveDate::from_ymd_opt(2025, 11, 4),
                badges: vec!["Team Player".into()],
            },
        ];

        Self {
            users: users
                .into_iter()
                .map(|u| (u.username.clone(), u))
                .collect(),
        }
    }
}

impl MemberDirectory for MockDirectory {
    fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }

    fn all(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }
}
