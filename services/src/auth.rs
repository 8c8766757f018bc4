//! Stubbed login and session restore.
//!
//! Acceptance requires only that the username is in the directory and the
//! claimed role matches the account; the password is handed to the
//! [`CredentialVerifier`] seam, which the shipped stub ignores. The artificial
//! latency imitates the network round-trip a real backend would cost.

use crate::directory::{CredentialVerifier, MemberDirectory};
use crate::error::ServiceError;
use crate::session::SessionHandle;
use db::models::user::{Role, User};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    pub password: String,
    pub role: Role,
}

pub struct AuthService {
    directory: Arc<dyn MemberDirectory>,
    verifier: Arc<dyn CredentialVerifier>,
    session: SessionHandle,
    latency: Duration,
}

impl AuthService {
    pub fn new(
        directory: Arc<dyn MemberDirectory>,
        verifier: Arc<dyn CredentialVerifier>,
        session: SessionHandle,
    ) -> Self {
        Self {
            directory,
            verifier,
            session,
            latency: Duration::from_millis(500),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Attempts a login. Every failure surfaces as the same generic
    /// [`ServiceError::AuthenticationFailure`].
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ServiceError> {
        if request.validate().is_err() {
            return Err(ServiceError::AuthenticationFailure);
        }

        // Simulated network round-trip.
        tokio::time::sleep(self.latency).await;

        let Some(user) = self.directory.find_by_username(&request.username) else {
            log::info!("login rejected: unknown username");
            return Err(ServiceError::AuthenticationFailure);
        };
        if user.role != request.role {
            log::info!("login rejected for {}: role mismatch", user.username);
            return Err(ServiceError::AuthenticationFailure);
        }
        if !self.verifier.verify(&request.username, &request.password) {
            return Err(ServiceError::AuthenticationFailure);
        }

        self.session.create(&user)?;
        log::info!("{} logged in as {}", user.username, user.role);
        Ok(user)
    }

    /// Reloads the persisted session, if one survives from a previous run.
    pub fn restore(&self) -> Result<Option<User>, ServiceError> {
        self.session.current()
    }

    /// Ends the session; attendance data stays in the ledger.
    pub fn logout(&self) -> Result<(), ServiceError> {
        self.session.destroy()?;
        log::info!("session closed");
        Ok(())
    }
}
