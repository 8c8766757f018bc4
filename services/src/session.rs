//! Explicit session lifecycle over the key-value store.
//!
//! The logged-in user lives under the `current-session-user` key. Rather than
//! ambient globals, every component that needs the session holds a
//! [`SessionHandle`] with a create/update/destroy lifecycle.

use crate::error::ServiceError;
use db::models::user::User;
use db::store::{CURRENT_SESSION_USER, KeyValueStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct SessionHandle {
    store: Arc<dyn KeyValueStore>,
}

impl SessionHandle {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persists `user` as the open session.
    pub fn create(&self, user: &User) -> Result<(), ServiceError> {
        let payload = serde_json::to_string(user).map_err(db::store::StoreError::from)?;
        self.store.put(CURRENT_SESSION_USER, &payload)?;
        Ok(())
    }

    /// Rewrites the stored user snapshot, e.g. after an accepted claim.
    pub fn update(&self, user: &User) -> Result<(), ServiceError> {
        self.create(user)
    }

    /// The stored user, if a session is open.
    pub fn current(&self) -> Result<Option<User>, ServiceError> {
        match self.store.get(CURRENT_SESSION_USER)? {
            Some(raw) => {
                let user = serde_json::from_str(&raw).map_err(db::store::StoreError::from)?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Ends the session. Ledger data is untouched.
    pub fn destroy(&self) -> Result<(), ServiceError> {
        self.store.remove(CURRENT_SESSION_USER)?;
        Ok(())
    }
}
