//! Session store - current-user pointer
//!
//! The storefront is single-user: whoever is signed in is recorded as a
//! `UserProfile` under a fixed key, and the favorites/orders stores scope
//! their collections by that user's id. Operations that need a user
//! silently no-op when nobody is signed in.

use crate::storage::{KvStore, StorageResult};
use shared::models::{Address, UserProfile};

pub(crate) const CURRENT_USER_KEY: &str = "techub_current_user";

/// Session collaborator contract over the KV store
#[derive(Clone)]
pub struct SessionStore {
    kv: KvStore,
}

impl SessionStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Currently signed-in user, if any. A corrupt session value reads as
    /// signed out.
    pub fn current_user(&self) -> Option<UserProfile> {
        match self.kv.get(CURRENT_USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable session value, treating as signed out");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Record a signed-in user. Credential checks belong to the external
    /// auth collaborator; this only persists the pointer.
    pub fn sign_in(&self, user: &UserProfile) -> StorageResult<()> {
        self.kv.put(CURRENT_USER_KEY, user)?;
        tracing::info!(user_id = %user.id, "Session started");
        Ok(())
    }

    pub fn sign_out(&self) -> StorageResult<()> {
        self.kv.remove(CURRENT_USER_KEY)?;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// Default shipping address of the current user.
    pub fn default_address(&self) -> Option<Address> {
        self.current_user()
            .and_then(|user| user.default_address().cloned())
    }

    /// Append an address to the current user's profile; a new default
    /// clears the previous default flag. Without a session this is a
    /// silent no-op.
    pub fn add_address(&self, address: Address) -> StorageResult<()> {
        let Some(mut user) = self.current_user() else {
            tracing::debug!("add_address without a session, ignoring");
            return Ok(());
        };
        user.add_address(address);
        self.kv.put(CURRENT_USER_KEY, &user)
    }
}
