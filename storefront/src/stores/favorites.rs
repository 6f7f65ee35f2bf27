//! Favorites store (per user)
//!
//! A toggle set of liked products, persisted under a per-user key. Every
//! operation requires a session; without one, reads return empty and
//! writes are silent no-ops.

use crate::session::SessionStore;
use crate::storage::{KvStore, StorageResult};
use shared::models::{FavoriteEntry, ProductRef};

fn favorites_key(user_id: &str) -> String {
    format!("techub_favorites_{user_id}")
}

#[derive(Clone)]
pub struct FavoritesStore {
    kv: KvStore,
    session: SessionStore,
}

impl FavoritesStore {
    pub fn new(kv: KvStore, session: SessionStore) -> Self {
        Self { kv, session }
    }

    /// Favorites of the signed-in user; empty without a session.
    pub fn get(&self) -> Vec<FavoriteEntry> {
        match self.session.current_user() {
            Some(user) => self.kv.get_or_default(&favorites_key(&user.id)),
            None => Vec::new(),
        }
    }

    /// Toggle a product: present → removed, absent → added with a fresh
    /// timestamp. Returns the updated set.
    pub fn toggle(&self, product: &ProductRef) -> StorageResult<Vec<FavoriteEntry>> {
        let Some(user) = self.session.current_user() else {
            tracing::debug!("toggle_favorite without a session, ignoring");
            return Ok(Vec::new());
        };

        let key = favorites_key(&user.id);
        let mut favorites: Vec<FavoriteEntry> = self.kv.get_or_default(&key);

        match favorites.iter().position(|entry| entry.id == product.id) {
            Some(pos) => {
                favorites.remove(pos);
            }
            None => favorites.push(FavoriteEntry::from_product(product)),
        }

        self.kv.put(&key, &favorites)?;
        Ok(favorites)
    }

    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.get().iter().any(|entry| entry.id == product_id)
    }
}
