//! redb-based key-value persistence adapter
//!
//! Every persisted collection is a JSON-encoded value under a fixed string
//! key in a single table:
//!
//! | Key | Value |
//! |-----|-------|
//! | `techub_cart` | `Vec<CartItem>` |
//! | `techub_current_user` | `UserProfile` |
//! | `techub_favorites_{user_id}` | `Vec<FavoriteEntry>` |
//! | `techub_orders_{user_id}` | `Vec<Order>` |
//!
//! Store operations are full read-modify-write cycles: load the whole
//! collection, mutate in memory, persist the whole collection back. A
//! write is atomic because the underlying redb commit is. Concurrent
//! writers are not synchronized: last write wins.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Single table of JSON blobs: key = collection name, value = JSON bytes
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value store backed by redb
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Database>,
}

impl KvStore {
    /// Open or create the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    // ========== Reads ==========

    /// Read and decode a collection; `None` when the key is absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;

        match table.get(key)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Read a collection, degrading to the default on any failure.
    ///
    /// Absent keys, unreadable storage and malformed JSON all yield the
    /// default; the failure is logged, never propagated.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Unreadable collection, falling back to empty");
                T::default()
            }
        }
    }

    /// Whether a key currently holds a value (a persisted empty collection
    /// is distinct from an absent key).
    pub fn contains(&self, key: &str) -> StorageResult<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        Ok(table.get(key)?.is_some())
    }

    // ========== Writes ==========

    /// Encode and persist a collection under its key (single atomic write).
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        self.put_in(&txn, key, value)?;
        txn.commit()?;
        Ok(())
    }

    /// Delete a collection entirely. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        self.remove_in(&txn, key)?;
        txn.commit()?;
        Ok(())
    }

    // ========== Transactional writes ==========

    /// Begin a write transaction for a multi-key commit.
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    /// Persist a collection within an open transaction.
    pub fn put_in<T: Serialize>(
        &self,
        txn: &WriteTransaction,
        key: &str,
        value: &T,
    ) -> StorageResult<()> {
        let mut table = txn.open_table(COLLECTIONS_TABLE)?;
        let bytes = serde_json::to_vec(value)?;
        table.insert(key, bytes.as_slice())?;
        Ok(())
    }

    /// Delete a collection within an open transaction.
    pub fn remove_in(&self, txn: &WriteTransaction, key: &str) -> StorageResult<()> {
        let mut table = txn.open_table(COLLECTIONS_TABLE)?;
        table.remove(key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_roundtrip() {
        let kv = KvStore::open_in_memory().unwrap();
        let values = vec!["a".to_string(), "b".to_string()];

        kv.put("test_key", &values).unwrap();
        let loaded: Option<Vec<String>> = kv.get("test_key").unwrap();
        assert_eq!(loaded, Some(values));
    }

    #[test]
    fn test_get_absent_key() {
        let kv = KvStore::open_in_memory().unwrap();
        let loaded: Option<Vec<String>> = kv.get("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_get_or_default_on_malformed_value() {
        let kv = KvStore::open_in_memory().unwrap();

        // Write bytes that are not valid JSON
        let txn = kv.begin_write().unwrap();
        {
            let mut table = txn.open_table(COLLECTIONS_TABLE).unwrap();
            table.insert("broken", b"{not json".as_slice()).unwrap();
        }
        txn.commit().unwrap();

        let loaded: Vec<String> = kv.get_or_default("broken");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_remove_deletes_key() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.put("k", &vec![1, 2, 3]).unwrap();
        assert!(kv.contains("k").unwrap());

        kv.remove("k").unwrap();
        assert!(!kv.contains("k").unwrap());

        // Removing again is a no-op
        kv.remove("k").unwrap();
    }

    #[test]
    fn test_empty_collection_is_distinct_from_absent() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.put("empty", &Vec::<i32>::new()).unwrap();

        assert!(kv.contains("empty").unwrap());
        assert!(!kv.contains("never_written").unwrap());
    }

    #[test]
    fn test_transactional_multi_key_commit() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.put("a", &vec![1]).unwrap();

        let txn = kv.begin_write().unwrap();
        kv.put_in(&txn, "b", &vec![2]).unwrap();
        kv.remove_in(&txn, "a").unwrap();
        txn.commit().unwrap();

        assert!(!kv.contains("a").unwrap());
        assert_eq!(kv.get::<Vec<i32>>("b").unwrap(), Some(vec![2]));
    }

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.redb");

        {
            let kv = KvStore::open(&path).unwrap();
            kv.put("persisted", &vec!["x".to_string()]).unwrap();
        }

        let kv = KvStore::open(&path).unwrap();
        let loaded: Option<Vec<String>> = kv.get("persisted").unwrap();
        assert_eq!(loaded, Some(vec!["x".to_string()]));
    }
}
