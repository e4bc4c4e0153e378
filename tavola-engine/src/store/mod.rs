//! Persistent key-value store adapter
//!
//! The engine's analogue of the browser's per-origin local storage: a
//! durable key-value namespace holding JSON-encoded values. Consumers go
//! through the [`StoreAdapter`] trait so the pure cart/recorder logic can
//! be exercised against an in-memory stand-in.
//!
//! # Keys
//!
//! | Key | Value | Writer |
//! |-----|-------|--------|
//! | `cart` | array of cart lines | cart engine (every mutation) |
//! | `orders` | append-only array of order records | order recorder |
//! | `reservations` | append-only array of reservation records | reservation recorder |
//! | `authUser` | demo session object | auth session |
//!
//! # Decode masking
//!
//! `read_or` never errors: an absent key, undecodable JSON, or a failed
//! backend read all yield the caller's fallback, so corrupted or
//! pre-migration contents degrade to "no data" instead of crashing a view.

mod memory;
mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::warn;

/// Storage key for the active cart
pub const CART_KEY: &str = "cart";
/// Storage key for the append-only order log
pub const ORDERS_KEY: &str = "orders";
/// Storage key for the append-only reservation log
pub const RESERVATIONS_KEY: &str = "reservations";
/// Storage key for the demo auth session
pub const AUTH_USER_KEY: &str = "authUser";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
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

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable key-value storage contract
///
/// Handles are cheap clones sharing one backing namespace, so the cart
/// engine, recorders, and views all observe each other's writes in call
/// order. Writes commit before returning.
pub trait StoreAdapter: Clone {
    /// Raw bytes stored under `key`, if any
    fn read_bytes(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Store raw bytes under `key`, replacing any previous value
    fn write_bytes(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Delete `key`; absent keys are a no-op
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Parsed value under `key`, or `fallback` when the key is absent or
    /// the stored text is not valid JSON for `T`. Never errors.
    fn read_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.read_bytes(key) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(err) => {
                    warn!(key, %err, "stored value failed to decode, using fallback");
                    fallback
                }
            },
            Ok(None) => fallback,
            Err(err) => {
                warn!(key, %err, "store read failed, using fallback");
                fallback
            }
        }
    }

    /// JSON-encode `value` and store it under `key`
    ///
    /// Round-trip law: `read_or(key, _)` immediately after a successful
    /// `write(key, value)` yields a value deeply equal to `value`.
    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        self.write_bytes(key, &serde_json::to_vec(value)?)
    }
}
