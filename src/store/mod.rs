//! Key-value persistence seam.
//!
//! Models the host environment's durable key-value storage behind one
//! trait, with an in-memory backend for tests and single-session use and a
//! JSON-file backend for state that survives restarts.

mod in_memory;
mod json_file;

use std::fmt;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

/// Abstract durable key-value storage.
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` means the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing storage could not be read or written.
    Unavailable(String),
    /// Serialization/deserialization of stored state failed.
    Serde(String),
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
            StoreError::Serde(msg) => write!(f, "storage serialization error: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
