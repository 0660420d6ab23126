//! Key-value persistence for ledger state.
//!
//! The ledger is stored as a handful of independent text blobs, one per
//! key (see [`StorageKeys`](crate::config::StorageKeys)). Any backend that
//! can get and set strings by key can hold it.

pub mod file;
pub mod snapshot;

use crate::error::Result;
use std::collections::HashMap;

pub use file::JsonFileStore;
pub use snapshot::{load_ledger, save_ledger};

/// A string key-value store.
pub trait KeyValueStore {
    /// The value under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// In-memory store, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }
}
