//! Session stores: where the booking record lives between two commands.

use crate::errors::AppResult;
use serde_json::Value;
use std::collections::BTreeMap;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key-value storage scoped to one session.
pub trait SessionStore {
    /// Drop every key of the session.
    fn clear(&mut self) -> AppResult<()>;

    fn get(&self, key: &str) -> AppResult<Option<Value>>;

    fn set(&mut self, key: &str, value: Value) -> AppResult<()>;

    /// Write all `values` or none of them.
    fn set_many(&mut self, values: BTreeMap<String, Value>) -> AppResult<()>;

    /// Drop the session and write `values` in its place, as one change.
    fn replace(&mut self, values: BTreeMap<String, Value>) -> AppResult<()>;

    /// All keys and values currently held.
    fn snapshot(&self) -> AppResult<BTreeMap<String, Value>>;
}
