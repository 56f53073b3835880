use super::SessionStore;
use crate::errors::AppResult;
use serde_json::Value;
use std::collections::BTreeMap;

/// In-process store, lives as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn clear(&mut self) -> AppResult<()> {
        self.values.clear();
        Ok(())
    }

    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> AppResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn set_many(&mut self, values: BTreeMap<String, Value>) -> AppResult<()> {
        self.values.extend(values);
        Ok(())
    }

    fn replace(&mut self, values: BTreeMap<String, Value>) -> AppResult<()> {
        self.values = values;
        Ok(())
    }

    fn snapshot(&self) -> AppResult<BTreeMap<String, Value>> {
        Ok(self.values.clone())
    }
}
