// core/src/store/memory.rs
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::CartResult;
use crate::store::KeyValueStore;

/// In-process store, for tests and sessions that need no durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.read().is_empty()
  }
}

impl KeyValueStore for MemoryStore {
  fn read(&self, key: &str) -> CartResult<Option<String>> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn write(&self, key: &str, value: &str) -> CartResult<()> {
    self.entries.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> CartResult<()> {
    self.entries.write().remove(key);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn write_then_read_returns_value() {
    let store = MemoryStore::new();
    assert_eq!(store.read("k").unwrap(), None);
    store.write("k", "[]").unwrap();
    assert_eq!(store.read("k").unwrap().as_deref(), Some("[]"));
    assert_eq!(store.len(), 1);
  }

  #[test]
  fn remove_is_idempotent() {
    let store = MemoryStore::new();
    store.write("k", "v").unwrap();
    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert!(store.is_empty());
  }
}
