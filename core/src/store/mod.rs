// core/src/store/mod.rs

//! The key-value persistence seam the cart writes through.
//!
//! A store holds serialized strings under string keys. Implementations use
//! interior mutability so a single store can be shared behind an `Arc`.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::CartResult;

pub trait KeyValueStore: Send + Sync {
  /// Returns `Ok(None)` when nothing has been written under `key` yet.
  fn read(&self, key: &str) -> CartResult<Option<String>>;

  fn write(&self, key: &str, value: &str) -> CartResult<()>;

  /// Removing an absent key is not an error.
  fn remove(&self, key: &str) -> CartResult<()>;
}
