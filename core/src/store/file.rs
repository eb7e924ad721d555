// core/src/store/file.rs
use anyhow::Context;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{event, Level};

use crate::error::{CartError, CartResult};
use crate::store::KeyValueStore;

/// Stores each key as `<dir>/<key>.json`.
///
/// Each write lands in its own uniquely named temporary file in the same
/// directory, which is then renamed over the target. Readers only ever see
/// the previous or the new content, even with several processes writing.
#[derive(Debug)]
pub struct FileStore {
  dir: PathBuf,
}

impl FileStore {
  /// Opens (and creates if needed) the store directory.
  pub fn open(dir: impl Into<PathBuf>) -> CartResult<Self> {
    let dir = dir.into();
    fs::create_dir_all(&dir)
      .with_context(|| format!("creating store directory {}", dir.display()))
      .map_err(|e| CartError::storage("<store-dir>", e))?;
    event!(Level::DEBUG, dir = %dir.display(), "FileStore opened.");
    Ok(Self { dir })
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  fn path_for(&self, key: &str) -> CartResult<PathBuf> {
    let valid = !key.is_empty()
      && key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
      && !key.starts_with('.');
    if !valid {
      return Err(CartError::storage(key, anyhow::anyhow!("key is not a valid file name")));
    }
    Ok(self.dir.join(format!("{key}.json")))
  }
}

impl KeyValueStore for FileStore {
  fn read(&self, key: &str) -> CartResult<Option<String>> {
    let path = self.path_for(key)?;
    match fs::read_to_string(&path) {
      Ok(contents) => Ok(Some(contents)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(CartError::storage(key, e)),
    }
  }

  fn write(&self, key: &str, value: &str) -> CartResult<()> {
    let path = self.path_for(key)?;

    // An unpersisted temp file deletes itself on drop.
    let result = (|| -> anyhow::Result<()> {
      let mut tmp = NamedTempFile::new_in(&self.dir)
        .with_context(|| format!("creating temp file in {}", self.dir.display()))?;
      tmp.write_all(value.as_bytes())?;
      tmp.as_file().sync_all()?;
      tmp
        .persist(&path)
        .map_err(|e| e.error)
        .with_context(|| format!("renaming into {}", path.display()))?;
      Ok(())
    })();

    result.map_err(|e| CartError::storage(key, e))
  }

  fn remove(&self, key: &str) -> CartResult<()> {
    let path = self.path_for(key)?;
    match fs::remove_file(&path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(CartError::storage(key, e)),
    }
  }
}
