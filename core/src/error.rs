// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
  #[error("Storage backend failed for key '{key}'. Source: {source}")]
  Storage {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Persisted cart data could not be (de)serialized: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Store settings could not be fetched. Source: {source}")]
  SettingsUnavailable {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal cart error: {0}")]
  Internal(String),
}

impl CartError {
  /// Wraps any backend failure for `key` as a `CartError::Storage`.
  pub fn storage(key: &str, source: impl Into<AnyhowError>) -> Self {
    CartError::Storage {
      key: key.to_string(),
      source: source.into(),
    }
  }
}

impl From<AnyhowError> for CartError {
  fn from(err: AnyhowError) -> Self {
    // Avoid double wrapping when a CartError already travelled through anyhow.
    match err.downcast::<CartError>() {
      Ok(cart_err) => cart_err,
      Err(err) => CartError::Internal(err.to_string()),
    }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
