// storefront/src/services/settings_file.rs
use async_trait::async_trait;
use giftess_cart::{CartError, CartResult, SettingsSource, StoreSettings};
use std::path::PathBuf;
use tracing::info;

/// Reads `StoreSettings` from a JSON file shaped like the backend's
/// `store_settings` row. Missing fields take their defaults.
#[derive(Debug, Clone)]
pub struct FileSettingsSource {
  path: PathBuf,
}

impl FileSettingsSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

#[async_trait]
impl SettingsSource for FileSettingsSource {
  async fn fetch_store_settings(&self) -> CartResult<StoreSettings> {
    info!("Reading store settings from {}", self.path.display());
    let raw = tokio::fs::read_to_string(&self.path)
      .await
      .map_err(|e| CartError::SettingsUnavailable { source: e.into() })?;
    serde_json::from_str(&raw).map_err(|e| CartError::SettingsUnavailable { source: e.into() })
  }
}
