// storefront/src/state.rs
use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::FileSettingsSource;
use giftess_cart::{load_store_settings, CartManager, FileStore, StaticSettings, StoreSettings, TracingBadge};
use std::sync::Arc;

pub struct AppState {
  pub cart: CartManager,
  pub settings: StoreSettings,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Opens the file-backed cart and loads store settings.
  pub async fn init(config: Arc<AppConfig>) -> Result<Self> {
    let store = Arc::new(FileStore::open(&config.data_dir)?);
    let cart = CartManager::new(store).with_badge(TracingBadge);

    let settings = match &config.settings_file {
      Some(path) => load_store_settings(&FileSettingsSource::new(path)).await,
      None => load_store_settings(&StaticSettings::default()).await,
    };

    Ok(Self { cart, settings, config })
  }
}
