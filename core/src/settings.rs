// core/src/settings.rs

//! Store-wide settings that feed the checkout summary, and the seam they are
//! fetched through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{event, instrument, Level};

use crate::error::CartResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
  /// WhatsApp number orders are handed off to.
  pub wa_number: String,
  pub shipping_fee: u64,
  /// Subtotals at or above this ship free.
  pub free_shipping_min: u64,
  pub tax_enabled: bool,
  /// Percentage; fractional rates such as 2.5 are allowed.
  pub tax_percent: f64,
}

impl Default for StoreSettings {
  fn default() -> Self {
    Self {
      wa_number: "916002698296".to_string(),
      shipping_fee: 100,
      free_shipping_min: 999,
      tax_enabled: false,
      tax_percent: 0.0,
    }
  }
}

/// Where store settings come from (the hosted backend, a file, a fixture).
#[async_trait]
pub trait SettingsSource: Send + Sync {
  async fn fetch_store_settings(&self) -> CartResult<StoreSettings>;
}

/// A source that always yields the same settings.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings(pub StoreSettings);

#[async_trait]
impl SettingsSource for StaticSettings {
  async fn fetch_store_settings(&self) -> CartResult<StoreSettings> {
    Ok(self.0.clone())
  }
}

/// Fetches settings from `source`, falling back to [`StoreSettings::default`]
/// when the fetch fails. Never returns an error.
#[instrument(name = "load_store_settings", skip_all)]
pub async fn load_store_settings(source: &dyn SettingsSource) -> StoreSettings {
  match source.fetch_store_settings().await {
    Ok(settings) => {
      event!(
        Level::DEBUG,
        shipping_fee = settings.shipping_fee,
        free_shipping_min = settings.free_shipping_min,
        tax_enabled = settings.tax_enabled,
        "Store settings loaded."
      );
      settings
    }
    Err(e) => {
      event!(Level::ERROR, error = %e, "Error loading store settings; using defaults.");
      StoreSettings::default()
    }
  }
}
