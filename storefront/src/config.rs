// storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Directory the file-backed cart store lives in.
  pub data_dir: PathBuf,
  /// Optional JSON file with store settings; defaults apply when absent.
  pub settings_file: Option<PathBuf>,
  /// Log directive used when RUST_LOG is not set.
  pub log_level: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable lookup; `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_env = |var_name: &str| lookup(var_name).filter(|v| !v.trim().is_empty());

    let data_dir = PathBuf::from(get_env("GIFTESS_DATA_DIR").unwrap_or_else(|| ".giftess".to_string()));
    let settings_file = get_env("GIFTESS_SETTINGS_FILE").map(PathBuf::from);
    if let Some(path) = &settings_file {
      if path.is_dir() {
        return Err(AppError::Config(format!(
          "GIFTESS_SETTINGS_FILE points at a directory: {}",
          path.display()
        )));
      }
    }

    let log_level = get_env("GIFTESS_LOG").unwrap_or_else(|| "info".to_string());
    tracing_subscriber::EnvFilter::try_new(&log_level)
      .map_err(|e| AppError::Config(format!("Invalid GIFTESS_LOG directive '{}': {}", log_level, e)))?;

    Ok(Self {
      data_dir,
      settings_file,
      log_level,
    })
  }
}
