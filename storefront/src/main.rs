// storefront/src/main.rs

// Declare modules for the application
mod cli;
mod config;
mod errors;
mod services;
mod state;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::state::AppState;

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      eprintln!("Failed to load application configuration: {}", e);
      return Err(e.into());
    }
  };

  // Initialize tracing subscriber for logging; RUST_LOG overrides GIFTESS_LOG.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&app_config.log_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .with_writer(std::io::stderr)
    .init();

  tracing::debug!(config = ?app_config, "Configuration loaded.");

  let app_state = AppState::init(app_config.clone()).await.map_err(|e| {
    tracing::error!(error = %e, "Failed to open the cart store.");
    e
  })?;
  tracing::info!(data_dir = %app_state.config.data_dir.display(), "Cart store opened.");

  let output = cli::commands::run(cli.command, &app_state.cart, &app_state.settings)?;
  println!("{}", output);
  Ok(())
}
