// storefront/src/services/mod.rs

pub mod settings_file;

pub use settings_file::FileSettingsSource;
