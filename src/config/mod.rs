/// Database connection and table creation
pub mod database;

/// Server and database settings from config.toml and the environment
pub mod settings;

pub use settings::{DatabaseSettings, ServerSettings, Settings, load_app_settings};
