//! Application settings loaded from an optional `config.toml` plus environment overrides.
//!
//! Lookup order, later wins:
//! 1. built-in defaults
//! 2. the TOML file at `$REMS_CONFIG`, or `./config.toml` when that exists
//! 3. `DATABASE_URL`, `HOST` and `PORT` environment variables

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default settings file, read only when present
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP listener settings
    pub server: ServerSettings,
    /// Storage settings
    pub database: DatabaseSettings,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerSettings {
    /// `host:port` string suitable for binding a listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// `SeaORM` connection URL
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://boards.db?mode=rwc".to_string(),
        }
    }
}

/// Parses settings from TOML text; missing keys take their defaults.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML is malformed or has wrongly typed values.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings: {e}"),
    })
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or parsed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    debug!("Attempting to load settings from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_settings(&contents)
}

/// Overrides settings with values returned by `lookup` (normally `std::env::var`).
///
/// # Errors
/// Returns [`Error::Config`] if `PORT` is not a valid port number.
pub fn apply_overrides<F>(mut settings: Settings, lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        settings.database.url = url;
    }
    if let Some(host) = lookup("HOST") {
        settings.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        settings.server.port = port.parse().map_err(|e| Error::Config {
            message: format!("Invalid PORT '{port}': {e}"),
        })?;
    }
    Ok(settings)
}

/// Resolves the full application settings from file and environment.
///
/// An explicitly configured `REMS_CONFIG` file must exist; the default
/// `config.toml` is optional.
///
/// # Errors
/// Returns [`Error::Config`] on unreadable or invalid configuration.
pub fn load_app_settings() -> Result<Settings> {
    let base = match std::env::var("REMS_CONFIG") {
        Ok(path) => load_settings(PathBuf::from(path))?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_settings(DEFAULT_CONFIG_PATH)?,
        Err(_) => {
            debug!("No config file found, using defaults");
            Settings::default()
        }
    };

    let settings = apply_overrides(base, |key| std::env::var(key).ok())?;
    info!(
        bind = %settings.server.bind_address(),
        "Settings loaded"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
            [server]
            host = "0.0.0.0"
            port = 9090

            [database]
            url = "sqlite::memory:"
        "#;

        let settings = parse_settings(toml_str).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.database.url, "sqlite::memory:");
        assert_eq!(settings.server.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings = parse_settings("[server]\nport = 3000\n").unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database, DatabaseSettings::default());

        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_malformed_settings_are_config_errors() {
        let result = parse_settings("[server]\nport = \"not a number\"\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DATABASE_URL", "sqlite://other.db"),
            ("PORT", "8080"),
        ]);
        let settings = apply_overrides(Settings::default(), |key| {
            env.get(key).map(ToString::to_string)
        })
        .unwrap();

        assert_eq!(settings.database.url, "sqlite://other.db");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_port_override() {
        let result = apply_overrides(Settings::default(), |key| {
            (key == "PORT").then(|| "eighty".to_string())
        });
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let result = load_settings("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
