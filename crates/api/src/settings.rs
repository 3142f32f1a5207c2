//! Service Settings

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file looked up in the working directory when no path is given
pub const DEFAULT_SETTINGS_FILE: &str = "voltage-dashboard";

/// Top-level service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address to bind
    pub bind_addr: String,
    /// Largest accepted CSV upload
    pub max_upload_bytes: usize,
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Max level: trace, debug, info, warn or error
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Settings {
    /// Load settings from built-in defaults overlaid with a settings file.
    ///
    /// An explicit `path` must exist. Without one, `voltage-dashboard.toml`
    /// (or any other format `config` recognises) is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => File::from(p),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        Config::builder()
            .set_default("server.bind_addr", "0.0.0.0:8080")?
            .set_default("server.max_upload_bytes", 10_i64 * 1024 * 1024)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(file)
            .build()?
            .try_deserialize()
    }
}
