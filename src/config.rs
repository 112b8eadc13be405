//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and applies environment
//! variable overrides (`PORT`, `APP_ENV`, `APP_TEST_MODE`). Every setting has
//! a default, so a missing config file yields a working development setup.

use serde::Deserialize;
use std::path::Path;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "roster=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default environment name reported by the health endpoint
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Cache-Control value for probe endpoints. Orchestrators must always see a
/// fresh response, so intermediaries are told not to store these at all.
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Application-level settings
    #[serde(default)]
    pub app: AppSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

/// Application-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Environment name reported by `/health` (e.g. "development", "production")
    #[serde(default = "AppSettings::default_environment")]
    pub environment: String,
    /// Suppress log output, used by test suites
    #[serde(default)]
    pub test_mode: bool,
}

impl AppSettings {
    fn default_environment() -> String {
        DEFAULT_ENVIRONMENT.to_string()
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: Self::default_environment(),
            test_mode: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file and apply environment overrides.
    ///
    /// A missing file is not an error: the service runs with defaults so the
    /// binary works out of the box. A file that exists but fails to parse is
    /// a hard error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = if path.as_ref().exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            AppConfig::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `PORT`, `APP_ENV`, and `APP_TEST_MODE` environment overrides.
    ///
    /// Environment variables win over file values so deployments can adjust
    /// the listen port and environment label without editing the config file.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(port) = std::env::var("PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("Invalid PORT value: {port}")))?;
        }
        if let Ok(env) = std::env::var("APP_ENV") {
            if !env.is_empty() {
                self.app.environment = env;
            }
        }
        if let Ok(test_mode) = std::env::var("APP_TEST_MODE") {
            self.app.test_mode = matches!(test_mode.as_str(), "1" | "true");
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
