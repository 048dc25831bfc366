//! crowdfundd settings: where to listen, what to log, which dashboard build
//! to serve.
//!
//! Read from an optional `crowdfund.toml` next to the process, then patched
//! by `CROWDFUND_*` variables (and `RUST_LOG` for the filter).

use std::path::PathBuf;

use serde::Deserialize;

/// Server settings, one table per concern.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub dashboard: DashboardConfig,
}

/// `[server]`: the API and dashboard listener.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// `[logging]`
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive, e.g. `crowdfundd=debug`.
    pub filter: String,
}

/// `[dashboard]`: the compiled Leptos bundle.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory produced by `trunk build`. Set to an empty string to serve
    /// the API only.
    pub assets_dir: String,
}

impl Config {
    /// Read `crowdfund.toml`, apply `CROWDFUND_*` overrides and validate.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for an unreadable or malformed file, or for a listener
    /// address that cannot be bound.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("crowdfund.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("CROWDFUND_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("CROWDFUND_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("CROWDFUND_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("CROWDFUND_ASSETS") {
            self.dashboard.assets_dir = val;
        }
        if let Some(val) = var("CROWDFUND_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation("host must not be empty".to_string()));
        }
        Ok(())
    }

    /// `host:port` for the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Dashboard bundle to serve; `None` runs the API alone.
    #[must_use]
    pub fn assets_dir(&self) -> Option<PathBuf> {
        let dir = self.dashboard.assets_dir.trim();
        (!dir.is_empty()).then(|| PathBuf::from(dir))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "crowdfundd=info,crowdfund=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            assets_dir: "crates/adapters/dashboard_leptos/dist".to_string(),
        }
    }
}

/// Why crowdfundd refused to start.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("crowdfund.toml is not valid TOML")]
    Parse(#[from] toml::de::Error),
    #[error("could not read crowdfund.toml")]
    Io(#[from] std::io::Error),
    #[error("bad listener settings: {0}")]
    Validation(String),
}
