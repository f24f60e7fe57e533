//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `terratrack.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use terratrack_domain::error::ConfigurationError;
use terratrack_domain::refresh::{DEFAULT_INTERVAL_SECS, RefreshConfig};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Initial device controls.
    pub refresh: RefreshSection,
    /// Telemetry generator settings.
    pub generator: GeneratorConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Device controls in effect at startup.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RefreshSection {
    pub led_on: bool,
    pub auto_refresh: bool,
    pub interval_secs: u32,
}

/// Telemetry generator configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible readings; entropy when absent.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from `terratrack.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("terratrack.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
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

    /// Apply `TERRATRACK_*` / `RUST_LOG` overrides read through `lookup`.
    ///
    /// A variable that is set but cannot be parsed is an error, never ignored.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("TERRATRACK_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("TERRATRACK_PORT") {
            self.server.port = parse_var("TERRATRACK_PORT", &val)?;
        }
        if let Some(val) = lookup("TERRATRACK_BIND") {
            let (host, port) = val.rsplit_once(':').ok_or_else(|| {
                ConfigError::Validation(format!("TERRATRACK_BIND: expected host:port, got {val:?}"))
            })?;
            self.server.host = host.to_string();
            self.server.port = parse_var("TERRATRACK_BIND", port)?;
        }
        if let Some(val) = lookup("TERRATRACK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("TERRATRACK_LED") {
            self.refresh.led_on = parse_flag("TERRATRACK_LED", &val)?;
        }
        if let Some(val) = lookup("TERRATRACK_AUTO_REFRESH") {
            self.refresh.auto_refresh = parse_flag("TERRATRACK_AUTO_REFRESH", &val)?;
        }
        if let Some(val) = lookup("TERRATRACK_REFRESH_INTERVAL") {
            self.refresh.interval_secs = parse_var("TERRATRACK_REFRESH_INTERVAL", &val)?;
        }
        if let Some(val) = lookup("TERRATRACK_SEED") {
            self.generator.seed = Some(parse_var("TERRATRACK_SEED", &val)?);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.refresh_config()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the startup [`RefreshConfig`] from the `[refresh]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the interval is out of range.
    pub fn refresh_config(&self) -> Result<RefreshConfig, ConfigurationError> {
        RefreshConfig::builder()
            .led_on(self.refresh.led_on)
            .auto_refresh(self.refresh.auto_refresh)
            .refresh_interval_secs(self.refresh.interval_secs)
            .build()
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, val: &str) -> Result<T, ConfigError> {
    val.trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{name}: cannot parse {val:?}")))
}

fn parse_flag(name: &str, val: &str) -> Result<bool, ConfigError> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::Validation(format!("{name}: expected a boolean, got {val:?}"))),
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
            filter: "terratrackd=info,terratrack=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for RefreshSection {
    fn default() -> Self {
        Self {
            led_on: true,
            auto_refresh: true,
            interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// The `[refresh]` section does not form a valid refresh configuration.
    #[error("invalid refresh configuration")]
    Refresh(#[from] ConfigurationError),
}
