//! Application configuration module
//!
//! [`AppConfig`] holds every tunable of the server. Values come from, lowest
//! precedence first: the defaults below, an optional TOML file, then
//! environment variables. [`AppConfigBuilder`] is the programmatic path used
//! by tests and the binaries.
//!
//! ```toml
//! port = 8080
//! database_url = "sqlite://camping.db"
//!
//! [gis]
//! state = "UT"
//! timeout_secs = 30
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_BOUNDARIES_URL: &str =
    "https://apps.fs.usda.gov/arcx/rest/services/EDW/EDW_NFSBoundaries_01/MapServer/0/query";
const DEFAULT_ROADS_URL: &str =
    "https://apps.fs.usda.gov/arcx/rest/services/EDW/EDW_RoadBasic_01/MapServer/0/query";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// sqlx connection string, e.g. `sqlite://camping.db`
    pub database_url: String,
    /// Directory served under `/static`
    pub static_dir: String,
    /// Session lifetime after the last request, in seconds
    pub session_ttl_secs: u64,
    /// Mark the session cookie `Secure`
    pub session_secure: bool,
    /// bcrypt cost factor for new password hashes
    pub password_cost: u32,
    /// External GIS layers
    pub gis: GisConfig,
}

/// ArcGIS layer endpoints and query bounds
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GisConfig {
    /// National forest boundaries layer `/query` URL
    pub boundaries_url: String,
    /// Forest roads layer `/query` URL
    pub roads_url: String,
    /// Two-letter state the layers are filtered to
    pub state: String,
    /// Upper bound on features per response
    pub result_count: u32,
    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GisConfig {
    fn default() -> Self {
        Self {
            boundaries_url: DEFAULT_BOUNDARIES_URL.to_string(),
            roads_url: DEFAULT_ROADS_URL.to_string(),
            state: "CO".to_string(),
            result_count: 1000,
            timeout_secs: 20,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: "sqlite://camping.db".to_string(),
            static_dir: "public".to_string(),
            session_ttl_secs: 60 * 60,
            session_secure: false,
            password_cost: 12,
            gis: GisConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Override fields from environment-style variables
    ///
    /// `lookup` is `std::env::var(..).ok()` in production; tests pass a map.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SERVER_HOST") {
            self.host = v;
        }
        if let Some(v) = lookup("SERVER_PORT") {
            self.port = parse_var("SERVER_PORT", &v)?;
        }
        if let Some(v) = lookup("DATABASE_URL") {
            self.database_url = v;
        }
        if let Some(v) = lookup("STATIC_DIR") {
            self.static_dir = v;
        }
        if let Some(v) = lookup("SESSION_TTL_SECS") {
            self.session_ttl_secs = parse_var("SESSION_TTL_SECS", &v)?;
        }
        if let Some(v) = lookup("SESSION_SECURE") {
            self.session_secure = parse_var("SESSION_SECURE", &v)?;
        }
        if let Some(v) = lookup("PASSWORD_COST") {
            self.password_cost = parse_var("PASSWORD_COST", &v)?;
        }
        if let Some(v) = lookup("GIS_BOUNDARIES_URL") {
            self.gis.boundaries_url = v;
        }
        if let Some(v) = lookup("GIS_ROADS_URL") {
            self.gis.roads_url = v;
        }
        if let Some(v) = lookup("GIS_STATE") {
            self.gis.state = v;
        }
        if let Some(v) = lookup("GIS_RESULT_COUNT") {
            self.gis.result_count = parse_var("GIS_RESULT_COUNT", &v)?;
        }
        if let Some(v) = lookup("GIS_TIMEOUT_SECS") {
            self.gis.timeout_secs = parse_var("GIS_TIMEOUT_SECS", &v)?;
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::invalid("port", "must be non-zero"));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("database_url"));
        }
        if !(4..=31).contains(&self.password_cost) {
            return Err(ConfigError::invalid("password_cost", "must be between 4 and 31"));
        }
        if self.session_ttl_secs == 0 {
            return Err(ConfigError::invalid("session_ttl_secs", "must be non-zero"));
        }
        for url in [&self.gis.boundaries_url, &self.gis.roads_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        let state = &self.gis.state;
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::invalid("gis.state", "must be a two-letter upper-case code"));
        }
        if self.gis.result_count == 0 {
            return Err(ConfigError::invalid("gis.result_count", "must be non-zero"));
        }
        if self.gis.timeout_secs == 0 {
            return Err(ConfigError::invalid("gis.timeout_secs", "must be non-zero"));
        }
        Ok(())
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, format!("cannot parse {:?}", value)))
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    pub fn static_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.static_dir = dir.into();
        self
    }

    pub fn session_ttl_secs(mut self, secs: u64) -> Self {
        self.config.session_ttl_secs = secs;
        self
    }

    pub fn session_secure(mut self, secure: bool) -> Self {
        self.config.session_secure = secure;
        self
    }

    pub fn password_cost(mut self, cost: u32) -> Self {
        self.config.password_cost = cost;
        self
    }

    pub fn gis_boundaries_url(mut self, url: impl Into<String>) -> Self {
        self.config.gis.boundaries_url = url.into();
        self
    }

    pub fn gis_roads_url(mut self, url: impl Into<String>) -> Self {
        self.config.gis.roads_url = url.into();
        self
    }

    pub fn gis_state(mut self, state: impl Into<String>) -> Self {
        self.config.gis.state = state.into();
        self
    }

    pub fn gis_result_count(mut self, count: u32) -> Self {
        self.config.gis.result_count = count;
        self
    }

    pub fn gis_timeout_secs(mut self, secs: u64) -> Self {
        self.config.gis.timeout_secs = secs;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            message: message.into(),
        }
    }
}
