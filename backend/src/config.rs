//! Server configuration file support.
//!
//! Configuration is read from `skycalc.toml` (or the file named by
//! `SKYCALC_CONFIG`) and then overridden by the `HOST`, `PORT` and `RUST_LOG`
//! environment variables. Every setting has a default, so running without a
//! file is fine.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! request_body_limit = 16384
//!
//! [logging]
//! level = "info"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SKYCALC_CONFIG";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body in bytes; form posts are tiny
    #[serde(default = "default_request_body_limit")]
    pub request_body_limit: usize,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_body_limit() -> usize {
    16 * 1024
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_body_limit: default_request_body_limit(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `SKYCALC_CONFIG` or the default locations.
    ///
    /// Searches for `skycalc.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file is found.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        if let Ok(explicit) = env::var(CONFIG_PATH_ENV) {
            return Self::from_file(explicit);
        }

        let search_paths = [
            PathBuf::from("skycalc.toml"),
            PathBuf::from("backend/skycalc.toml"),
            PathBuf::from("../skycalc.toml"),
        ];

        for path in search_paths.iter() {
            if path.exists() {
                debug!("loading configuration from {}", path.display());
                return Self::from_file(path);
            }
        }

        debug!("no skycalc.toml found, using defaults");
        Ok(Self::default())
    }

    /// Apply `HOST`, `PORT` and `RUST_LOG` overrides.
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "PORT",
                value: port.clone(),
            })?;
        }
        if let Ok(level) = env::var("RUST_LOG") {
            self.logging.level = level;
        }
        Ok(self)
    }

    /// File (if any) plus environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_default_location()?.apply_env_overrides()
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
