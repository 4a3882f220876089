//! Configuration management
//!
//! Backend timing, service endpoints, readiness and sharing settings, read
//! from TOML. Every field has a default, so an empty file is a valid config.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::models::{DEFAULT_SHARE_BASE_URL, DEFAULT_VALIDITY_DAYS, DocumentStatus};
use crate::core::services::ServiceEndpoints;
use crate::paths;

/// Why a config file could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid config TOML
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// The config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file could not be written
    #[error("failed to write config {path}: {source}")]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// carerpassport configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend timing
    #[serde(default)]
    pub backend: BackendConfig,
    /// API address per verification service
    #[serde(default)]
    pub services: ServiceEndpoints,
    /// Readiness settings
    #[serde(default)]
    pub documents: DocumentsConfig,
    /// Access code settings
    #[serde(default)]
    pub sharing: SharingConfig,
}

/// Backend timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Shortest simulated response delay
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,
    /// Longest simulated response delay
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// HTTP request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_min_delay_ms() -> u64 {
    1000
}

const fn default_max_delay_ms() -> u64 {
    3000
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Shortest simulated delay
    #[must_use]
    pub const fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    /// Longest simulated delay
    #[must_use]
    pub const fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// HTTP request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Readiness settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentsConfig {
    /// Days before expiry a document counts as expiring
    #[serde(default = "default_expiring_window_days")]
    pub expiring_window_days: i64,
}

const fn default_expiring_window_days() -> i64 {
    30
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            expiring_window_days: default_expiring_window_days(),
        }
    }
}

impl DocumentsConfig {
    /// Status of a tracked document using the configured expiring window
    #[must_use]
    pub fn status_for(
        &self,
        uploaded: bool,
        expiry: Option<NaiveDate>,
        today: NaiveDate,
    ) -> DocumentStatus {
        DocumentStatus::from_expiry(uploaded, expiry, today, self.expiring_window_days)
    }
}

/// Access code settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharingConfig {
    /// Days a new access code stays valid
    #[serde(default = "default_code_validity_days")]
    pub code_validity_days: i64,
    /// Site where employers redeem codes
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

const fn default_code_validity_days() -> i64 {
    DEFAULT_VALIDITY_DAYS
}

fn default_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            code_validity_days: default_code_validity_days(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load config from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from the first location that applies
    ///
    /// An explicit path must exist. Otherwise `$CARERPASSPORT_CONFIG` then
    /// `~/.carerpassport/config.toml` are tried, skipping absent files, and
    /// defaults apply if neither exists.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidates = paths::env_config().into_iter().chain([paths::global_config()]);
        for candidate in candidates {
            if candidate.exists() {
                log::debug!("Loading config from {}", candidate.display());
                return Self::load(&candidate);
            }
            log::debug!("No config at {}", candidate.display());
        }
        Ok(Self::default())
    }

    /// Save config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)
    }
}
