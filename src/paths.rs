//! Centralized path definitions for carerpassport
//!
//! ## Config lookup order
//!
//! 1. An explicit `--config <path>`
//! 2. `$CARERPASSPORT_CONFIG`
//! 3. `~/.carerpassport/config.toml`
//!
//! If none of these exist, built-in defaults apply.

use std::path::PathBuf;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "CARERPASSPORT_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".carerpassport";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global carerpassport directory.
///
/// Located at `~/.carerpassport/`.
#[must_use]
pub fn global_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get path to the global config file.
#[must_use]
pub fn global_config() -> PathBuf {
    global_dir().join(GLOBAL_CONFIG_FILE)
}

/// Config file named by `$CARERPASSPORT_CONFIG`, if set and non-empty
#[must_use]
pub fn env_config() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}
