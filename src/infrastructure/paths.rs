//! Filesystem locations for configuration, data, and logs.
//!
//! All on-disk state lives under the platform's standard directories, resolved
//! through `dirs-next`. Falls back to the current directory when the platform
//! reports no home, so the application still runs in minimal containers.

use std::path::PathBuf;

const APP_DIR: &str = "marquee";

/// Returns the data directory for persistent state and logs.
///
/// Typically `~/.local/share/marquee` on Linux.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs_next::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the configuration directory.
///
/// Typically `~/.config/marquee` on Linux.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Path of the optional configuration file.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Path of the local trending store file, used when no remote store is
/// configured.
#[must_use]
pub fn default_store_file() -> PathBuf {
    data_dir().join("trending.json")
}

/// Path of the rotating log file.
#[must_use]
pub fn log_file() -> PathBuf {
    data_dir().join("marquee.log")
}
