//! Where session logs live.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone};
use log::warn;

use super::timestamp::{date_and_time_string, Decoration};
use crate::engine::config::AppConfig;

/// `<roaming app data>/<app>/<logg>`, created on the way if missing.
///
/// Failure to create either level is not fatal here; the first write
/// to the missing directory will report it.
pub fn log_directory(config: &AppConfig) -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        warn!("No per-user data directory, falling back to the temp directory");
        std::env::temp_dir()
    });
    prepare_log_directory(base, config)
}

/// Builds (and creates) the log directory under an explicit base.
pub fn prepare_log_directory(base: PathBuf, config: &AppConfig) -> PathBuf {
    let app_dir = base.join(&config.app_name);
    if let Err(e) = std::fs::create_dir_all(&app_dir) {
        warn!("Could not create {:?}: {}", app_dir, e);
    }

    let log_dir = app_dir.join(&config.log_subdirectory);
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        warn!("Could not create {:?}: {}", log_dir, e);
    }
    log_dir
}

/// `<app><DDMMYYHHMMSS>.<ext>`; two launches in the same second share a name.
pub fn log_filename<Tz: TimeZone>(config: &AppConfig, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}{}.{}",
        config.app_name,
        date_and_time_string(at, Decoration::Undecorated),
        config.log_extension
    )
}
