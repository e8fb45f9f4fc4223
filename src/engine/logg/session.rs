//! Per-session `.logg` file.
//!
//! Every write is a full open/append/close cycle; no handle is kept
//! between calls. Not safe for concurrent writers.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use super::notify::{Notifier, LOG_ERROR_BODY, LOG_ERROR_TITLE};
use super::paths;
use super::timestamp::{self, date_and_time_string, Decoration};
use crate::engine::command_line::AppFlags;
use crate::engine::config::AppConfig;
use crate::engine::error::LogError;

pub struct SessionLog {
    directory: PathBuf,
    filename: String,
    active: bool,
    notifier: Box<dyn Notifier>,
}

impl SessionLog {
    /// Opens the session log under the per-user data directory.
    pub fn open(config: &AppConfig, flags: AppFlags, notifier: Box<dyn Notifier>) -> Self {
        let directory = paths::log_directory(config);
        Self::start(directory, config, flags, notifier)
    }

    /// Like [`SessionLog::open`] but rooted at `base` instead of the user data directory.
    pub fn open_in(
        base: impl Into<PathBuf>,
        config: &AppConfig,
        flags: AppFlags,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let directory = paths::prepare_log_directory(base.into(), config);
        Self::start(directory, config, flags, notifier)
    }

    /// A log at an exact location. Writes nothing until posted to.
    pub fn with_location(
        directory: impl Into<PathBuf>,
        filename: impl Into<String>,
        active: bool,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
            active,
            notifier,
        }
    }

    fn start(
        directory: PathBuf,
        config: &AppConfig,
        flags: AppFlags,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let filename = paths::log_filename(config, &timestamp::now());
        let active = !flags.contains(AppFlags::NO_LOG);
        let log = Self::with_location(directory, filename, active, notifier);

        if log.active {
            let mut text = config.log_header();
            text.push_str(&Self::line("Application initialized."));
            log.write_or_notify(&text);
        } else {
            debug!("Session log disabled from the command line");
        }
        log
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    /// Appends `[<DD/MM/YY HH:MM:SS>] <message>` to the log.
    ///
    /// Silent while inactive. If the file cannot be opened the user is
    /// told and the message is dropped.
    pub fn post(&self, message: impl AsRef<str>) {
        if !self.active {
            return;
        }
        let message = message.as_ref();
        info!("{}", message);
        self.write_or_notify(&Self::line(message));
    }

    /// Turns logging on. Returns false if it already was.
    pub fn activate(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.post("Logger activated.");
        true
    }

    /// Turns logging off. Returns false if it already was.
    pub fn deactivate(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.post("Logger deactivated.");
        self.active = false;
        true
    }

    fn line(message: &str) -> String {
        format!(
            "[{}] {}\n",
            date_and_time_string(&timestamp::now(), Decoration::Decorated),
            message
        )
    }

    fn write_or_notify(&self, text: &str) {
        match self.append(text) {
            Ok(()) => {}
            Err(e @ LogError::Open { .. }) => {
                error!("{}", e);
                self.notifier.error(LOG_ERROR_TITLE, LOG_ERROR_BODY);
            }
            Err(e) => error!("{}", e),
        }
    }

    fn append(&self, text: &str) -> Result<(), LogError> {
        let path = self.path();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;
        file.write_all(text.as_bytes())
            .map_err(|source| LogError::Write { path, source })
    }
}

impl std::fmt::Debug for SessionLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionLog")
            .field("directory", &self.directory)
            .field("filename", &self.filename)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

/// Formats like `format!` and posts the result to a [`SessionLog`].
#[macro_export]
macro_rules! post_to_log {
    ($log:expr, $($arg:tt)+) => {
        $log.post(::std::format!($($arg)+))
    };
}
