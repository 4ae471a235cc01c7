//! Configuration loading for the standup monitor.
//!
//! The monitor is configured by a small YAML file. Durations are written in
//! minutes for humans and converted to seconds here; the rest of the crate only
//! ever sees the validated [`AppConfig`].
//!
//! ## File Lookup
//!
//! 1. The path passed with `--config`, if any
//! 2. `standup_config.yml` in the current directory
//! 3. `standup_config.yml` in the per-user data directory
//!
//! ## Example
//!
//! ```yaml
//! work_time_minutes: 60
//! break_time_minutes: 2
//! csv_file: data/activity_log.csv
//! state_file: data/last_state.json
//! activation_threshold_seconds: 10
//! break_messages:
//!   - Time for a break!
//!   - Stand up and stretch!
//! ```
//!
//! ## Error Handling
//!
//! A configuration problem is the only error that stops the monitor from
//! starting. Every variant of [`ConfigError`] names the offending file or key
//! so the operator can fix it before the loop begins.

use super::data_storage::DataStorage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file name used for lookups in the working and data directories.
pub const CONFIG_FILE_NAME: &str = "standup_config.yml";

/// Sustained-activity requirement used when the file does not set one.
pub const DEFAULT_ACTIVATION_THRESHOLD_SECONDS: u64 = 10;

/// Reminder header used when the file does not list any break messages.
pub const DEFAULT_BREAK_MESSAGE: &str = "Time for a break!";

const SECONDS_PER_MINUTE: u64 = 60;
const TEST_FILE_PREFIX: &str = "test_";
const RAW_FILE_SUFFIX: &str = "_raw";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file '{}' not found. Please create a configuration file with required settings.", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration must specify '{0}'")]
    MissingField(&'static str),

    #[error("Configuration value '{0}' must be greater than zero")]
    NonPositive(&'static str),

    #[error("Configuration value '{0}' is too large")]
    TooLarge(&'static str),

    #[error("Configuration value 'break_messages' must contain at least one message")]
    EmptyBreakMessages,

    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Raw contents of the YAML file. Every key is optional at this level;
/// required keys are enforced by [`AppConfig::resolve`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Continuous work time in minutes before a break reminder.
    pub work_time_minutes: Option<u64>,
    /// Inactivity time in minutes that counts as a break.
    pub break_time_minutes: Option<u64>,
    pub csv_file: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
    pub test_mode: Option<bool>,
    /// Seconds of sustained input required before a break ends.
    pub activation_threshold_seconds: Option<u64>,
    pub break_messages: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn read(path: &Path) -> Result<ConfigFile, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty document carries no keys; let validation report what is missing.
        if contents.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub work_time_minutes: Option<u64>,
    pub break_time_minutes: Option<u64>,
    pub csv_file: Option<PathBuf>,
    pub test_mode: bool,
}

/// Validated, immutable monitor configuration. All durations are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub work_duration_sec: u64,
    pub break_duration_sec: u64,
    /// May be zero, meaning the first dense burst of input ends a break.
    pub activation_threshold_sec: u64,
    /// Session log; `None` disables session logging.
    pub csv_file: Option<PathBuf>,
    pub state_file: PathBuf,
    pub test_mode: bool,
    pub break_messages: Vec<String>,
}

impl AppConfig {
    /// Locates, reads and validates the configuration, then creates the
    /// directories the log and state files live in.
    pub fn load(explicit_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<AppConfig, ConfigError> {
        let path = Self::locate(explicit_path);
        let file = ConfigFile::read(&path)?;
        let config = Self::resolve(file, overrides)?;
        config.ensure_directories()?;
        Ok(config)
    }

    /// Picks the configuration file to read.
    ///
    /// An explicit path always wins, even when it does not exist, so that a
    /// typo is reported instead of silently falling back to another file.
    pub fn locate(explicit_path: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit_path {
            return path.to_path_buf();
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return local;
        }

        DataStorage::new().base_path().join(CONFIG_FILE_NAME)
    }

    /// Applies overrides and defaults to the file contents and validates the result.
    pub fn resolve(file: ConfigFile, overrides: &ConfigOverrides) -> Result<AppConfig, ConfigError> {
        let work_minutes = overrides
            .work_time_minutes
            .or(file.work_time_minutes)
            .ok_or(ConfigError::MissingField("work_time_minutes"))?;
        let break_minutes = overrides
            .break_time_minutes
            .or(file.break_time_minutes)
            .ok_or(ConfigError::MissingField("break_time_minutes"))?;
        let csv_file = overrides
            .csv_file
            .clone()
            .or(file.csv_file)
            .ok_or(ConfigError::MissingField("csv_file"))?;
        let state_file = file.state_file.ok_or(ConfigError::MissingField("state_file"))?;

        if work_minutes == 0 {
            return Err(ConfigError::NonPositive("work_time_minutes"));
        }
        if break_minutes == 0 {
            return Err(ConfigError::NonPositive("break_time_minutes"));
        }

        let break_messages = match file.break_messages {
            Some(messages) if messages.is_empty() => return Err(ConfigError::EmptyBreakMessages),
            Some(messages) => messages,
            None => vec![DEFAULT_BREAK_MESSAGE.to_string()],
        };

        let config = AppConfig {
            work_duration_sec: minutes_to_seconds(work_minutes, "work_time_minutes")?,
            break_duration_sec: minutes_to_seconds(break_minutes, "break_time_minutes")?,
            activation_threshold_sec: file
                .activation_threshold_seconds
                .unwrap_or(DEFAULT_ACTIVATION_THRESHOLD_SECONDS),
            csv_file: Some(csv_file),
            state_file,
            test_mode: overrides.test_mode || file.test_mode.unwrap_or(false),
            break_messages,
        };

        Ok(if config.test_mode { config.for_test_mode() } else { config })
    }

    /// Redirects the session log to `test_<name>` so test runs never touch real data.
    pub fn for_test_mode(self) -> AppConfig {
        let csv_file = self.csv_file.as_deref().map(|path| with_stem_prefix(path, TEST_FILE_PREFIX));
        AppConfig { csv_file, ..self }
    }

    /// Location of the raw per-interval activity log next to the session log.
    pub fn raw_log_file(&self) -> Option<PathBuf> {
        self.csv_file.as_deref().map(|path| with_stem_suffix(path, RAW_FILE_SUFFIX))
    }

    pub fn ensure_directories(&self) -> Result<(), ConfigError> {
        let files = self.csv_file.iter().chain(std::iter::once(&self.state_file));
        for file in files {
            if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

fn minutes_to_seconds(minutes: u64, key: &'static str) -> Result<u64, ConfigError> {
    minutes
        .checked_mul(SECONDS_PER_MINUTE)
        .ok_or(ConfigError::TooLarge(key))
}

fn with_stem_prefix(path: &Path, prefix: &str) -> PathBuf {
    rename_stem(path, |stem| format!("{}{}", prefix, stem))
}

fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    rename_stem(path, |stem| format!("{}{}", stem, suffix))
}

fn rename_stem(path: &Path, rename: impl FnOnce(&str) -> String) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let mut file_name = rename(&stem);
    if let Some(ext) = path.extension() {
        file_name.push('.');
        file_name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(file_name)
}
