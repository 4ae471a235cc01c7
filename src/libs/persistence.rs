//! Runtime state file used to resume after a restart, crash or power loss.
//!
//! The file is a small JSON object:
//!
//! ```json
//! {"current_state":"ACTIVE","session_start_time":1736928000.0,"break_reminder_shown":false,"last_activity_time":1736931600.5}
//! ```
//!
//! There is no version field. Missing keys load as `None` and unknown keys are
//! ignored. An unreadable or corrupt file is treated as "no saved state";
//! loading never stops the monitor from starting.

use crate::libs::config::AppConfig;
use crate::libs::messages::Message;
use crate::libs::state::AppState;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk snapshot of the runtime state.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PersistedState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_start_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_reminder_shown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_time: Option<f64>,
}

impl PersistedState {
    pub fn from_app_state(app_state: &AppState, last_activity_time: f64) -> Self {
        Self {
            current_state: Some(app_state.current_state.name().to_string()),
            session_start_time: Some(app_state.session_start_time),
            break_reminder_shown: Some(app_state.break_reminder_shown),
            last_activity_time: Some(last_activity_time),
        }
    }
}

/// Reads and writes the runtime state file named by `config.state_file`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatePersistence;

impl StatePersistence {
    pub fn new() -> Self {
        Self
    }

    /// Writes the snapshot, creating parent directories as needed. Failures are reported, not returned.
    pub fn save(&self, config: &AppConfig, app_state: &AppState, last_activity_time: f64) {
        let snapshot = PersistedState::from_app_state(app_state, last_activity_time);
        match write_atomically(&config.state_file, &snapshot) {
            Ok(()) => msg_debug!(Message::StateSaved(config.state_file.display().to_string())),
            Err(e) => msg_error!(Message::StateSaveFailed(e.to_string())),
        }
    }

    /// Returns the saved snapshot, or `None` if the file is absent or unreadable.
    pub fn load(&self, config: &AppConfig) -> Option<PersistedState> {
        let path = &config.state_file;
        if !path.exists() {
            return None;
        }

        match read_snapshot(path) {
            Ok(snapshot) => {
                msg_debug!(Message::StateLoaded(path.display().to_string()));
                Some(snapshot)
            }
            Err(e) => {
                msg_error!(Message::StateLoadFailed(e.to_string()));
                None
            }
        }
    }

    /// Removes the state file. A missing file is not an error.
    ///
    /// Returns `false` if the file exists and could not be removed.
    pub fn clear(&self, config: &AppConfig) -> bool {
        let path = &config.state_file;
        if !path.exists() {
            return true;
        }

        match fs::remove_file(path) {
            Ok(()) => {
                msg_debug!(Message::StateCleared(path.display().to_string()));
                true
            }
            Err(e) => {
                msg_error!(Message::StateClearFailed(e.to_string()));
                false
            }
        }
    }
}

fn read_snapshot(path: &Path) -> Result<PersistedState> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Writes to a sibling temp file and renames it over the target, so a crash
/// mid-write leaves the previous snapshot intact.
fn write_atomically(path: &Path, snapshot: &PersistedState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path);
    fs::write(&tmp_path, serde_json::to_string(snapshot)?)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
