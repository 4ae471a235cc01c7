//! Location of the per-user data directory, where the configuration file is
//! looked up when none is given on the command line or in the working directory.

use std::env::consts::OS;
use std::env::var;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "standup";

/// Per-user application data directory.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
