//! Session file: saved settings for repeated runs

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings a designer would otherwise retype every session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFile {
    /// Explicit move table path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves_file: Option<PathBuf>,
    /// Directories searched for data tables
    #[serde(default)]
    pub data_dirs: Vec<PathBuf>,
    /// Override line, e.g. `Fire Spin:83,Bubble:145`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<String>,
}

impl SessionFile {
    /// Load a session file from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the session file to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Fill unset fields from command-line values, which take precedence
    pub fn merged_with(
        mut self,
        moves_file: Option<PathBuf>,
        data_dirs: Vec<PathBuf>,
        overrides: Option<String>,
    ) -> Self {
        if moves_file.is_some() {
            self.moves_file = moves_file;
        }
        if !data_dirs.is_empty() {
            self.data_dirs = data_dirs;
        }
        if overrides.is_some() {
            self.overrides = overrides;
        }
        self
    }
}
