//! Session storage from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Directory for session files (default: platform data dir)
    pub dir: Option<PathBuf>,
}

impl FileStoreConfig {
    /// Configured directory, else `<data dir>/agora/sessions`
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("agora").join("sessions")))
    }
}
