//! JSON configuration file.
//!
//! Stored at `%APPDATA%/LayerPin/config.json`. Read once at startup; a
//! missing file is created with defaults so users have something to edit.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::hotkey::HotkeySpec;
use crate::model::constants::*;

/// User-editable settings. Unknown or missing fields fall back to defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Combination that toggles the foreground window, e.g. `"Ctrl+Alt+T"`.
    pub hotkey: String,
    /// Install the pointer monitor that opens the title-bar popup.
    pub title_bar_menu: bool,
    /// Log at debug level and honour `RUST_LOG`.
    pub debug_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotkey: DEFAULT_HOTKEY.to_string(),
            title_bar_menu: DEFAULT_TITLE_BAR_MENU,
            debug_logging: false,
        }
    }
}

impl Config {
    /// Default config path: `%APPDATA%/LayerPin/config.json`.
    pub fn default_path() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join(APP_NAME).join(CONFIG_FILE_NAME)
    }

    /// Read a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the config as pretty JSON, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load `path`, falling back to defaults.
    ///
    /// A missing file is created with defaults. A broken file is left alone
    /// so the user's edits are not lost, and defaults are used for this run.
    /// The problem, if any, is returned rather than logged because this runs
    /// before logging is configured.
    pub fn load_or_init(path: &Path) -> (Self, Option<Error>) {
        if !path.exists() {
            let config = Self::default();
            let problem = config.save_to(path).err();
            return (config, problem);
        }

        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// The configured hotkey, or the default one if the string is invalid.
    pub fn hotkey_spec(&self) -> HotkeySpec {
        match HotkeySpec::parse(&self.hotkey) {
            Ok(spec) => spec,
            Err(e) => {
                warn!("{e}; using {DEFAULT_HOTKEY}");
                HotkeySpec::default()
            }
        }
    }
}
