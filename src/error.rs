//! Crate-wide error type.
//!
//! Stale window handles are never errors: the directory reports them as
//! neutral results. Only resource registration and configuration problems
//! surface here.

use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Convenient result type for the crate.
pub type Result<T> = StdResult<T, Error>;

/// Unified error type for LayerPin.
#[derive(Debug, Error)]
pub enum Error {
    /// A hotkey string could not be parsed.
    #[error("Invalid hotkey '{0}'")]
    InvalidHotkey(String),

    /// The hotkey is well formed but the OS refused to register it,
    /// usually because another application already claimed it.
    #[error("Hotkey {combo} is unavailable: {reason}")]
    HotkeyUnavailable {
        /// Canonical rendering of the combination.
        combo: String,
        /// Error reported by the OS.
        reason: String,
    },

    /// The system-wide pointer monitor could not be installed.
    #[error("Pointer monitor could not be installed: {0}")]
    PointerMonitor(String),

    /// The foreground WinEvent hook could not be installed.
    #[error("Foreground tracker could not be installed")]
    ForegroundTracker,

    /// The notification-area icon could not be added.
    #[error("Tray icon could not be added")]
    TrayIcon,

    /// I/O failure while reading or writing the config file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid JSON for our schema.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Any other Win32 failure.
    #[cfg(target_os = "windows")]
    #[error("Win32 error: {0}")]
    Win32(#[from] windows::core::Error),
}
