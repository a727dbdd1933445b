//! Input sources for Windows: the global hotkey, the low-level pointer
//! monitor and the foreground tracker.
//!
//! Each source is an RAII guard; dropping it releases the OS registration.

pub mod foreground;
pub mod hotkeys;
pub mod pointer;

pub use foreground::ForegroundTracker;
pub use hotkeys::{GlobalHotkey, HOTKEY_TOGGLE};
pub use pointer::{PointerMonitor, WM_APP_DRAIN};
