//! Windows-specific implementation using the Win32 API.
//!
//! - `directory`: window queries and the topmost style
//! - `input`: global hotkey, low-level mouse hook, foreground tracker
//! - `ui`: tray icon, tray menu and title-bar popup
//! - `handlers`: drains the event bus into the service
//! - `app`: the UI-thread state slot

pub mod app;
pub mod directory;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod ui;

pub use directory::Win32Directory;
