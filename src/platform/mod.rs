//! Platform-specific implementations.
//!
//! Only Windows is supported: pinning relies on the Win32 topmost window
//! style, low-level mouse hooks and `RegisterHotKey`.

#[cfg(target_os = "windows")]
pub mod windows;
