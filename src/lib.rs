//! Pin any window above all others, and release it again.
//!
//! Everything outside `platform` is pure Rust with no FFI so the pin logic
//! can run as normal integration tests against an in-memory directory.

pub mod directory;
pub mod error;
pub mod events;
pub mod hotkey;
pub mod logging;
pub mod menu;
pub mod model;
pub mod registry;
pub mod router;
pub mod service;
pub mod storage;

#[cfg(target_os = "windows")]
pub mod platform;

// Re-export the core types for convenience
pub use directory::WindowDirectory;
pub use error::{Error, Result};
pub use events::{AppEvent, ShellRequest};
pub use model::{HitTest, LayerLabel, ScreenPoint, WindowId};
pub use registry::PinRegistry;
pub use router::{GestureRouter, Toggled};
pub use service::LayerService;
