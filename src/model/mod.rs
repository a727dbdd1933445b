//! Application domain model.
//!
//! This module contains pure types (no FFI dependencies): window handles,
//! screen points, hit-test classifications and configuration constants.
//!
//! The Win32 mapping of these types lives in `platform::windows`.

pub mod constants;
pub mod window;

pub use constants::*;
pub use window::{HitTest, LayerLabel, ScreenPoint, WindowId};
