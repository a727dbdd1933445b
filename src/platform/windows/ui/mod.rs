//! UI components for Windows: tray icon and menus.

pub mod menu;
pub mod popup;
pub mod tray;
