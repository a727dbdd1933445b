//! Contextual popup shown on a title-bar right-click.

use tracing::warn;
use windows::Win32::Foundation::HWND;

use super::menu::{track_menu, Anchor};
use crate::events::AppEvent;
use crate::menu::ContextMenu;
use crate::model::{LayerLabel, ScreenPoint};

/// Show the popup at `at`. Always returns an event so the router can
/// forget its target when the menu is dismissed.
pub fn show_context_menu(hwnd: HWND, at: ScreenPoint, label: LayerLabel) -> AppEvent {
    let menu = ContextMenu { label };
    match track_menu(hwnd, &menu.entries(), at, Anchor::Below) {
        Ok(command) => menu.event_for(command),
        Err(e) => {
            warn!("context menu failed: {e}");
            AppEvent::ContextMenuDismissed
        }
    }
}
