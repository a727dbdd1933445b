//! Typed messages crossing the boundary between OS input and the router.
//!
//! `AppEvent` flows inward (hotkey, pointer hook, menus → router);
//! `ShellRequest` flows outward (router → tray and popup). Both are pure
//! Rust, so the routing logic is testable without any window system.

use crate::model::{LayerLabel, ScreenPoint, WindowId};

/// User intent reported by an input source or a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Input sources ===
    /// The global hotkey fired.
    HotkeyPressed,

    /// The right mouse button was released somewhere on screen.
    RightButtonReleased(ScreenPoint),

    // === Menu commands ===
    /// Tray "Toggle current window".
    ToggleCurrent,

    /// Popup "Lock layer" / "Unlock layer" on the remembered title-bar target.
    ToggleContextTarget,

    /// The popup closed without a selection.
    ContextMenuDismissed,

    /// Tray or popup "Unlock all".
    UnlockAll,

    /// Tray "Pinned windows" entry for a specific window.
    UnpinWindow(WindowId),

    /// Tray "Quit".
    RequestQuit,
}

impl AppEvent {
    /// True for events that may change which windows are pinned.
    pub fn mutates_pins(&self) -> bool {
        matches!(
            self,
            AppEvent::HotkeyPressed
                | AppEvent::ToggleCurrent
                | AppEvent::ToggleContextTarget
                | AppEvent::UnlockAll
                | AppEvent::UnpinWindow(_)
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::HotkeyPressed => "Global hotkey pressed",
            AppEvent::RightButtonReleased(_) => "Right button released",
            AppEvent::ToggleCurrent => "Toggle current window",
            AppEvent::ToggleContextTarget => "Toggle title-bar target",
            AppEvent::ContextMenuDismissed => "Context menu dismissed",
            AppEvent::UnlockAll => "Unlock all windows",
            AppEvent::UnpinWindow(_) => "Unpin a listed window",
            AppEvent::RequestQuit => "Quit requested",
        }
    }
}

/// Work the router asks the presentation shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellRequest {
    /// Open the contextual popup at `at` for `target`.
    ShowContextMenu {
        at: ScreenPoint,
        target: WindowId,
        label: LayerLabel,
    },

    /// The number of pinned windows may have changed.
    RefreshTray { pinned: usize },

    /// Tear down and leave the event loop.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_changing_events_are_flagged() {
        assert!(AppEvent::HotkeyPressed.mutates_pins());
        assert!(AppEvent::ToggleCurrent.mutates_pins());
        assert!(AppEvent::ToggleContextTarget.mutates_pins());
        assert!(AppEvent::UnlockAll.mutates_pins());
        assert!(AppEvent::UnpinWindow(WindowId::from_raw(0x10).unwrap()).mutates_pins());
    }

    #[test]
    fn pointer_and_lifecycle_events_do_not_mutate() {
        assert!(!AppEvent::RightButtonReleased(ScreenPoint::new(1, 2)).mutates_pins());
        assert!(!AppEvent::ContextMenuDismissed.mutates_pins());
        assert!(!AppEvent::RequestQuit.mutates_pins());
    }

    #[test]
    fn all_events_have_descriptions() {
        let events = [
            AppEvent::HotkeyPressed,
            AppEvent::RightButtonReleased(ScreenPoint::default()),
            AppEvent::ToggleCurrent,
            AppEvent::ToggleContextTarget,
            AppEvent::ContextMenuDismissed,
            AppEvent::UnlockAll,
            AppEvent::UnpinWindow(WindowId::from_raw(0x10).unwrap()),
            AppEvent::RequestQuit,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
