//! Menu contents for the tray and the title-bar popup.
//!
//! Menus are rebuilt from live state every time they open, so labels never
//! go stale. This module only describes entries and maps the chosen command
//! back to an [`AppEvent`]; `platform::windows::ui` renders them.

use crate::events::AppEvent;
use crate::model::constants::*;
use crate::model::{LayerLabel, WindowId};

// Menu item IDs
pub const MENU_TOGGLE_CURRENT: u32 = 1001;
pub const MENU_UNLOCK_ALL: u32 = 1002;
pub const MENU_QUIT: u32 = 1003;
pub const MENU_CONTEXT_TOGGLE: u32 = 1101;
/// First ID of the "Pinned windows" entries; entry `i` is `MENU_PINNED_BASE + i`.
pub const MENU_PINNED_BASE: u32 = 2000;

/// The "no selection" command returned when a menu is dismissed.
pub const MENU_NONE: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item { id: u32, text: String, enabled: bool },
    Separator,
    Submenu { text: String, entries: Vec<MenuEntry> },
}

impl MenuEntry {
    fn item(id: u32, text: impl Into<String>) -> Self {
        MenuEntry::Item {
            id,
            text: text.into(),
            enabled: true,
        }
    }

    fn disabled(text: impl Into<String>) -> Self {
        MenuEntry::Item {
            id: MENU_NONE,
            text: text.into(),
            enabled: false,
        }
    }
}

/// Tray menu, built from the registry when the user opens it.
#[derive(Debug, Clone, Default)]
pub struct TrayMenu {
    /// Pinned windows with display titles.
    pub pinned: Vec<(WindowId, String)>,
    /// Rendered hotkey, if one is registered.
    pub hotkey: Option<String>,
}

impl TrayMenu {
    pub fn entries(&self) -> Vec<MenuEntry> {
        let toggle = match &self.hotkey {
            Some(hotkey) => format!("{LABEL_TOGGLE_CURRENT}\t{hotkey}"),
            None => LABEL_TOGGLE_CURRENT.to_string(),
        };

        let pinned = if self.pinned.is_empty() {
            vec![MenuEntry::disabled(LABEL_NOTHING_PINNED)]
        } else {
            self.pinned
                .iter()
                .zip(MENU_PINNED_BASE..)
                .map(|((_, title), id)| MenuEntry::item(id, title.clone()))
                .collect()
        };

        vec![
            MenuEntry::item(MENU_TOGGLE_CURRENT, toggle),
            MenuEntry::Item {
                id: MENU_UNLOCK_ALL,
                text: LABEL_UNLOCK_ALL.to_string(),
                enabled: !self.pinned.is_empty(),
            },
            MenuEntry::Separator,
            MenuEntry::Submenu {
                text: LABEL_PINNED_WINDOWS.to_string(),
                entries: pinned,
            },
            MenuEntry::Separator,
            MenuEntry::item(MENU_QUIT, LABEL_QUIT),
        ]
    }

    /// Event for the chosen command, `None` when dismissed or unknown.
    pub fn event_for(&self, command: u32) -> Option<AppEvent> {
        match command {
            MENU_TOGGLE_CURRENT => Some(AppEvent::ToggleCurrent),
            MENU_UNLOCK_ALL => Some(AppEvent::UnlockAll),
            MENU_QUIT => Some(AppEvent::RequestQuit),
            id if id >= MENU_PINNED_BASE => self
                .pinned
                .get((id - MENU_PINNED_BASE) as usize)
                .map(|&(window, _)| AppEvent::UnpinWindow(window)),
            _ => None,
        }
    }
}

/// The popup shown on a title-bar right-click.
#[derive(Debug, Clone, Copy)]
pub struct ContextMenu {
    pub label: LayerLabel,
}

impl ContextMenu {
    pub fn entries(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::item(MENU_CONTEXT_TOGGLE, self.label.text()),
            MenuEntry::Separator,
            MenuEntry::item(MENU_UNLOCK_ALL, LABEL_UNLOCK_ALL),
        ]
    }

    /// The popup always answers, so the router can forget its target.
    pub fn event_for(&self, command: u32) -> AppEvent {
        match command {
            MENU_CONTEXT_TOGGLE => AppEvent::ToggleContextTarget,
            MENU_UNLOCK_ALL => AppEvent::UnlockAll,
            _ => AppEvent::ContextMenuDismissed,
        }
    }
}

/// Tray tooltip for the current pin count.
pub fn tray_tooltip(pinned: usize) -> String {
    match pinned {
        0 => format!("{APP_NAME} - nothing pinned"),
        1 => format!("{APP_NAME} - 1 window pinned"),
        n => format!("{APP_NAME} - {n} windows pinned"),
    }
}
