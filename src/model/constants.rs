//! Application constants and default values.

// === Identity ===

/// Application name, used for the config directory and tray tooltip.
pub const APP_NAME: &str = "LayerPin";

/// Config file name inside the application directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

// === Defaults ===

/// Default global hotkey that toggles the foreground window.
pub const DEFAULT_HOTKEY: &str = "Ctrl+Alt+T";

/// The title-bar popup is enabled unless the config turns it off.
pub const DEFAULT_TITLE_BAR_MENU: bool = true;

// === Menu labels ===

/// Label shown when the target window is not topmost.
pub const LABEL_LOCK: &str = "Lock layer";

/// Label shown when the target window is topmost.
pub const LABEL_UNLOCK: &str = "Unlock layer";

/// Label of the bulk release action.
pub const LABEL_UNLOCK_ALL: &str = "Unlock all";

/// Tray menu entry that toggles the window the user was working in.
pub const LABEL_TOGGLE_CURRENT: &str = "Toggle current window";

/// Tray submenu listing pinned windows.
pub const LABEL_PINNED_WINDOWS: &str = "Pinned windows";

/// Placeholder entry when nothing is pinned.
pub const LABEL_NOTHING_PINNED: &str = "(none)";

/// Tray menu entry that exits the application.
pub const LABEL_QUIT: &str = "Quit";

/// Window titles longer than this are shortened in menus.
pub const MAX_MENU_TITLE_CHARS: usize = 48;

/// Windows without a caption are listed under this name.
pub const UNTITLED_WINDOW: &str = "(untitled window)";

// === Native hit-test codes (WM_NCHITTEST) ===

/// Not over any part of the window.
pub const HT_NOWHERE: i32 = 0;
/// Client area.
pub const HT_CLIENT: i32 = 1;
/// Title bar.
pub const HT_CAPTION: i32 = 2;
/// System menu icon.
pub const HT_SYSMENU: i32 = 3;
/// Minimize button.
pub const HT_MINBUTTON: i32 = 8;
/// Maximize button.
pub const HT_MAXBUTTON: i32 = 9;
/// First resize-border code (HTLEFT).
pub const HT_SIZE_FIRST: i32 = 10;
/// Last resize-border code (HTBOTTOMRIGHT).
pub const HT_SIZE_LAST: i32 = 17;
/// Non-resizable border.
pub const HT_BORDER: i32 = 18;
/// Close button.
pub const HT_CLOSE: i32 = 20;
