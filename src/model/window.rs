//! Window-level value types shared by the registry, router and platform layer.

use std::fmt;

use super::constants::*;

/// Opaque identifier of a top-level window owned by the operating system.
///
/// The application never owns the window behind it: the identifier may go
/// stale at any moment, and every consumer must treat a dead handle as a
/// no-op. The raw value is the native handle (`HWND` on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(isize);

impl WindowId {
    /// Wrap a raw native handle. Returns `None` for the null handle.
    pub fn from_raw(raw: isize) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    /// The raw native handle value.
    pub fn raw(self) -> isize {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What part of a window lies under a screen point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTest {
    Nowhere,
    Client,
    Caption,
    SysMenu,
    MinButton,
    MaxButton,
    Close,
    /// Resizable or fixed window frame.
    Border,
    /// Any code this application does not distinguish.
    Other(i32),
}

impl HitTest {
    /// Classify a native `WM_NCHITTEST` result code.
    pub fn from_code(code: i32) -> Self {
        match code {
            HT_NOWHERE => HitTest::Nowhere,
            HT_CLIENT => HitTest::Client,
            HT_CAPTION => HitTest::Caption,
            HT_SYSMENU => HitTest::SysMenu,
            HT_MINBUTTON => HitTest::MinButton,
            HT_MAXBUTTON => HitTest::MaxButton,
            HT_CLOSE => HitTest::Close,
            HT_SIZE_FIRST..=HT_SIZE_LAST | HT_BORDER => HitTest::Border,
            other => HitTest::Other(other),
        }
    }

    /// True for the regions that open the contextual popup: the caption and
    /// the system-menu icon. Caption buttons do not count.
    pub fn is_title_bar(self) -> bool {
        matches!(self, HitTest::Caption | HitTest::SysMenu)
    }
}

/// Label of the toggle entry in a menu, derived from the live topmost state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerLabel {
    Lock,
    Unlock,
}

impl LayerLabel {
    /// Label for a window whose live topmost attribute is `pinned`.
    pub fn for_state(pinned: bool) -> Self {
        if pinned {
            LayerLabel::Unlock
        } else {
            LayerLabel::Lock
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            LayerLabel::Lock => LABEL_LOCK,
            LayerLabel::Unlock => LABEL_UNLOCK,
        }
    }
}

/// Shorten a window title for display in a menu.
pub fn menu_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return UNTITLED_WINDOW.to_string();
    }
    if trimmed.chars().count() <= MAX_MENU_TITLE_CHARS {
        return trimmed.to_string();
    }
    let mut short: String = trimmed.chars().take(MAX_MENU_TITLE_CHARS - 1).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_is_not_a_window() {
        assert!(WindowId::from_raw(0).is_none());
        assert_eq!(WindowId::from_raw(0x1234).map(WindowId::raw), Some(0x1234));
    }

    #[test]
    fn window_id_displays_as_hex() {
        let id = WindowId::from_raw(0xABC).unwrap();
        assert_eq!(id.to_string(), "0xABC");
    }

    #[test]
    fn caption_and_sysmenu_are_title_bar() {
        assert!(HitTest::from_code(HT_CAPTION).is_title_bar());
        assert!(HitTest::from_code(HT_SYSMENU).is_title_bar());
    }

    #[test]
    fn other_regions_are_not_title_bar() {
        for code in [HT_NOWHERE, HT_CLIENT, HT_MINBUTTON, HT_MAXBUTTON, HT_CLOSE, 12, HT_BORDER, 99] {
            assert!(!HitTest::from_code(code).is_title_bar(), "code {code}");
        }
    }

    #[test]
    fn resize_codes_map_to_border() {
        assert_eq!(HitTest::from_code(HT_SIZE_FIRST), HitTest::Border);
        assert_eq!(HitTest::from_code(HT_SIZE_LAST), HitTest::Border);
        assert_eq!(HitTest::from_code(-2), HitTest::Other(-2));
    }

    #[test]
    fn label_follows_live_state() {
        assert_eq!(LayerLabel::for_state(true).text(), "Unlock layer");
        assert_eq!(LayerLabel::for_state(false).text(), "Lock layer");
    }

    #[test]
    fn menu_title_shortens_long_titles() {
        let long = "x".repeat(100);
        let short = menu_title(&long);
        assert_eq!(short.chars().count(), MAX_MENU_TITLE_CHARS);
        assert!(short.ends_with('…'));
        assert_eq!(menu_title("  Notepad "), "Notepad");
        assert_eq!(menu_title("   "), UNTITLED_WINDOW);
    }
}
