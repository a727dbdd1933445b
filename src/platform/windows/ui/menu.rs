//! Renders [`MenuEntry`] lists as Win32 popup menus.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, PostMessageW, SetForegroundWindow,
    TrackPopupMenu, HMENU, MF_GRAYED, MF_POPUP, MF_SEPARATOR, MF_STRING, TPM_BOTTOMALIGN,
    TPM_LEFTALIGN, TPM_NONOTIFY, TPM_RETURNCMD, TPM_RIGHTBUTTON, TPM_TOPALIGN, WM_NULL,
};

use crate::error::Result;
use crate::menu::MenuEntry;
use crate::model::ScreenPoint;
use crate::platform::windows::ffi::wide;

/// Vertical anchoring of a popup relative to the point it opens at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Menu grows upwards (tray icon at the bottom of the screen).
    Above,
    /// Menu grows downwards (title bar).
    Below,
}

/// Show `entries` at `at` and wait for a choice. Returns the command ID,
/// or `MENU_NONE` if the menu was dismissed.
pub fn track_menu(owner: HWND, entries: &[MenuEntry], at: ScreenPoint, anchor: Anchor) -> Result<u32> {
    let menu = build_menu(entries)?;
    let vertical = match anchor {
        Anchor::Above => TPM_BOTTOMALIGN,
        Anchor::Below => TPM_TOPALIGN,
    };

    unsafe {
        // Required for the menu to close when clicking outside
        let _ = SetForegroundWindow(owner);

        let command = TrackPopupMenu(
            menu,
            TPM_RETURNCMD | TPM_NONOTIFY | TPM_RIGHTBUTTON | TPM_LEFTALIGN | vertical,
            at.x,
            at.y,
            None, // nReserved - must be None/0
            owner,
            None,
        );

        // Lets the menu's modal loop finish before the next one can start.
        let _ = PostMessageW(Some(owner), WM_NULL, WPARAM(0), LPARAM(0));
        let _ = DestroyMenu(menu);

        Ok(command.0.max(0) as u32)
    }
}

/// Build a popup menu, including submenus. The caller owns the handle.
fn build_menu(entries: &[MenuEntry]) -> Result<HMENU> {
    unsafe {
        let menu = CreatePopupMenu()?;
        if let Err(e) = append_entries(menu, entries) {
            let _ = DestroyMenu(menu);
            return Err(e);
        }
        Ok(menu)
    }
}

fn append_entries(menu: HMENU, entries: &[MenuEntry]) -> Result<()> {
    for entry in entries {
        unsafe {
            match entry {
                MenuEntry::Item { id, text, enabled } => {
                    let text = wide(text);
                    let flags = if *enabled { MF_STRING } else { MF_STRING | MF_GRAYED };
                    AppendMenuW(menu, flags, *id as usize, PCWSTR(text.as_ptr()))?;
                }
                MenuEntry::Separator => {
                    AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null())?;
                }
                MenuEntry::Submenu { text, entries } => {
                    let submenu = build_menu(entries)?;
                    let text = wide(text);
                    // Once attached, the submenu is destroyed with its parent.
                    if let Err(e) =
                        AppendMenuW(menu, MF_POPUP, submenu.0 as usize, PCWSTR(text.as_ptr()))
                    {
                        let _ = DestroyMenu(submenu);
                        return Err(e.into());
                    }
                }
            }
        }
    }
    Ok(())
}
