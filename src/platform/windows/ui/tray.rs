//! System tray (notification area) icon for Windows.
//!
//! The menu is rebuilt from live state on every open.

use std::cell::RefCell;

use tracing::warn;
use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NIM_MODIFY,
    NOTIFYICONDATAW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, LoadIconW, HICON, IDI_APPLICATION, WM_USER,
};

use super::menu::{track_menu, Anchor};
use crate::error::{Error, Result};
use crate::events::AppEvent;
use crate::menu::{tray_tooltip, TrayMenu};
use crate::model::ScreenPoint;
use crate::platform::windows::ffi::copy_to_fixed;

// Custom message for tray icon events
pub const WM_TRAYICON: u32 = WM_USER + 1;

// Tray icon ID
const TRAY_ICON_ID: u32 = 1;

thread_local! {
    static TRAY_HWND: RefCell<Option<HWND>> = const { RefCell::new(None) };
}

fn notify_data(hwnd: HWND) -> NOTIFYICONDATAW {
    NOTIFYICONDATAW {
        cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
        hWnd: hwnd,
        uID: TRAY_ICON_ID,
        ..Default::default()
    }
}

/// Add the tray icon. Also used to restore it after Explorer restarts.
pub fn install_tray_icon(hwnd: HWND, pinned: usize) -> Result<()> {
    TRAY_HWND.with(|h| *h.borrow_mut() = Some(hwnd));

    unsafe {
        let hicon = LoadIconW(None, IDI_APPLICATION).unwrap_or(HICON::default());

        let mut nid = NOTIFYICONDATAW {
            uFlags: NIF_ICON | NIF_MESSAGE | NIF_TIP,
            uCallbackMessage: WM_TRAYICON,
            hIcon: hicon,
            ..notify_data(hwnd)
        };
        copy_to_fixed(&tray_tooltip(pinned), &mut nid.szTip);

        if !Shell_NotifyIconW(NIM_ADD, &nid).as_bool() {
            return Err(Error::TrayIcon);
        }
    }
    Ok(())
}

/// Remove the tray icon.
pub fn remove_tray_icon() {
    TRAY_HWND.with(|h| {
        if let Some(hwnd) = h.borrow_mut().take() {
            unsafe {
                let _ = Shell_NotifyIconW(NIM_DELETE, &notify_data(hwnd));
            }
        }
    });
}

/// Update the tooltip with the current pin count.
pub fn update_tray_tooltip(pinned: usize) {
    TRAY_HWND.with(|h| {
        if let Some(hwnd) = *h.borrow() {
            let mut nid = NOTIFYICONDATAW {
                uFlags: NIF_TIP,
                ..notify_data(hwnd)
            };
            copy_to_fixed(&tray_tooltip(pinned), &mut nid.szTip);
            unsafe {
                let _ = Shell_NotifyIconW(NIM_MODIFY, &nid);
            }
        }
    });
}

/// Show the tray menu at the cursor and return the chosen action.
pub fn show_tray_menu(hwnd: HWND, menu: &TrayMenu) -> Option<AppEvent> {
    let mut pt = POINT::default();
    unsafe {
        let _ = GetCursorPos(&mut pt);
    }

    match track_menu(hwnd, &menu.entries(), ScreenPoint::new(pt.x, pt.y), Anchor::Above) {
        Ok(command) => menu.event_for(command),
        Err(e) => {
            warn!("tray menu failed: {e}");
            None
        }
    }
}
