//! Remembers the last application window the user worked in.
//!
//! Opening the tray menu moves the foreground to the taskbar and then to
//! us, so "Toggle current window" needs the window that was in front
//! before that.

use std::sync::atomic::{AtomicIsize, Ordering};

use tracing::{debug, trace};
use windows::Win32::Foundation::HWND;
use windows::Win32::System::Threading::GetCurrentProcessId;
use windows::Win32::UI::Accessibility::{SetWinEventHook, UnhookWinEvent, HWINEVENTHOOK};
use windows::Win32::UI::WindowsAndMessaging::{
    EVENT_SYSTEM_FOREGROUND, WINEVENT_OUTOFCONTEXT, WINEVENT_SKIPOWNPROCESS,
};

use crate::error::{Error, Result};
use crate::model::WindowId;
use crate::platform::windows::directory::{classify, WindowKind};
use crate::platform::windows::ffi::window_id;

/// `idObject` of events about the window itself rather than a child object.
const OBJID_WINDOW: i32 = 0;

static LAST_USER_WINDOW: AtomicIsize = AtomicIsize::new(0);

/// The last foreground window that was an ordinary application window.
pub fn last_user_window() -> Option<WindowId> {
    WindowId::from_raw(LAST_USER_WINDOW.load(Ordering::SeqCst))
}

/// An installed foreground WinEvent hook. Unhooked on drop.
pub struct ForegroundTracker {
    hook: HWINEVENTHOOK,
}

impl ForegroundTracker {
    pub fn install() -> Result<Self> {
        let hook = unsafe {
            SetWinEventHook(
                EVENT_SYSTEM_FOREGROUND,
                EVENT_SYSTEM_FOREGROUND,
                None,
                Some(foreground_event_proc),
                0,
                0,
                WINEVENT_OUTOFCONTEXT | WINEVENT_SKIPOWNPROCESS,
            )
        };
        if hook.is_invalid() {
            return Err(Error::ForegroundTracker);
        }
        debug!("installed foreground tracker");
        Ok(Self { hook })
    }
}

impl Drop for ForegroundTracker {
    fn drop(&mut self) {
        unsafe {
            let _ = UnhookWinEvent(self.hook);
        }
        LAST_USER_WINDOW.store(0, Ordering::SeqCst);
        debug!("removed foreground tracker");
    }
}

unsafe extern "system" fn foreground_event_proc(
    _hook: HWINEVENTHOOK,
    _event: u32,
    hwnd: HWND,
    id_object: i32,
    _id_child: i32,
    _id_event_thread: u32,
    _dwms_event_time: u32,
) {
    if id_object != OBJID_WINDOW {
        return;
    }
    let Some(id) = window_id(hwnd) else {
        return;
    };
    if classify(hwnd, GetCurrentProcessId()) == WindowKind::User {
        trace!(window = %id, "foreground changed");
        LAST_USER_WINDOW.store(id.raw(), Ordering::SeqCst);
    }
}
