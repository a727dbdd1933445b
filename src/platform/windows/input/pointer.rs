//! System-wide pointer monitor (low-level mouse hook).
//!
//! The hook procedure runs on the shared input path of every process, so it
//! does the minimum: on a right-button release it publishes the point and
//! posts a wake-up to the shell window. Hit-testing and menus happen later,
//! when the window procedure drains the bus.

use std::sync::atomic::{AtomicIsize, Ordering};

use tracing::{info, warn};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, PostMessageW, SetWindowsHookExW, UnhookWindowsHookEx, HC_ACTION, HHOOK,
    MSLLHOOKSTRUCT, WH_MOUSE_LL, WM_APP, WM_RBUTTONUP,
};

use crate::error::{Error, Result};
use crate::events::{self, AppEvent};
use crate::model::ScreenPoint;

/// Posted to the shell window after the hook queued an event.
pub const WM_APP_DRAIN: u32 = WM_APP + 1;

/// Hook handle, read by the hook procedure to chain the call.
static MOUSE_HOOK: AtomicIsize = AtomicIsize::new(0);

/// Window woken after each published event.
static WAKE_HWND: AtomicIsize = AtomicIsize::new(0);

/// An installed `WH_MOUSE_LL` hook. Uninstalled on drop.
pub struct PointerMonitor {
    hook: HHOOK,
}

impl PointerMonitor {
    /// Install the hook on the calling thread, which must pump messages.
    pub fn install(wake: HWND) -> Result<Self> {
        WAKE_HWND.store(wake.0 as isize, Ordering::SeqCst);

        let hook = unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0) }
            .map_err(|e| {
                WAKE_HWND.store(0, Ordering::SeqCst);
                Error::PointerMonitor(e.to_string())
            })?;
        MOUSE_HOOK.store(hook.0 as isize, Ordering::SeqCst);

        info!("installed pointer monitor");
        Ok(Self { hook })
    }
}

impl Drop for PointerMonitor {
    fn drop(&mut self) {
        MOUSE_HOOK.store(0, Ordering::SeqCst);
        WAKE_HWND.store(0, Ordering::SeqCst);
        match unsafe { UnhookWindowsHookEx(self.hook) } {
            Ok(()) => info!("removed pointer monitor"),
            Err(e) => warn!("failed to remove pointer monitor: {e}"),
        }
    }
}

/// Low-level mouse hook procedure.
extern "system" fn mouse_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        if ncode == HC_ACTION as i32 && wparam.0 as u32 == WM_RBUTTONUP {
            let info = &*(lparam.0 as *const MSLLHOOKSTRUCT);
            events::publish(AppEvent::RightButtonReleased(ScreenPoint::new(
                info.pt.x, info.pt.y,
            )));

            let wake = WAKE_HWND.load(Ordering::SeqCst);
            if wake != 0 {
                let _ = PostMessageW(
                    Some(HWND(wake as *mut _)),
                    WM_APP_DRAIN,
                    WPARAM(0),
                    LPARAM(0),
                );
            }
        }

        let hook = MOUSE_HOOK.load(Ordering::SeqCst);
        CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam)
    }
}
