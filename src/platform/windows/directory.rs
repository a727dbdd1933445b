//! Win32 implementation of [`WindowDirectory`].

use tracing::debug;
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentProcessId;
use windows::Win32::UI::WindowsAndMessaging::{
    GetAncestor, GetClassNameW, GetForegroundWindow, GetWindowLongW, GetWindowTextLengthW,
    GetWindowTextW, GetWindowThreadProcessId, IsWindow, SendMessageTimeoutW, SetWindowPos,
    WindowFromPoint, GA_ROOT, GWL_EXSTYLE, HWND_NOTOPMOST, HWND_TOPMOST, SMTO_ABORTIFHUNG,
    SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, WM_NCHITTEST, WS_EX_TOPMOST,
};

use super::ffi::{from_wide, hwnd, point, window_id};
use super::input::foreground;
use crate::directory::WindowDirectory;
use crate::model::{HitTest, ScreenPoint, WindowId};

/// How long a hit-test may wait on the target's UI thread.
const HIT_TEST_TIMEOUT_MS: u32 = 200;

/// Taskbar and notification-area windows. When one of these is in front,
/// the user is operating the tray, not the window they want to pin.
const SHELL_CLASSES: &[&str] = &[
    "Shell_TrayWnd",
    "Shell_SecondaryTrayWnd",
    "NotifyIconOverflowWindow",
    "TopLevelWindowForOverflowXamlIsland",
];

/// The desktop itself is never a pin target.
const DESKTOP_CLASSES: &[&str] = &["Progman", "WorkerW"];

/// Where a foreground window came from, for target selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowKind {
    /// An ordinary application window.
    User,
    /// Taskbar, tray overflow or one of our own windows.
    Shell,
    /// The desktop.
    Desktop,
}

/// Classify a top-level window. `own_process` is this application's PID.
pub(crate) fn classify(hwnd: HWND, own_process: u32) -> WindowKind {
    if owner_process(hwnd) == own_process {
        return WindowKind::Shell;
    }

    let class = class_name(hwnd);
    if SHELL_CLASSES.contains(&class.as_str()) {
        WindowKind::Shell
    } else if DESKTOP_CLASSES.contains(&class.as_str()) {
        WindowKind::Desktop
    } else {
        WindowKind::User
    }
}

fn owner_process(hwnd: HWND) -> u32 {
    let mut pid = 0u32;
    unsafe {
        GetWindowThreadProcessId(hwnd, Some(&mut pid as *mut u32));
    }
    pid
}

fn class_name(hwnd: HWND) -> String {
    let mut buf = [0u16; 256];
    let len = unsafe { GetClassNameW(hwnd, &mut buf) };
    from_wide(&buf[..len.max(0) as usize])
}

/// Window queries backed by user32.
pub struct Win32Directory {
    own_process: u32,
}

impl Win32Directory {
    pub fn new() -> Self {
        Self {
            own_process: unsafe { GetCurrentProcessId() },
        }
    }
}

impl Default for Win32Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowDirectory for Win32Directory {
    fn resolve_root(&self, handle: WindowId) -> Option<WindowId> {
        if !self.is_alive(handle) {
            return None;
        }
        let root = window_id(unsafe { GetAncestor(hwnd(handle), GA_ROOT) })?;
        self.is_alive(root).then_some(root)
    }

    fn is_alive(&self, handle: WindowId) -> bool {
        unsafe { IsWindow(Some(hwnd(handle))).as_bool() }
    }

    fn is_pinned(&self, handle: WindowId) -> bool {
        if !self.is_alive(handle) {
            return false;
        }
        let ex_style = unsafe { GetWindowLongW(hwnd(handle), GWL_EXSTYLE) } as u32;
        ex_style & WS_EX_TOPMOST.0 != 0
    }

    fn set_pinned(&self, handle: WindowId, pinned: bool) -> bool {
        if !self.is_alive(handle) {
            return false;
        }
        let insert_after = if pinned { HWND_TOPMOST } else { HWND_NOTOPMOST };
        let result = unsafe {
            SetWindowPos(
                hwnd(handle),
                Some(insert_after),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )
        };
        if let Err(e) = result {
            debug!(window = %handle, pinned, "SetWindowPos failed: {e}");
            return false;
        }
        // Elevated windows can silently ignore us; trust only the live style.
        self.is_pinned(handle) == pinned
    }

    fn hit_test(&self, handle: WindowId, at: ScreenPoint) -> HitTest {
        if !self.is_alive(handle) {
            return HitTest::Nowhere;
        }
        // MAKELPARAM(x, y): each coordinate is a signed 16-bit word.
        let packed = ((at.y as u16 as u32) << 16) | (at.x as u16 as u32);
        let mut result = 0usize;
        let sent = unsafe {
            SendMessageTimeoutW(
                hwnd(handle),
                WM_NCHITTEST,
                WPARAM(0),
                LPARAM(packed as isize),
                SMTO_ABORTIFHUNG,
                HIT_TEST_TIMEOUT_MS,
                Some(&mut result as *mut usize),
            )
        };
        if sent.0 == 0 {
            debug!(window = %handle, "hit-test timed out or failed");
            return HitTest::Nowhere;
        }
        HitTest::from_code(result as isize as i32)
    }

    fn window_at(&self, at: ScreenPoint) -> Option<WindowId> {
        let h = unsafe { WindowFromPoint(point(at)) };
        let id = window_id(h)?;
        // Our own menus and tray window are never targets.
        (owner_process(h) != self.own_process).then_some(id)
    }

    fn foreground(&self) -> Option<WindowId> {
        let h = unsafe { GetForegroundWindow() };
        if let Some(id) = window_id(h) {
            match classify(h, self.own_process) {
                WindowKind::User => return Some(id),
                WindowKind::Desktop => return None,
                WindowKind::Shell => {}
            }
        }
        // The tray (or our own menu) took focus: use the window the user
        // was in before that.
        foreground::last_user_window().filter(|&id| self.is_alive(id))
    }

    fn title(&self, handle: WindowId) -> Option<String> {
        if !self.is_alive(handle) {
            return None;
        }
        let h = hwnd(handle);
        let len = unsafe { GetWindowTextLengthW(h) };
        if len <= 0 {
            return None;
        }
        let mut buf = vec![0u16; len as usize + 1];
        let copied = unsafe { GetWindowTextW(h, &mut buf) };
        Some(from_wide(&buf[..copied.max(0) as usize]))
    }
}
