//! Windows runtime state management.
//!
//! The window procedure receives no user context, so the single
//! [`AppState`] lives in a thread-local slot on the UI thread. It is put
//! there at startup and taken out (and dropped) at shutdown.

use std::cell::RefCell;

use crate::menu::TrayMenu;
use crate::platform::windows::directory::Win32Directory;
use crate::service::LayerService;

pub struct AppState {
    pub service: LayerService<Win32Directory>,
    /// Rendered hotkey, `None` if registration failed.
    pub hotkey: Option<String>,
}

impl AppState {
    pub fn new(service: LayerService<Win32Directory>) -> Self {
        Self {
            service,
            hotkey: None,
        }
    }

    /// Tray menu for the current registry contents.
    pub fn tray_menu(&mut self) -> TrayMenu {
        TrayMenu {
            pinned: self.service.pinned_windows(),
            hotkey: self.hotkey.clone(),
        }
    }
}

thread_local! {
    static STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
}

pub fn install_state(state: AppState) {
    STATE.with(|s| *s.borrow_mut() = Some(state));
}

pub fn take_state() -> Option<AppState> {
    STATE.with(|s| s.borrow_mut().take())
}

/// Run `f` against the state.
///
/// Returns `None` if the state is not installed or is already borrowed
/// further up the stack (a re-entrant window message); callers must not
/// hold the borrow across modal UI.
pub fn with_state<R>(f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
    STATE.with(|s| {
        let mut guard = s.try_borrow_mut().ok()?;
        guard.as_mut().map(f)
    })
}
