//! Event dispatcher for Windows.

use std::cell::Cell;

use tracing::debug;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::PostQuitMessage;

use crate::events::{self, ShellRequest};
use crate::platform::windows::app::with_state;
use crate::platform::windows::ui::{popup, tray};

thread_local! {
    static DISPATCHING: Cell<bool> = const { Cell::new(false) };
}

/// Route every pending event, including those published by menus opened
/// while routing, until the bus is empty.
///
/// Must be called from the UI thread. Calls made from inside a menu's modal
/// loop return immediately; the outer call picks their events up.
pub fn dispatch_events(hwnd: HWND) {
    if DISPATCHING.with(|d| d.replace(true)) {
        return;
    }

    loop {
        let pending = events::drain_events();
        if pending.is_empty() {
            break;
        }

        for event in pending {
            // The state borrow ends here, before any menu runs its modal loop.
            let Some(requests) = with_state(|state| state.service.handle(&event)) else {
                debug!(?event, "state busy or gone, dropping event");
                continue;
            };
            for request in requests {
                perform(hwnd, request);
            }
        }
    }

    DISPATCHING.with(|d| d.set(false));
}

fn perform(hwnd: HWND, request: ShellRequest) {
    match request {
        ShellRequest::ShowContextMenu { at, target, label } => {
            debug!(window = %target, "showing title-bar menu");
            events::publish(popup::show_context_menu(hwnd, at, label));
        }
        ShellRequest::RefreshTray { pinned } => tray::update_tray_tooltip(pinned),
        // Teardown runs after the loop, while the shell window still exists.
        ShellRequest::Quit => unsafe { PostQuitMessage(0) },
    }
}
