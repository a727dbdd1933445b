//! Windows-specific entry point and application logic.
//!
//! A hidden tool window owns the tray icon, receives `WM_HOTKEY` and the
//! pointer monitor's wake-ups, and runs the message loop all input sources
//! depend on.

use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, error, info, warn};
use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW, PostQuitMessage,
    RegisterClassW, RegisterWindowMessageW, TranslateMessage, MSG, WM_CONTEXTMENU, WM_DESTROY,
    WM_HOTKEY, WM_LBUTTONDBLCLK, WM_RBUTTONUP, WNDCLASSW, WS_EX_TOOLWINDOW, WS_POPUP,
};

use layerpin::events::{self, AppEvent};
use layerpin::logging;
use layerpin::model::APP_NAME;
use layerpin::platform::windows::app::{install_state, take_state, with_state, AppState};
use layerpin::platform::windows::handlers::dispatch_events;
use layerpin::platform::windows::input::{
    ForegroundTracker, GlobalHotkey, PointerMonitor, HOTKEY_TOGGLE, WM_APP_DRAIN,
};
use layerpin::platform::windows::ui::tray::{self, WM_TRAYICON};
use layerpin::platform::windows::Win32Directory;
use layerpin::storage::Config;
use layerpin::LayerService;

/// Broadcast by Explorer when the taskbar is (re)created.
static TASKBAR_CREATED: AtomicU32 = AtomicU32::new(0);

/// Main entry point for Windows.
pub fn run() {
    let config_path = Config::default_path();
    let (config, problem) = Config::load_or_init(&config_path);
    let log_guard = logging::init(config.debug_logging, config_path.parent());
    if let Some(e) = problem {
        warn!(path = %config_path.display(), "config problem, using defaults: {e}");
    }

    if let Err(e) = run_app(&config) {
        error!("{APP_NAME} could not start: {e}");
        // `exit` skips destructors; flush the log file first.
        drop(log_guard);
        std::process::exit(1);
    }
}

fn run_app(config: &Config) -> layerpin::Result<()> {
    events::init_event_bus();

    unsafe {
        // Hook coordinates and hit-testing must use the same pixel space.
        if let Err(e) = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) {
            debug!("DPI awareness not changed: {e}");
        }
        TASKBAR_CREATED.store(RegisterWindowMessageW(w!("TaskbarCreated")), Ordering::SeqCst);
    }

    let hwnd = create_shell_window()?;
    install_state(AppState::new(LayerService::new(Win32Directory::new())));

    // Every source degrades on failure: the rest of the app keeps working.
    let foreground = ForegroundTracker::install()
        .map_err(|e| warn!("{e}; tray toggle will use the current foreground window"))
        .ok();

    let hotkey = GlobalHotkey::register(hwnd, config.hotkey_spec())
        .map_err(|e| warn!("{e}; hotkey disabled"))
        .ok();
    let hotkey_label = hotkey.as_ref().map(|h| h.spec().to_string());
    with_state(|state| state.hotkey = hotkey_label);

    let monitor = if config.title_bar_menu {
        PointerMonitor::install(hwnd)
            .map_err(|e| warn!("{e}; title-bar menu disabled"))
            .ok()
    } else {
        info!("title-bar menu disabled by config");
        None
    };

    if let Err(e) = tray::install_tray_icon(hwnd, 0) {
        warn!("{e}; waiting for the taskbar");
    }

    info!("{APP_NAME} running");

    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    // Cleanup: the hotkey and tray icon belong to the shell window, so
    // release them before it is destroyed.
    drop(monitor);
    if let Some(hotkey) = hotkey {
        if let Err(e) = hotkey.release() {
            warn!("failed to unregister hotkey: {e}");
        }
    }
    drop(foreground);

    if let Some(mut state) = take_state() {
        let released = state.service.unlock_all();
        info!(released, "released pinned windows on exit");
    }
    tray::remove_tray_icon();

    unsafe {
        if let Err(e) = DestroyWindow(hwnd) {
            warn!("failed to destroy shell window: {e}");
        }
    }

    Ok(())
}

fn create_shell_window() -> layerpin::Result<HWND> {
    unsafe {
        let instance = GetModuleHandleW(None)?;
        let class_name = w!("LayerPinShell");

        let wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        // Never shown: it only owns the tray icon and receives messages.
        let hwnd = CreateWindowExW(
            WS_EX_TOOLWINDOW,
            class_name,
            w!("LayerPin"),
            WS_POPUP,
            0,
            0,
            0,
            0,
            None,
            None,
            Some(instance.into()),
            None,
        )?;
        Ok(hwnd)
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_HOTKEY => {
                if wparam.0 as i32 == HOTKEY_TOGGLE {
                    events::publish(AppEvent::HotkeyPressed);
                    dispatch_events(hwnd);
                }
                LRESULT(0)
            }

            WM_APP_DRAIN => {
                dispatch_events(hwnd);
                LRESULT(0)
            }

            // System tray icon messages
            WM_TRAYICON => {
                match lparam.0 as u32 {
                    WM_RBUTTONUP | WM_CONTEXTMENU => {
                        // Built under the borrow, shown after it is released.
                        if let Some(menu) = with_state(|state| state.tray_menu()) {
                            if let Some(event) = tray::show_tray_menu(hwnd, &menu) {
                                events::publish(event);
                            }
                        }
                        dispatch_events(hwnd);
                    }
                    WM_LBUTTONDBLCLK => {
                        events::publish(AppEvent::ToggleCurrent);
                        dispatch_events(hwnd);
                    }
                    _ => {}
                }
                LRESULT(0)
            }

            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }

            msg if msg != 0 && msg == TASKBAR_CREATED.load(Ordering::SeqCst) => {
                let pinned = with_state(|state| state.service.pinned_count()).unwrap_or(0);
                if let Err(e) = tray::install_tray_icon(hwnd, pinned) {
                    warn!("{e} after taskbar restart");
                }
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
