//! The global toggle hotkey.

use tracing::{info, warn};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS,
};

use crate::error::{Error, Result};
use crate::hotkey::HotkeySpec;

/// ID of the only hotkey we register; arrives as `WPARAM` of `WM_HOTKEY`.
pub const HOTKEY_TOGGLE: i32 = 1;

/// A registered system-wide hotkey. Unregistered on drop if not released.
pub struct GlobalHotkey {
    hwnd: HWND,
    spec: HotkeySpec,
    registered: bool,
}

impl GlobalHotkey {
    /// Register `spec` so `WM_HOTKEY` reaches `hwnd` regardless of focus.
    ///
    /// Fails when another application already owns the combination.
    pub fn register(hwnd: HWND, spec: HotkeySpec) -> Result<Self> {
        unsafe {
            RegisterHotKey(
                Some(hwnd),
                HOTKEY_TOGGLE,
                HOT_KEY_MODIFIERS(spec.registration_modifiers()),
                spec.virtual_key(),
            )
        }
        .map_err(|e| Error::HotkeyUnavailable {
            combo: spec.to_string(),
            reason: e.to_string(),
        })?;

        info!(hotkey = %spec, "registered global hotkey");
        Ok(Self {
            hwnd,
            spec,
            registered: true,
        })
    }

    pub fn spec(&self) -> HotkeySpec {
        self.spec
    }

    /// Unregister now and report the outcome.
    ///
    /// Must run while the owning window still exists: destroying it frees
    /// the registration and a later unregister fails.
    pub fn release(mut self) -> Result<()> {
        self.registered = false;
        unsafe { UnregisterHotKey(Some(self.hwnd), HOTKEY_TOGGLE) }?;
        info!(hotkey = %self.spec, "unregistered global hotkey");
        Ok(())
    }
}

impl Drop for GlobalHotkey {
    fn drop(&mut self) {
        if !self.registered {
            return;
        }
        match unsafe { UnregisterHotKey(Some(self.hwnd), HOTKEY_TOGGLE) } {
            Ok(()) => info!(hotkey = %self.spec, "unregistered global hotkey"),
            Err(e) => warn!(hotkey = %self.spec, "failed to unregister hotkey: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::core::w;
    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DestroyWindow, HWND_MESSAGE, WINDOW_EX_STYLE, WINDOW_STYLE,
    };

    // Unlikely to be claimed by anything else on a test machine.
    const TEST_COMBO: &str = "Ctrl+Alt+Shift+F23";

    fn message_window() -> HWND {
        unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                w!("STATIC"),
                w!(""),
                WINDOW_STYLE(0),
                0,
                0,
                0,
                0,
                Some(HWND_MESSAGE),
                None,
                None,
                None,
            )
            .unwrap()
        }
    }

    #[test]
    fn release_before_window_is_destroyed_succeeds() {
        let hwnd = message_window();
        let spec = HotkeySpec::parse(TEST_COMBO).unwrap();

        let hotkey = GlobalHotkey::register(hwnd, spec).unwrap();
        assert!(hotkey.release().is_ok());

        // The combination is free again.
        let again = GlobalHotkey::register(hwnd, spec).unwrap();
        assert!(again.release().is_ok());

        unsafe { DestroyWindow(hwnd).unwrap() };
    }

    #[test]
    fn release_after_window_is_destroyed_fails() {
        let hwnd = message_window();
        let spec = HotkeySpec::parse("Ctrl+Alt+Shift+F22").unwrap();
        let hotkey = GlobalHotkey::register(hwnd, spec).unwrap();

        unsafe { DestroyWindow(hwnd).unwrap() };

        assert!(hotkey.release().is_err());
    }
}
