//! Handle and string conversions for Win32 calls.

use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, POINT};

use crate::model::{ScreenPoint, WindowId};

/// Native handle for a window identifier.
pub fn hwnd(id: WindowId) -> HWND {
    HWND(id.raw() as *mut c_void)
}

/// Window identifier for a native handle; `None` for the null handle.
pub fn window_id(hwnd: HWND) -> Option<WindowId> {
    WindowId::from_raw(hwnd.0 as isize)
}

pub fn point(p: ScreenPoint) -> POINT {
    POINT { x: p.x, y: p.y }
}

/// NUL-terminated UTF-16 copy of `text`.
pub fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Copy `text` into a fixed-size UTF-16 buffer, truncating and always
/// leaving a terminating NUL.
pub fn copy_to_fixed(text: &str, buf: &mut [u16]) {
    let Some(max) = buf.len().checked_sub(1) else {
        return;
    };
    let mut len = 0;
    for (slot, unit) in buf.iter_mut().zip(text.encode_utf16().take(max)) {
        *slot = unit;
        len += 1;
    }
    buf[len] = 0;
}

/// Decode a UTF-16 buffer up to its first NUL.
pub fn from_wide(buf: &[u16]) -> String {
    let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_buffer_is_truncated_and_terminated() {
        let mut buf = [0xFFFFu16; 4];
        copy_to_fixed("LayerPin", &mut buf);
        assert_eq!(from_wide(&buf), "Lay");
        assert_eq!(buf[3], 0);
    }

    #[test]
    fn handles_roundtrip() {
        let id = WindowId::from_raw(0x5000).unwrap();
        assert_eq!(window_id(hwnd(id)), Some(id));
        assert_eq!(window_id(HWND::default()), None);
    }
}
