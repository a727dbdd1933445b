//! Global hotkey combinations.
//!
//! Parsing is platform-independent; the modifier bits and virtual-key codes
//! are the Win32 values so the platform layer can pass them straight to
//! `RegisterHotKey`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

// Modifier bits (MOD_* values).
pub const MOD_ALT: u32 = 0x0001;
pub const MOD_CONTROL: u32 = 0x0002;
pub const MOD_SHIFT: u32 = 0x0004;
pub const MOD_WIN: u32 = 0x0008;
/// Suppress auto-repeat while the combination is held.
pub const MOD_NOREPEAT: u32 = 0x4000;

/// A modifier set plus one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeySpec {
    modifiers: u32,
    vk: u32,
}

impl HotkeySpec {
    /// Parse strings like `"Ctrl+Alt+T"` (case-insensitive, `+`-separated).
    ///
    /// At least one modifier and exactly one key are required: a bare key
    /// would swallow normal typing system-wide.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidHotkey(text.to_string());
        let mut modifiers = 0;
        let mut vk = None;

        for part in text.split('+').map(str::trim) {
            if part.is_empty() {
                return Err(invalid());
            }
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= MOD_CONTROL,
                "alt" => modifiers |= MOD_ALT,
                "shift" => modifiers |= MOD_SHIFT,
                "win" | "super" => modifiers |= MOD_WIN,
                _ => {
                    if vk.is_some() {
                        return Err(invalid());
                    }
                    vk = Some(virtual_key_from_name(part).ok_or_else(invalid)?);
                }
            }
        }

        match vk {
            Some(vk) if modifiers != 0 => Ok(Self { modifiers, vk }),
            _ => Err(invalid()),
        }
    }

    /// Modifier bits without `MOD_NOREPEAT`.
    pub fn modifiers(&self) -> u32 {
        self.modifiers
    }

    /// Modifier bits as passed to the OS.
    pub fn registration_modifiers(&self) -> u32 {
        self.modifiers | MOD_NOREPEAT
    }

    pub fn virtual_key(&self) -> u32 {
        self.vk
    }
}

impl Default for HotkeySpec {
    /// `Ctrl+Alt+T`, matching `DEFAULT_HOTKEY`.
    fn default() -> Self {
        Self {
            modifiers: MOD_CONTROL | MOD_ALT,
            vk: 0x54,
        }
    }
}

impl FromStr for HotkeySpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HotkeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bit, name) in [
            (MOD_CONTROL, "Ctrl"),
            (MOD_ALT, "Alt"),
            (MOD_SHIFT, "Shift"),
            (MOD_WIN, "Win"),
        ] {
            if self.modifiers & bit != 0 {
                write!(f, "{name}+")?;
            }
        }
        match name_from_virtual_key(self.vk) {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "0x{:02X}", self.vk),
        }
    }
}

const NAMED_KEYS: &[(&str, u32)] = &[
    ("Space", 0x20),
    ("Enter", 0x0D),
    ("Tab", 0x09),
    ("Esc", 0x1B),
    ("Insert", 0x2D),
    ("Delete", 0x2E),
    ("Home", 0x24),
    ("End", 0x23),
    ("PageUp", 0x21),
    ("PageDown", 0x22),
    ("Left", 0x25),
    ("Up", 0x26),
    ("Right", 0x27),
    ("Down", 0x28),
];

fn virtual_key_from_name(name: &str) -> Option<u32> {
    let upper = name.to_ascii_uppercase();
    let bytes = upper.as_bytes();

    // Letters and digits map to their ASCII code.
    if bytes.len() == 1 && (bytes[0].is_ascii_uppercase() || bytes[0].is_ascii_digit()) {
        return Some(u32::from(bytes[0]));
    }

    if let Some(n) = upper.strip_prefix('F').and_then(|n| n.parse::<u32>().ok()) {
        return (1..=24).contains(&n).then_some(0x70 + n - 1);
    }

    match upper.as_str() {
        "ESCAPE" => return Some(0x1B),
        "RETURN" => return Some(0x0D),
        "DEL" => return Some(0x2E),
        _ => {}
    }

    NAMED_KEYS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|&(_, vk)| vk)
}

fn name_from_virtual_key(vk: u32) -> Option<String> {
    match vk {
        0x30..=0x39 | 0x41..=0x5A => char::from_u32(vk).map(String::from),
        0x70..=0x87 => Some(format!("F{}", vk - 0x70 + 1)),
        _ => NAMED_KEYS
            .iter()
            .find(|&&(_, code)| code == vk)
            .map(|&(key, _)| key.to_string()),
    }
}
