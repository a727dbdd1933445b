//! Conversions between the pure model types and Win32 types.

pub mod types;

pub use types::*;
