//! Runtime state of the Windows shell.

pub mod state;

pub use state::{install_state, take_state, with_state, AppState};
