//! Message-passing boundary between input sources and the router.
//!
//! Input sources never touch pin state. They publish an [`AppEvent`] and
//! return; the UI thread drains the bus and hands each event to the router.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Hotkey    │     │ Pointer hook│     │    Menus    │
//! │ (WM_HOTKEY) │     │ (WH_MOUSE_LL│     │ (WM_COMMAND)│
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │             GestureRouter → ShellRequest            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: `AppEvent` and `ShellRequest`
//! - [`bus`]: `EventBus` and `EventPublisher`
//! - [`global`]: static access for callbacks that cannot carry context

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish};
pub use types::{AppEvent, ShellRequest};
