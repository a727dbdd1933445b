//! Global access to the application event bus.
//!
//! OS callbacks such as the low-level mouse hook receive no user context,
//! so they publish through this static bus instead of holding a publisher.
//!
//! - `EventPublisher` is stored in `OnceLock`: it is `Send + Sync`
//! - `EventBus` is stored in a `Mutex`: only the UI thread drains it

use std::sync::{Mutex, OnceLock};

use tracing::trace;

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

static PUBLISHER: OnceLock<EventPublisher> = OnceLock::new();
static BUS: OnceLock<Mutex<EventBus>> = OnceLock::new();

/// Initialize the global event bus. Later calls are no-ops.
pub fn init_event_bus() {
    BUS.get_or_init(|| {
        let bus = EventBus::new();
        let _ = PUBLISHER.set(bus.publisher());
        Mutex::new(bus)
    });
}

/// Publish an event to the global bus.
///
/// Events published before `init_event_bus()` are dropped.
pub fn publish(event: AppEvent) {
    match PUBLISHER.get() {
        Some(publisher) => publisher.publish(event),
        None => trace!(?event, "event bus not initialised, dropping event"),
    }
}

/// Drain all pending events from the global bus, oldest first.
pub fn drain_events() -> Vec<AppEvent> {
    match BUS.get() {
        Some(bus) => bus
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .drain(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The bus is process-wide, so this is the only test that touches it.
    #[test]
    fn test_global_roundtrip() {
        init_event_bus();
        init_event_bus();
        let _ = drain_events();

        publish(AppEvent::HotkeyPressed);
        publish(AppEvent::RequestQuit);

        assert_eq!(
            drain_events(),
            vec![AppEvent::HotkeyPressed, AppEvent::RequestQuit]
        );
        assert!(drain_events().is_empty());
    }
}
