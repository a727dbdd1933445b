//! Thread-safe event bus using mpsc channels.
//!
//! - Any thread (or OS callback) publishes via `EventPublisher::publish()`
//! - The UI thread collects pending events via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Multi-producer, single-consumer queue of [`AppEvent`]s.
///
/// # Example
///
/// ```
/// use layerpin::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::HotkeyPressed);
///
/// let events = bus.drain();
/// assert_eq!(events, vec![AppEvent::HotkeyPressed]);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Next event, without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus owns a sender, so Disconnected cannot happen while it lives.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// All pending events, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue an event. Never blocks, so it is safe on a hook path.
    ///
    /// Send errors mean the receiver is gone, i.e. the app is shutting down.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScreenPoint;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_events_arrive_in_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::HotkeyPressed);
        publisher.publish(AppEvent::RightButtonReleased(ScreenPoint::new(10, 20)));
        publisher.publish(AppEvent::UnlockAll);

        assert_eq!(
            bus.drain(),
            vec![
                AppEvent::HotkeyPressed,
                AppEvent::RightButtonReleased(ScreenPoint::new(10, 20)),
                AppEvent::UnlockAll,
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::ToggleCurrent);
        publisher.publish(AppEvent::UnlockAll);

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publishers_on_other_threads() {
        let bus = EventBus::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let publisher = bus.publisher();
                std::thread::spawn(move || publisher.publish(AppEvent::HotkeyPressed))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(bus.drain().len(), 4);
    }

    #[test]
    fn test_try_recv_returns_none_when_empty() {
        let bus = EventBus::default();
        assert!(bus.try_recv().is_none());
    }
}
