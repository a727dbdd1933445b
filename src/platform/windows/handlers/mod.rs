//! Bridges drained events to the service and the shell.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
