//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::ReliefEvent;

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &ReliefEvent);

    /// Called once when the producer is done.
    fn finalize(&mut self) {}

    /// Human-readable sink name.
    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// Clones share the same buffer, so a test can keep one clone and hand
/// the other to the bus.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<ReliefEvent>>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far.
    pub fn events(&self) -> Vec<ReliefEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.events.lock() {
            Ok(events) => events.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &ReliefEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Logs events through `tracing` at a fixed level.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &ReliefEvent) {
        let kind = event.kind_name();
        match self.level {
            tracing::Level::ERROR => {
                tracing::error!(frame = event.frame, kind, event = ?event.kind, "relief_event")
            }
            tracing::Level::WARN => {
                tracing::warn!(frame = event.frame, kind, event = ?event.kind, "relief_event")
            }
            tracing::Level::INFO => {
                tracing::info!(frame = event.frame, kind, event = ?event.kind, "relief_event")
            }
            tracing::Level::DEBUG => {
                tracing::debug!(frame = event.frame, kind, event = ?event.kind, "relief_event")
            }
            _ => {
                tracing::trace!(frame = event.frame, kind, event = ?event.kind, "relief_event")
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
