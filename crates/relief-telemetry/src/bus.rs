//! Event bus with pluggable sinks.
//!
//! Producers hold a cheap [`EventEmitter`] or call [`EventBus::emit`]
//! directly; events queue on an `mpsc` channel until [`EventBus::flush`]
//! hands them to every registered sink in emission order.

use std::sync::mpsc;

use crate::events::ReliefEvent;
use crate::sinks::EventSink;

/// Broadcast event bus.
pub struct EventBus {
    sender: mpsc::Sender<ReliefEvent>,
    receiver: mpsc::Receiver<ReliefEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    enabled: bool,
    dispatched: u64,
}

/// Sending half of a bus, usable from another thread.
///
/// Emitters do not observe [`EventBus::set_enabled`]; filtering happens
/// at the bus that owns them.
#[derive(Clone)]
pub struct EventEmitter {
    sender: mpsc::Sender<ReliefEvent>,
}

impl EventEmitter {
    pub fn emit(&self, event: ReliefEvent) {
        // Receiver lives as long as the bus; a dropped bus just discards.
        let _ = self.sender.send(event);
    }
}

impl EventBus {
    /// Creates an enabled bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
            dispatched: 0,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        tracing::debug!(sink = sink.name(), "telemetry sink registered");
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. A disabled bus drops emitted events
    /// and discards queued ones on flush.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues an event. No-op while disabled.
    pub fn emit(&self, event: ReliefEvent) {
        if !self.enabled {
            return;
        }
        let _ = self.sender.send(event);
    }

    /// A sender handle for producers that cannot borrow the bus.
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            sender: self.sender.clone(),
        }
    }

    /// Hands every queued event to all sinks. Returns how many events were dispatched.
    pub fn flush(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.receiver.try_recv() {
            if !self.enabled {
                continue;
            }
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            count += 1;
        }
        self.dispatched += count as u64;
        count
    }

    /// Flushes, then lets every sink finalize.
    pub fn finish(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
        tracing::debug!(events = self.dispatched, "telemetry finished");
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Total events dispatched since creation.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
