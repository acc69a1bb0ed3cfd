//! # relief-telemetry
//!
//! Event bus for terrain and particle telemetry. Producers emit
//! structured events (frame timing, wall collisions, settling, terrain
//! builds) that are consumed by pluggable sinks (in-memory capture,
//! `tracing` logs).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, ReliefEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
