//! # relief-debug
//!
//! Inspection hooks and particle snapshots for debugging simulation runs.
//! Snapshots serialize the particle set to a compact binary blob for
//! later inspection; hooks observe every frame without touching the
//! simulator itself.

pub mod hooks;
pub mod snapshot;

pub use hooks::{InspectionHook, TelemetryHook};
pub use snapshot::ParticleSnapshot;
