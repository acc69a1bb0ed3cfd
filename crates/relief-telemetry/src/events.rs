//! Telemetry event types.
//!
//! Lightweight value types emitted while building terrain or stepping
//! particles. Each event carries the frame it belongs to (0 for
//! one-off terrain events).

use serde::{Deserialize, Serialize};

/// A telemetry event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliefEvent {
    /// Simulation frame (0-indexed).
    pub frame: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A terrain finished building.
    TerrainBuilt {
        vertices: usize,
        faces: usize,
        min_height: f32,
        max_height: f32,
    },

    /// A fault pass that ran: its displacement and how many vertices it moved.
    FaultPass {
        iteration: u32,
        delta: f32,
        moved: usize,
    },

    /// A particle frame started.
    FrameBegin {
        /// Simulated time at the start of the frame (seconds).
        sim_time: f64,
    },

    /// A particle frame finished.
    FrameEnd {
        /// Wall-clock time spent on the frame (seconds).
        wall_time: f64,
    },

    /// A particle was reflected off a container wall.
    WallCollision {
        particle: u32,
        /// Wall label, e.g. `"+x"`.
        wall: String,
        penetration: f32,
    },

    /// A particle came to rest.
    ParticleSettled { particle: u32 },

    /// Total kinetic energy after a frame.
    Energy { kinetic: f64 },

    /// Custom event for extensibility.
    Custom {
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl ReliefEvent {
    pub fn new(frame: u64, kind: EventKind) -> Self {
        Self { frame, kind }
    }

    /// Short name of the event kind, for logs and counters.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            EventKind::TerrainBuilt { .. } => "terrain_built",
            EventKind::FaultPass { .. } => "fault_pass",
            EventKind::FrameBegin { .. } => "frame_begin",
            EventKind::FrameEnd { .. } => "frame_end",
            EventKind::WallCollision { .. } => "wall_collision",
            EventKind::ParticleSettled { .. } => "particle_settled",
            EventKind::Energy { .. } => "energy",
            EventKind::Custom { .. } => "custom",
        }
    }
}
