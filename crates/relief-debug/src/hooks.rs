//! Frame inspection hooks.
//!
//! Hooks are called by whatever drives the simulator, around each frame:
//!
//! ```text
//! for each frame:
//!   hook.on_frame_begin(...)
//!   let report = sim.tick(...)
//!   hook.on_frame_report(&report)
//!   hook.on_frame_end(...)
//! hook.on_simulation_end()
//! ```

use relief_particles::FrameReport;
use relief_telemetry::{EventKind, ReliefEvent};

/// Observer of simulator frames. All methods default to no-ops.
pub trait InspectionHook: Send {
    fn on_frame_begin(&mut self, frame: u64, sim_time: f64) {
        let _ = (frame, sim_time);
    }

    /// Collisions and settle events of a finished frame.
    fn on_frame_report(&mut self, report: &FrameReport) {
        let _ = report;
    }

    fn on_frame_end(&mut self, frame: u64, wall_time: f64, kinetic_energy: f64) {
        let _ = (frame, wall_time, kinetic_energy);
    }

    fn on_simulation_end(&mut self) {}

    fn name(&self) -> &str;
}

/// Hook that turns frame callbacks into telemetry events.
#[derive(Default)]
pub struct TelemetryHook {
    events: Vec<ReliefEvent>,
}

impl TelemetryHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the collected events, leaving the hook empty.
    pub fn drain_events(&mut self) -> Vec<ReliefEvent> {
        std::mem::take(&mut self.events)
    }
}

impl InspectionHook for TelemetryHook {
    fn on_frame_begin(&mut self, frame: u64, sim_time: f64) {
        self.events
            .push(ReliefEvent::new(frame, EventKind::FrameBegin { sim_time }));
    }

    fn on_frame_report(&mut self, report: &FrameReport) {
        for (id, hit) in &report.collisions {
            self.events.push(ReliefEvent::new(
                report.frame,
                EventKind::WallCollision {
                    particle: id.0,
                    wall: hit.wall.label().to_string(),
                    penetration: hit.penetration,
                },
            ));
        }
        for id in &report.settled {
            self.events.push(ReliefEvent::new(
                report.frame,
                EventKind::ParticleSettled { particle: id.0 },
            ));
        }
    }

    fn on_frame_end(&mut self, frame: u64, wall_time: f64, kinetic_energy: f64) {
        self.events.push(ReliefEvent::new(
            frame,
            EventKind::Energy {
                kinetic: kinetic_energy,
            },
        ));
        self.events
            .push(ReliefEvent::new(frame, EventKind::FrameEnd { wall_time }));
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}
