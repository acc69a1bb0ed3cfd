//! Host timestamps to simulated time.

/// Turns a stream of host timestamps (milliseconds) into per-frame `dt`.
///
/// The first timestamp only primes the clock and yields `dt = 0`. A timestamp
/// earlier than the previous one also yields `dt = 0` and becomes the new
/// reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    time_scale: f32,
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Creates a clock converting milliseconds with `time_scale`
    /// (simulated seconds per host millisecond).
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale,
            last_ms: None,
        }
    }

    /// Simulated seconds since the previous timestamp.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if timestamp_ms > last => ((timestamp_ms - last) * self.time_scale as f64) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt
    }

    /// Forgets the previous timestamp; the next tick yields `dt = 0`.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// The previous timestamp, if any.
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_ms
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }
}
