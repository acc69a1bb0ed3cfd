//! Fault-line displacement.
//!
//! Each pass picks a point and a horizontal direction. Vertices in front of
//! the line through that point are raised by `delta`, vertices behind it are
//! lowered, and vertices exactly on it stay put. The displacement shrinks
//! every pass, so early faults lay out large features and later ones add
//! detail.

use relief_math::{RandomSource, Vec2};
use relief_mesh::{Footprint, TriangleMesh};

/// A single fault: a point on the line and the direction heights rise towards.
///
/// Both live in the XZ plane (`Vec2.x` is X, `Vec2.y` is Z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultLine {
    pub point: Vec2,
    pub direction: Vec2,
}

impl FaultLine {
    /// Draws a fault with a uniform point inside `footprint` and a uniform direction.
    ///
    /// Consumes three samples: point X, point Z, then the direction angle.
    pub fn random(footprint: &Footprint, rng: &mut dyn RandomSource) -> Self {
        let x = rng.range(footprint.min_x, footprint.max_x);
        let z = rng.range(footprint.min_z, footprint.max_z);
        let direction = rng.unit_direction_2d();
        Self {
            point: Vec2::new(x, z),
            direction,
        }
    }

    /// Signed side of `(x, z)`: positive in front of the line, negative behind.
    #[inline]
    pub fn side(&self, x: f32, z: f32) -> f32 {
        (Vec2::new(x, z) - self.point).dot(self.direction)
    }
}

/// Raises vertices in front of `fault` by `delta` and lowers those behind it.
///
/// Returns the number of vertices that moved.
pub fn apply_fault(mesh: &mut TriangleMesh, fault: &FaultLine, delta: f32) -> usize {
    let mut moved = 0;
    for i in 0..mesh.vertex_count() {
        let side = fault.side(mesh.pos_x[i], mesh.pos_z[i]);
        if side > 0.0 {
            mesh.pos_y[i] += delta;
            moved += 1;
        } else if side < 0.0 {
            mesh.pos_y[i] -= delta;
            moved += 1;
        }
    }
    moved
}

/// What one fault pass did, as seen by a [`Terrain::generate_observed`] observer.
///
/// [`Terrain::generate_observed`]: crate::Terrain::generate_observed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultPassReport {
    /// Pass index, from 0.
    pub iteration: u32,
    /// Displacement applied on each side of the line.
    pub delta: f32,
    /// Vertices raised or lowered.
    pub moved: usize,
}

/// Displacement used by each fault pass.
///
/// The running delta is divided by `2^((i + 1) / iterations)` before pass `i`
/// uses it, so
/// `delta(i) = initial / 2^((1 + 2 + … + (i + 1)) / iterations)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultSchedule {
    initial_delta: f32,
    iterations: u32,
}

impl FaultSchedule {
    pub fn new(initial_delta: f32, iterations: u32) -> Self {
        Self {
            initial_delta,
            iterations,
        }
    }

    /// Number of passes in the schedule.
    pub fn len(&self) -> u32 {
        self.iterations
    }

    pub fn is_empty(&self) -> bool {
        self.iterations == 0
    }

    /// Delta before any decay.
    pub fn initial_delta(&self) -> f32 {
        self.initial_delta
    }

    /// Factor pass `i` multiplies the running delta by: `2^(-(i + 1) / iterations)`.
    pub fn step_factor(&self, i: u32) -> f32 {
        if self.iterations == 0 {
            return 1.0;
        }
        (-((i + 1) as f32) / self.iterations as f32).exp2()
    }

    /// Closed form of the delta used by pass `i`.
    pub fn delta_at(&self, i: u32) -> f32 {
        if self.iterations == 0 {
            return self.initial_delta;
        }
        let k = (i as f64 + 1.0) * (i as f64 + 2.0) / 2.0;
        (self.initial_delta as f64 * (-k / self.iterations as f64).exp2()) as f32
    }

    /// Running deltas, one per pass, computed incrementally.
    pub fn deltas(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.iterations).scan(self.initial_delta, move |delta, i| {
            *delta *= self.step_factor(i);
            Some(*delta)
        })
    }
}
