//! Procedural mesh generators.
//!
//! These generators produce deterministic, resolution-configurable meshes
//! with counter-clockwise winding (viewed from the outside / from +Y).

use relief_types::{ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};

use crate::mesh::TriangleMesh;

/// Axis-aligned rectangle in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Footprint {
    /// Creates a footprint, rejecting empty or non-finite extents.
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> ReliefResult<Self> {
        let footprint = Self { min_x, max_x, min_z, max_z };
        footprint.validate()?;
        Ok(footprint)
    }

    /// Square footprint `[-half, half] × [-half, half]`.
    pub fn square(half: f32) -> ReliefResult<Self> {
        Self::new(-half, half, -half, half)
    }

    /// Checks that both extents are finite and non-empty.
    pub fn validate(&self) -> ReliefResult<()> {
        let values = [self.min_x, self.max_x, self.min_z, self.max_z];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ReliefError::config(format!(
                "footprint bounds must be finite, got {:?}",
                values
            )));
        }
        if self.min_x >= self.max_x || self.min_z >= self.max_z {
            return Err(ReliefError::config(format!(
                "footprint must have min < max on both axes, got x [{}, {}], z [{}, {}]",
                self.min_x, self.max_x, self.min_z, self.max_z
            )));
        }
        Ok(())
    }

    /// Width along X.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Depth along Z.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.max_z - self.min_z
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self {
            min_x: -1.0,
            max_x: 1.0,
            min_z: -1.0,
            max_z: 1.0,
        }
    }
}

/// Generates a flat `(n+1) × (n+1)` vertex grid at `y = 0` spanning `footprint`.
///
/// Vertices are row-major: X grows along a row, rows step from `max_z`
/// towards `min_z`. With that layout each cell `bl, br, tl, tr` is split into
/// `(bl, br, tl)` and `(br, tr, tl)`, which winds counter-clockwise seen from +Y.
///
/// Fails if `n < 1` or the footprint is empty.
///
/// # Example
/// ```
/// use relief_mesh::generators::{footprint_grid, Footprint};
/// let mesh = footprint_grid(2, &Footprint::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 cells × 2 tris each
/// ```
pub fn footprint_grid(n: u32, footprint: &Footprint) -> ReliefResult<TriangleMesh> {
    if n < 1 {
        return Err(ReliefError::config(format!(
            "grid resolution must be at least 1, got {n}"
        )));
    }
    footprint.validate()?;

    let n = n as usize;
    let verts_per_row = n + 1;
    let mut mesh = TriangleMesh::with_capacity(verts_per_row * verts_per_row, 2 * n * n);

    let dx = footprint.width() / n as f32;
    let dz = footprint.depth() / n as f32;

    for row in 0..=n {
        let z = footprint.max_z - dz * row as f32;
        for col in 0..=n {
            let x = footprint.min_x + dx * col as f32;
            mesh.push_vertex(x, 0.0, z);
        }
    }

    for row in 0..n {
        for col in 0..n {
            let bl = (row * verts_per_row + col) as u32;
            let br = bl + 1;
            let tl = bl + verts_per_row as u32;
            let tr = tl + 1;

            mesh.push_triangle(bl, br, tl);
            mesh.push_triangle(br, tr, tl);
        }
    }

    Ok(mesh)
}

/// Generates a UV sphere centered at the origin.
///
/// Used as the shared instance mesh when drawing particles.
///
/// # Arguments
/// - `radius` — Sphere radius.
/// - `stacks` — Number of horizontal slices (latitude divisions).
/// - `slices` — Number of vertical slices (longitude divisions).
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let vertex_count = (stacks + 1) * (slices + 1);
    let tri_count = stacks * slices * 2;
    let mut mesh = TriangleMesh::with_capacity(vertex_count, tri_count);

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32; // 0 to PI
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let theta = std::f32::consts::TAU * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let x = sin_phi * cos_theta;
            let y = cos_phi;
            let z = sin_phi * sin_theta;

            let v = mesh.push_vertex(radius * x, radius * y, radius * z);
            // Unit sphere: normal equals the direction from the centre
            mesh.normal_x[v as usize] = x;
            mesh.normal_y[v as usize] = y;
            mesh.normal_z[v as usize] = z;
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at poles
            if i != 0 {
                mesh.push_triangle(a, a + 1, b);
            }
            if i != stacks - 1 {
                mesh.push_triangle(a + 1, b + 1, b);
            }
        }
    }

    mesh
}
