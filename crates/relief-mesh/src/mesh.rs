//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! Each coordinate channel is stored contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Renderers want interleaved `[x0, y0, z0, x1, ...]` buffers instead;
//! [`TriangleMesh::positions_interleaved`] and
//! [`TriangleMesh::normals_interleaved`] produce those.

use relief_math::{Aabb, Vec3};
use relief_types::{ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};

/// A triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices (height for terrain).
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// X components of vertex normals.
    pub normal_x: Vec<f32>,
    /// Y components of vertex normals.
    pub normal_y: Vec<f32>,
    /// Z components of vertex normals.
    pub normal_z: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices — each triangle is [v0, v1, v2].
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i` as a `glam::Vec3`.
    #[inline]
    pub fn normal_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Appends a vertex with a zero normal and returns its index.
    pub fn push_vertex(&mut self, x: f32, y: f32, z: f32) -> u32 {
        let index = self.pos_x.len() as u32;
        self.pos_x.push(x);
        self.pos_y.push(y);
        self.pos_z.push(z);
        self.normal_x.push(0.0);
        self.normal_y.push(0.0);
        self.normal_z.push(0.0);
        index
    }

    /// Appends a triangle.
    #[inline]
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` buffer.
    pub fn positions_interleaved(&self) -> Vec<f32> {
        interleave(&self.pos_x, &self.pos_y, &self.pos_z)
    }

    /// Normals as a flat `[nx0, ny0, nz0, nx1, ...]` buffer.
    pub fn normals_interleaved(&self) -> Vec<f32> {
        interleave(&self.normal_x, &self.normal_y, &self.normal_z)
    }

    /// Minimum and maximum Y over all vertices, or `None` for an empty mesh.
    pub fn height_range(&self) -> Option<(f32, f32)> {
        let first = *self.pos_y.first()?;
        Some(
            self.pos_y
                .iter()
                .fold((first, first), |(lo, hi), &y| (lo.min(y), hi.max(y))),
        )
    }

    /// Bounding box over all vertices, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points((0..self.vertex_count()).map(|i| self.position_vec3(i)))
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - The index buffer holds whole triangles
    /// - Triangle indices are within bounds
    pub fn validate(&self) -> ReliefResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(ReliefError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n {
            return Err(ReliefError::InvalidMesh(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(ReliefError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        if let Some((i, &idx)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &idx)| idx as usize >= n)
        {
            return Err(ReliefError::InvalidMesh(format!(
                "Index {} at position {} is out of range (vertex count: {})",
                idx, i, n
            )));
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved position data.
    ///
    /// Normals are zeroed; call
    /// [`compute_vertex_normals`](crate::normals::compute_vertex_normals) afterwards.
    pub fn from_interleaved(positions: &[f32], indices: &[u32]) -> ReliefResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(ReliefError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);
        for p in positions.chunks_exact(3) {
            mesh.push_vertex(p[0], p[1], p[2]);
        }
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }
}

fn interleave(x: &[f32], y: &[f32], z: &[f32]) -> Vec<f32> {
    let mut out = Vec::with_capacity(x.len() * 3);
    for ((&x, &y), &z) in x.iter().zip(y).zip(z) {
        out.extend_from_slice(&[x, y, z]);
    }
    out
}
