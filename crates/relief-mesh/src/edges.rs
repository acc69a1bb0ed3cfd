//! Wireframe edge lists.

use crate::mesh::TriangleMesh;

/// Line-list index buffer for wireframe rendering.
///
/// Each triangle `(a, b, c)` contributes `a-b`, `b-c`, `c-a` in that order.
/// Edges shared by two triangles appear twice; the list is sized for a
/// line draw call, not for topology queries.
pub fn wireframe_edges(indices: &[u32]) -> Vec<u32> {
    let mut edges = Vec::with_capacity(indices.len() * 2);
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        edges.extend_from_slice(&[a, b, b, c, c, a]);
    }
    edges
}

/// Wireframe edges for a mesh. See [`wireframe_edges`].
pub fn mesh_wireframe(mesh: &TriangleMesh) -> Vec<u32> {
    wireframe_edges(&mesh.indices)
}
