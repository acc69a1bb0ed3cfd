//! Vertex normal reconstruction from triangle mesh data.
//!
//! Every triangle contributes half of its unnormalized face normal
//! (`|e1 × e2| / 2` is the triangle's area) to each of its three vertices.
//! The accumulated sums are then normalized.

use crate::mesh::TriangleMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Only an exactly zero sum (an untouched vertex, or contributions that
/// cancel) yields a zero normal. Sums are rescaled by their largest
/// component before normalizing, so tiny meshes keep unit normals.
///
/// This modifies the mesh's `normal_x`, `normal_y`, `normal_z` arrays in place.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let n = mesh.vertex_count();

    mesh.normal_x.clear();
    mesh.normal_y.clear();
    mesh.normal_z.clear();
    mesh.normal_x.resize(n, 0.0);
    mesh.normal_y.resize(n, 0.0);
    mesh.normal_z.resize(n, 0.0);

    for t in 0..mesh.triangle_count() {
        let [ia, ib, ic] = mesh.triangle(t);
        let a = ia as usize;
        let b = ib as usize;
        let c = ic as usize;

        let pa = mesh.position_vec3(a);
        let e1 = mesh.position_vec3(b) - pa;
        let e2 = mesh.position_vec3(c) - pa;

        // |e1 × e2| is twice the triangle area
        let weighted = e1.cross(e2) * 0.5;

        for v in [a, b, c] {
            mesh.normal_x[v] += weighted.x;
            mesh.normal_y[v] += weighted.y;
            mesh.normal_z[v] += weighted.z;
        }
    }

    for i in 0..n {
        let x = mesh.normal_x[i];
        let y = mesh.normal_y[i];
        let z = mesh.normal_z[i];
        let scale = x.abs().max(y.abs()).max(z.abs());
        if scale > 0.0 {
            let (x, y, z) = (x / scale, y / scale, z / scale);
            let inv = (x * x + y * y + z * z).sqrt().recip();
            mesh.normal_x[i] = x * inv;
            mesh.normal_y[i] = y * inv;
            mesh.normal_z[i] = z * inv;
        } else {
            mesh.normal_x[i] = 0.0;
            mesh.normal_y[i] = 0.0;
            mesh.normal_z[i] = 0.0;
        }
    }
}
