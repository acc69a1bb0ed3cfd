//! Integration tests for relief-mesh.

use relief_mesh::edges::{mesh_wireframe, wireframe_edges};
use relief_mesh::generators::{footprint_grid, uv_sphere, Footprint};
use relief_mesh::normals::compute_vertex_normals;
use relief_mesh::obj::parse_obj;
use relief_mesh::TriangleMesh;
use relief_types::ReliefError;

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 0.0],
        pos_z: vec![0.0, 0.0, -1.0],
        normal_x: vec![0.0; 3],
        normal_y: vec![0.0; 3],
        normal_z: vec![0.0; 3],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
}

#[test]
fn validate_ok() {
    assert!(make_single_triangle().validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(matches!(mesh.validate(), Err(ReliefError::InvalidMesh(_))));
}

#[test]
fn validate_catches_partial_triangle() {
    let mut mesh = make_single_triangle();
    mesh.indices.push(0);
    assert!(mesh.validate().is_err());
}

#[test]
fn interleaved_round_trip() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let mesh = TriangleMesh::from_interleaved(&positions, &[0, 1, 2]).unwrap();
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
    assert_eq!(mesh.positions_interleaved(), positions);
    assert_eq!(mesh.normals_interleaved(), vec![0.0; 9]);
}

#[test]
fn height_range_and_bounds() {
    let mut mesh = make_single_triangle();
    mesh.pos_y = vec![-0.5, 0.25, 1.0];
    assert_eq!(mesh.height_range(), Some((-0.5, 1.0)));
    let bb = mesh.bounds().unwrap();
    assert_eq!(bb.min.y, -0.5);
    assert_eq!(bb.max.x, 1.0);
    assert!(TriangleMesh::default().height_range().is_none());
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn footprint_rejects_empty_extent() {
    assert!(Footprint::new(1.0, 1.0, -1.0, 1.0).is_err());
    assert!(Footprint::new(-1.0, 1.0, 2.0, 0.0).is_err());
    assert!(Footprint::new(f32::NAN, 1.0, -1.0, 1.0).is_err());
    assert!(Footprint::square(2.0).is_ok());
}

#[test]
fn grid_rejects_zero_resolution() {
    let err = footprint_grid(0, &Footprint::default()).unwrap_err();
    assert!(matches!(err, ReliefError::InvalidConfig(_)));
}

#[test]
fn grid_counts_hold_for_many_resolutions() {
    for n in 1..=12u32 {
        let mesh = footprint_grid(n, &Footprint::default()).unwrap();
        let n = n as usize;
        assert_eq!(mesh.vertex_count(), (n + 1) * (n + 1));
        assert_eq!(mesh.triangle_count(), 2 * n * n);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
        assert!(mesh.validate().is_ok());
    }
}

#[test]
fn grid_spans_footprint_at_zero_height() {
    let fp = Footprint::new(-2.0, 4.0, 1.0, 3.0).unwrap();
    let mesh = footprint_grid(3, &fp).unwrap();
    assert!(mesh.pos_y.iter().all(|&y| y == 0.0));
    assert_eq!(mesh.position(0), [-2.0, 0.0, 3.0]);
    assert_eq!(mesh.position(3), [4.0, 0.0, 3.0]);
    let last = mesh.vertex_count() - 1;
    assert!((mesh.pos_x[last] - 4.0).abs() < 1e-6);
    assert!((mesh.pos_z[last] - 1.0).abs() < 1e-6);
}

#[test]
fn grid_cell_winding() {
    let mesh = footprint_grid(1, &Footprint::default()).unwrap();
    // bl=0, br=1, tl=2, tr=3
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
    assert_eq!(mesh.triangle(1), [1, 3, 2]);
}

#[test]
fn uv_sphere_radius() {
    let mesh = uv_sphere(2.5, 8, 16);
    assert!(mesh.validate().is_ok());
    for i in 0..mesh.vertex_count() {
        let dist = mesh.position_vec3(i).length();
        assert!((dist - 2.5).abs() < 1e-4, "Vertex {} at distance {}", i, dist);
    }
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_grid_normals_point_up() {
    let mut mesh = footprint_grid(4, &Footprint::default()).unwrap();
    compute_vertex_normals(&mut mesh);
    for i in 0..mesh.vertex_count() {
        let n = mesh.normal_vec3(i);
        assert!(n.x.abs() < 1e-5);
        assert!(n.z.abs() < 1e-5);
        assert!((n.y - 1.0).abs() < 1e-5);
    }
}

#[test]
fn bumpy_grid_normals_are_unit_length() {
    let mut mesh = footprint_grid(10, &Footprint::square(2.0).unwrap()).unwrap();
    for i in 0..mesh.vertex_count() {
        mesh.pos_y[i] = (mesh.pos_x[i] * 3.0).sin() * (mesh.pos_z[i] * 2.0).cos();
    }
    compute_vertex_normals(&mut mesh);
    for i in 0..mesh.vertex_count() {
        let len = mesh.normal_vec3(i).length();
        assert!((0.999..=1.001).contains(&len), "Normal at {} has length {}", i, len);
    }
}

#[test]
fn tiny_grid_normals_stay_unit_length() {
    let mut mesh = footprint_grid(100, &Footprint::square(1e-4).unwrap()).unwrap();
    compute_vertex_normals(&mut mesh);
    for i in 0..mesh.vertex_count() {
        let n = mesh.normal_vec3(i);
        assert!((n.y - 1.0).abs() < 1e-5, "Normal at {} is {:?}", i, n);
    }
}

#[test]
fn isolated_vertex_keeps_zero_normal() {
    let mut mesh = make_single_triangle();
    mesh.push_vertex(5.0, 5.0, 5.0);
    compute_vertex_normals(&mut mesh);
    assert_eq!(mesh.normal_vec3(3).length(), 0.0);
    assert!((mesh.normal_vec3(0).length() - 1.0).abs() < 1e-6);
}

#[test]
fn sphere_normals_point_outward() {
    let mut mesh = uv_sphere(1.0, 8, 16);
    compute_vertex_normals(&mut mesh);
    let mut checked = 0;
    for i in 0..mesh.vertex_count() {
        let p = mesh.position_vec3(i);
        let xz_extent = (p.x * p.x + p.z * p.z).sqrt();
        if xz_extent < 0.15 {
            continue;
        }
        let dot = p.normalize().dot(mesh.normal_vec3(i));
        assert!(dot > 0.5, "Vertex {} normal misaligned: dot={}", i, dot);
        checked += 1;
    }
    assert!(checked > 0);
}

// ─── Edge Tests ───────────────────────────────────────────────

#[test]
fn wireframe_lists_three_edges_per_face() {
    let edges = wireframe_edges(&[0, 1, 2, 1, 3, 2]);
    assert_eq!(edges, vec![0, 1, 1, 2, 2, 0, 1, 3, 3, 2, 2, 1]);
}

#[test]
fn wireframe_keeps_shared_edges_twice() {
    let mesh = footprint_grid(3, &Footprint::default()).unwrap();
    let edges = mesh_wireframe(&mesh);
    assert_eq!(edges.len(), mesh.triangle_count() * 6);
    // Diagonal 1-4 of the first cell belongs to both of its triangles
    let pairs: Vec<(u32, u32)> = edges.chunks_exact(2).map(|e| (e[0].min(e[1]), e[0].max(e[1]))).collect();
    let diagonal = (1, 4);
    assert_eq!(pairs.iter().filter(|&&p| p == diagonal).count(), 2);
}

// ─── OBJ Tests ────────────────────────────────────────────────

const TETRA: &str = "\
# tetrahedron
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
vn 0 0 1
f 1 3 2
f 1 2 4
f 1 4 3
f 2/1 3/2 4/3
";

#[test]
fn obj_parses_vertices_and_faces() {
    let mesh = parse_obj(TETRA).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 4);
    assert_eq!(mesh.triangle(3), [1, 2, 3]);
    for i in 0..4 {
        assert!((mesh.normal_vec3(i).length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn obj_fan_triangulates_quads() {
    let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 1 0 -1\nv 0 0 -1\nf 1 2 3 4\n").unwrap();
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.triangle(1), [0, 2, 3]);
}

#[test]
fn obj_negative_indices_are_relative() {
    let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n").unwrap();
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
}

#[test]
fn obj_reports_bad_coordinate_line() {
    let err = parse_obj("v 0 0 0\nv 1 zero 0\n").unwrap_err();
    match err {
        ReliefError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn obj_rejects_out_of_range_face() {
    assert!(parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n").is_err());
    assert!(parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n").is_err());
}

#[test]
fn obj_rejects_short_face() {
    assert!(parse_obj("v 0 0 0\nv 1 0 0\nf 1 2\n").is_err());
}

#[test]
fn mesh_serialization() {
    let mesh = make_single_triangle();
    let json = serde_json::to_string(&mesh).unwrap();
    let back: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(back.indices, mesh.indices);
}
