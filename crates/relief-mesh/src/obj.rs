//! Minimal Wavefront OBJ loading.
//!
//! Only geometry is read: `v` records become vertices and `f` records become
//! triangles (polygons are fan-triangulated). Texture coordinates, normals,
//! groups, and material statements are skipped. Normals are always
//! recomputed from the loaded faces.

use std::path::Path;

use relief_types::{ReliefError, ReliefResult};

use crate::mesh::TriangleMesh;
use crate::normals::compute_vertex_normals;

/// Parses OBJ source text into a mesh with reconstructed normals.
pub fn parse_obj(source: &str) -> ReliefResult<TriangleMesh> {
    let mut mesh = TriangleMesh::default();
    let mut faces: Vec<(usize, Vec<i64>)> = Vec::new();
    let mut skipped = 0usize;

    for (line_index, raw) in source.lines().enumerate() {
        let line_no = line_index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let mut coords = [0.0f32; 3];
                for coord in &mut coords {
                    let token = tokens.next().ok_or_else(|| parse_error(line_no, "vertex needs 3 coordinates"))?;
                    *coord = token
                        .parse()
                        .map_err(|_| parse_error(line_no, format!("invalid coordinate '{token}'")))?;
                }
                mesh.push_vertex(coords[0], coords[1], coords[2]);
            }
            Some("f") => {
                let declared = mesh.vertex_count() as i64;
                let refs = tokens
                    .map(|token| {
                        // Negative references are relative to the vertices seen so far
                        parse_face_ref(token, line_no).map(|r| if r < 0 { declared + r + 1 } else { r })
                    })
                    .collect::<ReliefResult<Vec<i64>>>()?;
                if refs.len() < 3 {
                    return Err(parse_error(line_no, "face needs at least 3 vertices"));
                }
                faces.push((line_no, refs));
            }
            Some(other) => {
                skipped += 1;
                tracing::debug!(line = line_no, record = other, "skipping OBJ record");
            }
            None => {}
        }
    }

    // Faces may reference vertices declared later in the file.
    let vertex_count = mesh.vertex_count();
    for (line_no, refs) in faces {
        let resolved = refs
            .iter()
            .map(|&r| resolve_index(r, vertex_count, line_no))
            .collect::<ReliefResult<Vec<u32>>>()?;
        for k in 1..resolved.len() - 1 {
            mesh.push_triangle(resolved[0], resolved[k], resolved[k + 1]);
        }
    }

    compute_vertex_normals(&mut mesh);
    mesh.validate()?;

    tracing::info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        skipped,
        "loaded OBJ mesh"
    );
    Ok(mesh)
}

/// Reads and parses an OBJ file from disk.
pub fn load_obj(path: impl AsRef<Path>) -> ReliefResult<TriangleMesh> {
    let source = std::fs::read_to_string(path)?;
    parse_obj(&source)
}

/// Parses `7`, `7/1`, `7//3`, or `7/1/3` into the vertex reference `7`.
fn parse_face_ref(token: &str, line_no: usize) -> ReliefResult<i64> {
    let vertex = token.split('/').next().unwrap_or_default();
    vertex
        .parse()
        .map_err(|_| parse_error(line_no, format!("invalid face index '{token}'")))
}

/// OBJ indices are 1-based.
fn resolve_index(reference: i64, vertex_count: usize, line_no: usize) -> ReliefResult<u32> {
    let n = vertex_count as i64;
    if reference < 1 || reference > n {
        return Err(parse_error(
            line_no,
            format!("face index {reference} out of range (vertex count: {vertex_count})"),
        ));
    }
    Ok((reference - 1) as u32)
}

fn parse_error(line: usize, message: impl Into<String>) -> ReliefError {
    ReliefError::Parse {
        line,
        message: message.into(),
    }
}
