//! # relief-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — Positions, normals, and flat triangle indices.
//! - [`Footprint`] — Axis-aligned rectangle in the XZ plane that a grid spans.
//! - Procedural generators (footprint grids, UV spheres), vertex normal
//!   reconstruction, wireframe edge lists, and a minimal OBJ loader.

pub mod edges;
pub mod generators;
pub mod mesh;
pub mod normals;
pub mod obj;

pub use generators::Footprint;
pub use mesh::TriangleMesh;
