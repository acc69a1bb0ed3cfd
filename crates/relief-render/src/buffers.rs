//! Flat, render-ready views of terrain meshes and particles.

use relief_mesh::edges::mesh_wireframe;
use relief_mesh::TriangleMesh;
use relief_particles::{Particle, ParticleSimulator};
use relief_terrain::Terrain;
use serde::{Deserialize, Serialize};

/// Interleaved mesh buffers, ready for upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// `[x0, y0, z0, x1, ...]`
    pub vertices: Vec<f32>,
    /// `[nx0, ny0, nz0, nx1, ...]`
    pub normals: Vec<f32>,
    /// Three indices per triangle.
    pub faces: Vec<u32>,
    /// Two indices per wireframe edge.
    pub edges: Vec<u32>,
    pub min_height: f32,
    pub max_height: f32,
}

impl MeshBuffers {
    /// Buffers for a finished terrain.
    pub fn from_terrain(terrain: &Terrain) -> Self {
        Self {
            vertices: terrain.vertices(),
            normals: terrain.normals(),
            faces: terrain.faces().to_vec(),
            edges: terrain.edges().to_vec(),
            min_height: terrain.min_height(),
            max_height: terrain.max_height(),
        }
    }

    /// Buffers for an arbitrary mesh, e.g. one loaded from OBJ.
    pub fn from_mesh(mesh: &TriangleMesh) -> Self {
        let (min_height, max_height) = mesh.height_range().unwrap_or((0.0, 0.0));
        Self {
            vertices: mesh.positions_interleaved(),
            normals: mesh.normals_interleaved(),
            faces: mesh.indices.clone(),
            edges: mesh_wireframe(mesh),
            min_height,
            max_height,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn face_count(&self) -> usize {
        self.faces.len() / 3
    }
}

/// One sphere to draw: a unit sphere scaled by `radius` and moved to `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
}

impl SphereInstance {
    pub fn from_particle(particle: &Particle) -> Self {
        Self {
            position: particle.position.to_array(),
            radius: particle.radius(),
            color: particle.color(),
        }
    }
}

/// One instance per particle, in particle order.
pub fn sphere_instances(sim: &ParticleSimulator) -> Vec<SphereInstance> {
    sim.particles().iter().map(SphereInstance::from_particle).collect()
}
