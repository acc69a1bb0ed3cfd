//! # relief-terrain
//!
//! Procedural terrain built by repeatedly splitting a flat grid along
//! random fault lines.
//!
//! ## Key Types
//!
//! - [`TerrainConfig`] — Grid resolution, footprint, and fault parameters
//! - [`FaultSchedule`] — The decaying displacement applied per fault pass
//! - [`Terrain`] — The finished, read-only mesh with normals, edges, and height range

pub mod config;
pub mod fault;
pub mod terrain;

pub use config::TerrainConfig;
pub use fault::{apply_fault, FaultLine, FaultPassReport, FaultSchedule};
pub use terrain::Terrain;
