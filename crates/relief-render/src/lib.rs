//! # relief-render
//!
//! Pluggable rendering abstraction for relief.
//!
//! The terrain and particle cores never touch a rendering context. They
//! expose flat buffers and per-particle attributes; this crate packages
//! those into [`MeshBuffers`] and [`SphereInstance`]s and hands them to a
//! [`Renderer`]. Backends: [`HeadlessRenderer`] (counts frames) and
//! [`JsonSceneExporter`] (writes the scene as one JSON document).

pub mod buffers;
pub mod json_exporter;
pub mod renderer;

pub use buffers::{sphere_instances, MeshBuffers, SphereInstance};
pub use json_exporter::JsonSceneExporter;
pub use renderer::{HeadlessRenderer, Renderer};
