//! # relief-math
//!
//! Math primitives shared by the terrain and particle cores.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, etc.)
//! - [`RandomSource`] — the injectable uniform random source both cores draw from
//! - [`Aabb`] — axis-aligned bounds with a canonical unit-box transform

pub mod aabb;
pub mod random;

pub use aabb::Aabb;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};

// Re-export glam types as the canonical math types for relief.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
