//! # relief-particles
//!
//! Explicit-Euler particle simulation inside an axis-aligned cube.
//!
//! Particles fall under gravity, lose speed to drag, bounce off the six
//! container walls with a lossy reflection, and eventually come to rest
//! on the floor. Particles never interact with each other.
//!
//! ## Key Types
//!
//! - [`ParticleConfig`] — Container size, drag, restitution, and spawn parameters
//! - [`Container`] — The cube and its wall penetration query
//! - [`Particle`] — A single sphere and its per-tick `physics` step
//! - [`ParticleSimulator`] — Frame driver over a fixed particle set
//! - [`FrameClock`] — Converts host timestamps into simulated `dt`

pub mod clock;
pub mod config;
pub mod container;
pub mod particle;
pub mod simulator;

pub use clock::FrameClock;
pub use config::{CollisionPolicy, ParticleConfig};
pub use container::{Container, Wall, WallHit};
pub use particle::{Particle, StepOutcome};
pub use simulator::{FrameReport, ParticleSimulator};
