//! # relief-types
//!
//! Shared identifiers, error types, and physical constants
//! for the relief terrain generator and particle simulator.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other relief crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{ReliefError, ReliefResult};
pub use ids::ParticleId;
