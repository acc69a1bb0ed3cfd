//! # relief-cli
//!
//! Command implementations behind the `relief` binary, plus the
//! [`SceneConfig`](scene::SceneConfig) TOML document shared by them.

pub mod commands;
pub mod scene;

pub use scene::SceneConfig;
