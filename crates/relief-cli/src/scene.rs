//! Scene configuration file.
//!
//! One TOML document with optional `[terrain]` and `[particles]` tables.
//! Missing tables and fields fall back to their defaults:
//!
//! ```toml
//! [terrain]
//! resolution = 128
//! iterations = 3000
//! seed = 42
//!
//! [particles]
//! count = 25
//! collision_policy = "time_of_impact"
//! ```

use std::path::Path;

use relief_particles::ParticleConfig;
use relief_terrain::TerrainConfig;
use relief_types::{ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};

/// Terrain and particle settings read from one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub terrain: TerrainConfig,
    pub particles: ParticleConfig,
}

impl SceneConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> ReliefResult<Self> {
        toml::from_str(source)
            .map_err(|e| ReliefError::Serialization(format!("invalid scene config: {e}")))
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ReliefResult<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let scene = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.as_ref().display(), "scene config loaded");
        Ok(scene)
    }

    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&str>) -> ReliefResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serializes back to TOML.
    pub fn to_toml_string(&self) -> ReliefResult<String> {
        toml::to_string(self)
            .map_err(|e| ReliefError::Serialization(format!("scene config serialization failed: {e}")))
    }

    /// Validates both sections.
    pub fn validate(&self) -> ReliefResult<()> {
        self.terrain.validate()?;
        self.particles.validate()?;
        Ok(())
    }
}
