//! Cubical container and wall penetration.
//!
//! The container is the cube `[-m, m]³` centred at the origin. A sphere
//! penetrates a wall when its surface crosses that wall's plane.

use std::fmt;

use relief_math::{Aabb, Vec3};
use relief_types::{ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};

/// One of the six container walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wall {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Wall {
    /// All walls in the order they are checked.
    pub const ALL: [Wall; 6] = [
        Wall::PosX,
        Wall::NegX,
        Wall::PosY,
        Wall::NegY,
        Wall::PosZ,
        Wall::NegZ,
    ];

    /// Axis index (0 = X, 1 = Y, 2 = Z).
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            Wall::PosX | Wall::NegX => 0,
            Wall::PosY | Wall::NegY => 1,
            Wall::PosZ | Wall::NegZ => 2,
        }
    }

    /// True for the wall on the positive side of its axis.
    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Wall::PosX | Wall::PosY | Wall::PosZ)
    }

    /// Unit normal pointing from the wall into the container.
    pub fn normal(self) -> Vec3 {
        match self {
            Wall::PosX => Vec3::NEG_X,
            Wall::NegX => Vec3::X,
            Wall::PosY => Vec3::NEG_Y,
            Wall::NegY => Vec3::Y,
            Wall::PosZ => Vec3::NEG_Z,
            Wall::NegZ => Vec3::Z,
        }
    }

    /// Short label, e.g. `"+x"`.
    pub fn label(self) -> &'static str {
        match self {
            Wall::PosX => "+x",
            Wall::NegX => "-x",
            Wall::PosY => "+y",
            Wall::NegY => "-y",
            Wall::PosZ => "+z",
            Wall::NegZ => "-z",
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The wall a particle crossed and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallHit {
    pub wall: Wall,
    /// Distance the sphere's surface lies beyond the wall plane. Always positive.
    pub penetration: f32,
}

/// Axis-aligned cube of half-width `m` centred at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    half_width: f32,
}

impl Container {
    /// Creates a container, rejecting non-positive or non-finite half-widths.
    pub fn new(half_width: f32) -> ReliefResult<Self> {
        if !(half_width > 0.0 && half_width.is_finite()) {
            return Err(ReliefError::config(format!(
                "container half-width must be positive and finite, got {half_width}"
            )));
        }
        Ok(Self { half_width })
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Y coordinate of the floor.
    #[inline]
    pub fn floor(&self) -> f32 {
        -self.half_width
    }

    /// The container as a bounding box.
    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec3::splat(-self.half_width), Vec3::splat(self.half_width))
    }

    /// Signed penetration of a sphere past `wall`. Positive means crossed.
    #[inline]
    pub fn penetration(&self, wall: Wall, center: Vec3, radius: f32) -> f32 {
        let p = center[wall.axis()];
        if wall.is_positive() {
            p + radius - self.half_width
        } else {
            -(p - radius + self.half_width)
        }
    }

    /// The wall crossed furthest by a sphere, if any.
    ///
    /// Touching a wall exactly is not a crossing. When two walls are crossed
    /// by the same depth the earlier one in [`Wall::ALL`] wins.
    pub fn deepest_penetration(&self, center: Vec3, radius: f32) -> Option<WallHit> {
        let mut deepest: Option<WallHit> = None;
        for wall in Wall::ALL {
            let penetration = self.penetration(wall, center, radius);
            let deeper = match deepest {
                Some(hit) => penetration > hit.penetration,
                None => penetration > 0.0,
            };
            if deeper {
                deepest = Some(WallHit { wall, penetration });
            }
        }
        deepest
    }

    /// True if a sphere fits entirely inside (touching allowed).
    pub fn contains(&self, center: Vec3, radius: f32) -> bool {
        self.deepest_penetration(center, radius).is_none()
    }
}
