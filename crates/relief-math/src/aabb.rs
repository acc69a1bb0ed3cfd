//! Axis-aligned bounding boxes.

use serde::{Deserialize, Serialize};

use crate::{Mat4, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all `points`, or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    /// Box centre.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the longest edge.
    pub fn longest_side(&self) -> f32 {
        self.extent().max_element()
    }

    /// Returns true if `p` lies inside or on the boundary.
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Transform that centres the box at the origin and scales its
    /// longest side to 1.
    ///
    /// Computed as `S · T`. A degenerate (zero-size) box only translates.
    pub fn canonical_transform(&self) -> Mat4 {
        let translate = Mat4::from_translation(-self.center());
        let side = self.longest_side();
        if side <= 0.0 {
            return translate;
        }
        Mat4::from_scale(Vec3::splat(1.0 / side)) * translate
    }
}
