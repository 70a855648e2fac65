//! Axis-aligned bounding boxes
//!
//! Every overlap test in the game (movement blocking, spawn placement,
//! projectile hits, power-up pickup) goes through [`Aabb::overlaps`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner (minimum x, minimum y)
    pub min: Vec2,
    /// Width and height (both non-negative)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box of side `side` anchored at `min`
    pub fn square(min: Vec2, side: f32) -> Self {
        Self::new(min, Vec2::splat(side))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Same box moved so its top-left corner sits at `min`
    #[inline]
    pub fn at(&self, min: Vec2) -> Self {
        Self::new(min, self.size)
    }

    #[inline]
    pub fn translated(&self, delta: Vec2) -> Self {
        self.at(self.min + delta)
    }

    /// Rectangles intersect iff both axis projections overlap.
    ///
    /// Touching edges do not count as overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }

    /// Whether `point` lies inside the box (min edges inclusive)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}
