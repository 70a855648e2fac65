//! World extent and static obstacles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;

/// The playable rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    /// Clamp a box's top-left corner so the whole box stays inside the world
    pub fn clamp_min(&self, min: Vec2, size: Vec2) -> Vec2 {
        let max_x = (self.width - size.x).max(0.0);
        let max_y = (self.height - size.y).max(0.0);
        Vec2::new(min.x.clamp(0.0, max_x), min.y.clamp(0.0, max_y))
    }

    /// Whether a point has left the world (boundary itself is still inside)
    pub fn is_outside(&self, point: Vec2) -> bool {
        point.x < 0.0 || point.x > self.width || point.y < 0.0 || point.y > self.height
    }
}

/// An impassable, immutable rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub bounds: Aabb,
}

impl Obstacle {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self {
            bounds: Aabb::new(min, size),
        }
    }
}

/// Whether `candidate` overlaps any obstacle
pub fn blocked_by_any(candidate: &Aabb, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| candidate.overlaps(&o.bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_full_extent_inside() {
        let world = WorldBounds::new(2000.0, 2000.0);
        let size = Vec2::splat(32.0);
        assert_eq!(world.clamp_min(Vec2::new(-5.0, 1990.0), size), Vec2::new(0.0, 1968.0));
        assert_eq!(world.clamp_min(Vec2::new(100.0, 100.0), size), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_is_outside_boundary_inclusive() {
        let world = WorldBounds::new(2000.0, 2000.0);
        assert!(!world.is_outside(Vec2::new(0.0, 2000.0)));
        assert!(world.is_outside(Vec2::new(-0.1, 10.0)));
        assert!(world.is_outside(Vec2::new(10.0, 2000.5)));
    }

    #[test]
    fn test_blocked_by_any() {
        let obstacles = [
            Obstacle::new(Vec2::new(100.0, 100.0), Vec2::splat(50.0)),
            Obstacle::new(Vec2::new(400.0, 400.0), Vec2::splat(50.0)),
        ];
        assert!(blocked_by_any(&Aabb::square(Vec2::new(420.0, 420.0), 10.0), &obstacles));
        assert!(!blocked_by_any(&Aabb::square(Vec2::new(200.0, 200.0), 10.0), &obstacles));
        assert!(!blocked_by_any(&Aabb::square(Vec2::ZERO, 10.0), &[]));
    }
}
