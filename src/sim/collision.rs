//! Movement and collision resolution
//!
//! Each entity kind has its own policy against obstacles:
//! - player: clamp to the world, then all-or-nothing against obstacles
//! - zombie: full step, else x-only, else y-only, else stay put
//! - bullets: move unconditionally (obstacle contact is handled by combat)

use glam::Vec2;

use super::aabb::Aabb;
use super::state::Bullet;
use super::world::{Obstacle, WorldBounds, blocked_by_any};

/// Outcome of a zombie step attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Moved the full (diagonal) step
    Full,
    /// Blocked diagonally, slid along x
    AlongX,
    /// Blocked diagonally and along x, slid along y
    AlongY,
    /// Every option collided
    Blocked,
}

/// Resolve a player move.
///
/// The destination is clamped so the box stays inside the world; if the
/// clamped box overlaps any obstacle the whole move is rejected.
/// Returns the resulting top-left position.
pub fn resolve_player_move(
    bounds: &Aabb,
    delta: Vec2,
    obstacles: &[Obstacle],
    world: &WorldBounds,
) -> Vec2 {
    let candidate = bounds.at(world.clamp_min(bounds.min + delta, bounds.size));
    if blocked_by_any(&candidate, obstacles) {
        return bounds.min;
    }
    candidate.min
}

/// Resolve a zombie step using axis decomposition.
pub fn resolve_zombie_step(bounds: &Aabb, step: Vec2, obstacles: &[Obstacle]) -> (Vec2, StepResult) {
    let options = [
        (step, StepResult::Full),
        (Vec2::new(step.x, 0.0), StepResult::AlongX),
        (Vec2::new(0.0, step.y), StepResult::AlongY),
    ];
    for (delta, result) in options {
        let candidate = bounds.translated(delta);
        if !blocked_by_any(&candidate, obstacles) {
            return (candidate.min, result);
        }
    }
    (bounds.min, StepResult::Blocked)
}

/// Advance a bullet along its direction
#[inline]
pub fn advance_bullet(bullet: &mut Bullet, dt: f32) {
    bullet.pos += bullet.dir * bullet.speed * dt;
}

/// Index of the first obstacle a box overlaps, if any
pub fn first_obstacle_hit(bounds: &Aabb, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| bounds.overlaps(&o.bounds))
}
