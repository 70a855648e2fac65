//! Red Alert - a top-down zombie arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, AI, spawning, combat, phases)
//! - `game`: Session wrapper that wires the sim to its collaborators
//! - `persistence`: High score store (plain-text file)
//! - `tuning`: Data-driven game balance
//! - `render` / `audio` / `ui`: Narrow interfaces to the excluded front end
//! - `platform`: Fixed-step frame driver

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::{FinalScore, Session};
pub use highscores::HighScore;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 2000.0;
    pub const WORLD_HEIGHT: f32 = 2000.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const PLAYER_MAX_HEALTH: u32 = 20;
    /// Units per second
    pub const PLAYER_SPEED: f32 = 300.0;
    /// Radians per second
    pub const PLAYER_ROTATION_SPEED: f32 = std::f32::consts::PI;
    pub const PLAYER_FIRE_COOLDOWN: f32 = 0.2;

    /// Adversary defaults
    pub const ZOMBIE_SIZE: f32 = 32.0;
    pub const ZOMBIE_HEALTH: u32 = 3;
    pub const ZOMBIE_SPEED: f32 = 60.0;
    pub const ZOMBIE_FIRE_MIN_INTERVAL: f32 = 1.0;
    pub const ZOMBIE_FIRE_MAX_INTERVAL: f32 = 3.0;

    /// Projectile defaults
    pub const BULLET_SIZE: f32 = 8.0;
    pub const BULLET_SPEED: f32 = 600.0;
    /// Zombie bullets travel at half the player's bullet speed
    pub const ZOMBIE_BULLET_SPEED: f32 = 300.0;
    pub const BULLET_DAMAGE: u32 = 1;
    pub const BOOSTED_BULLET_DAMAGE: u32 = 2;

    /// Spawner defaults (seconds)
    pub const ZOMBIE_SPAWN_INTERVAL: f32 = 3.0;
    pub const POWER_UP_SPAWN_INTERVAL: f32 = 10.0;
    /// Footprint tested against obstacles before a zombie spawns
    pub const SPAWN_FOOTPRINT: f32 = 40.0;
    pub const MIN_SPAWN_DISTANCE: f32 = 200.0;

    /// Power-up defaults
    pub const POWER_UP_SIZE: f32 = 24.0;
    pub const HEAL_AMOUNT: u32 = 5;
    pub const BOOST_DURATION: f32 = 5.0;
    pub const SPEED_BOOST_MULTIPLIER: f32 = 1.5;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 120.0;
}

/// Convert a facing angle (radians, 0 = sprite "up") to a unit direction.
///
/// Sprites are drawn pointing up, so the angle is offset by -90° before
/// converting to a world-space vector.
#[inline]
pub fn facing_to_direction(facing: f32) -> Vec2 {
    Vec2::from_angle(facing - std::f32::consts::FRAC_PI_2)
}

/// Convert a direction to a facing angle (radians, 0 = sprite "up")
#[inline]
pub fn direction_to_facing(dir: Vec2) -> f32 {
    normalize_angle(dir.y.atan2(dir.x) + std::f32::consts::FRAC_PI_2)
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_zero_points_up() {
        let dir = facing_to_direction(0.0);
        assert!(dir.x.abs() < 1e-5);
        assert!((dir.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_facing_round_trip() {
        for &facing in &[0.0, 0.5, 1.5, -2.0, 3.0] {
            let back = direction_to_facing(facing_to_direction(facing));
            assert!((normalize_angle(back - facing)).abs() < 1e-4, "{facing} -> {back}");
        }
    }

    #[test]
    fn test_normalize_angle_wraps() {
        use std::f32::consts::PI;
        for angle in [3.0 * PI, -3.0 * PI / 2.0, 10.0, -7.5] {
            let wrapped = normalize_angle(angle);
            assert!((-PI..PI).contains(&wrapped), "{angle} -> {wrapped}");
            assert!((wrapped.sin() - angle.sin()).abs() < 1e-4);
            assert!((wrapped.cos() - angle.cos()).abs() < 1e-4);
        }
        assert!((normalize_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-4);
    }
}
