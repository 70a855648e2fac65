//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a `tuning.json` next to
//! the binary can override any subset of them. Missing fields fall back to
//! the defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::world::{Obstacle, WorldBounds};

/// Errors raised while reading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Obstacle placement as stored in tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world_width: f32,
    pub world_height: f32,

    // === Player ===
    pub player_size: f32,
    pub player_max_health: u32,
    pub player_speed: f32,
    pub player_rotation_speed: f32,
    pub player_fire_cooldown: f32,

    // === Zombies ===
    pub zombie_size: f32,
    pub zombie_health: u32,
    pub zombie_speed: f32,
    pub zombie_fire_min_interval: f32,
    pub zombie_fire_max_interval: f32,

    // === Projectiles ===
    pub bullet_size: f32,
    pub bullet_speed: f32,
    pub zombie_bullet_speed: f32,
    pub bullet_damage: u32,
    pub boosted_bullet_damage: u32,

    // === Spawning ===
    pub zombie_spawn_interval: f32,
    pub power_up_spawn_interval: f32,
    pub spawn_footprint: f32,
    pub min_spawn_distance: f32,
    /// Population cap; `None` spawns without limit
    pub max_zombies: Option<usize>,

    // === Power-ups ===
    pub power_up_size: f32,
    pub heal_amount: u32,
    pub boost_duration: f32,
    pub speed_boost_multiplier: f32,

    pub obstacles: Vec<ObstacleLayout>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            player_size: PLAYER_SIZE,
            player_max_health: PLAYER_MAX_HEALTH,
            player_speed: PLAYER_SPEED,
            player_rotation_speed: PLAYER_ROTATION_SPEED,
            player_fire_cooldown: PLAYER_FIRE_COOLDOWN,

            zombie_size: ZOMBIE_SIZE,
            zombie_health: ZOMBIE_HEALTH,
            zombie_speed: ZOMBIE_SPEED,
            zombie_fire_min_interval: ZOMBIE_FIRE_MIN_INTERVAL,
            zombie_fire_max_interval: ZOMBIE_FIRE_MAX_INTERVAL,

            bullet_size: BULLET_SIZE,
            bullet_speed: BULLET_SPEED,
            zombie_bullet_speed: ZOMBIE_BULLET_SPEED,
            bullet_damage: BULLET_DAMAGE,
            boosted_bullet_damage: BOOSTED_BULLET_DAMAGE,

            zombie_spawn_interval: ZOMBIE_SPAWN_INTERVAL,
            power_up_spawn_interval: POWER_UP_SPAWN_INTERVAL,
            spawn_footprint: SPAWN_FOOTPRINT,
            min_spawn_distance: MIN_SPAWN_DISTANCE,
            max_zombies: None,

            power_up_size: POWER_UP_SIZE,
            heal_amount: HEAL_AMOUNT,
            boost_duration: BOOST_DURATION,
            speed_boost_multiplier: SPEED_BOOST_MULTIPLIER,

            // Two pillars: one near the centre, one lower left
            obstacles: vec![
                ObstacleLayout {
                    x: 1000.0,
                    y: 800.0,
                    width: OBSTACLE_SIZE,
                    height: OBSTACLE_SIZE,
                },
                ObstacleLayout {
                    x: 300.0,
                    y: 1200.0,
                    width: OBSTACLE_SIZE,
                    height: OBSTACLE_SIZE,
                },
            ],
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, then validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults when absent or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No tuning file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            self.world_width,
            self.world_height,
            self.player_size,
            self.zombie_size,
            self.bullet_size,
            self.power_up_size,
            self.spawn_footprint,
        ];
        if positive.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(TuningError::Invalid("world and entity sizes must be positive and finite"));
        }
        let non_negative = [
            self.player_speed,
            self.player_rotation_speed,
            self.player_fire_cooldown,
            self.zombie_speed,
            self.zombie_fire_min_interval,
            self.zombie_fire_max_interval,
            self.bullet_speed,
            self.zombie_bullet_speed,
            self.zombie_spawn_interval,
            self.power_up_spawn_interval,
            self.min_spawn_distance,
            self.boost_duration,
            self.speed_boost_multiplier,
        ];
        if non_negative.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(TuningError::Invalid("speeds, intervals and durations must be finite and non-negative"));
        }
        let obstacles_ok = self.obstacles.iter().all(|o| {
            [o.x, o.y, o.width, o.height].iter().all(|v| v.is_finite()) && o.width >= 0.0 && o.height >= 0.0
        });
        if !obstacles_ok {
            return Err(TuningError::Invalid("obstacle layout must be finite with non-negative size"));
        }
        if self.zombie_fire_min_interval > self.zombie_fire_max_interval {
            return Err(TuningError::Invalid("zombie fire interval range is inverted"));
        }
        if self.player_max_health == 0 || self.zombie_health == 0 {
            return Err(TuningError::Invalid("health values must be at least 1"));
        }
        Ok(())
    }

    pub fn world(&self) -> WorldBounds {
        WorldBounds::new(self.world_width, self.world_height)
    }

    pub fn build_obstacles(&self) -> Vec<Obstacle> {
        self.obstacles
            .iter()
            .map(|o| Obstacle::new(Vec2::new(o.x, o.y), Vec2::new(o.width, o.height)))
            .collect()
    }
}
