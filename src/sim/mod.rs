//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod aabb;
pub mod collision;
pub mod combat;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;
pub mod zombie;

pub use aabb::Aabb;
pub use collision::{StepResult, resolve_player_move, resolve_zombie_step};
pub use state::{
    Boost, Bullet, GameEvent, GamePhase, GameState, Owner, Player, PowerUp, PowerUpKind, Zombie,
};
pub use tick::{TickInput, tick};
pub use world::{Obstacle, WorldBounds};
