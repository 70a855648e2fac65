//! Timed spawning of zombies and power-ups
//!
//! Both spawners are elapsed-time counters advanced once per tick. When a
//! counter passes its interval it resets and one spawn attempt is made.

use glam::Vec2;
use rand::Rng;

use super::aabb::Aabb;
use super::state::{GameEvent, GameState, PowerUp, PowerUpKind};
use super::world::blocked_by_any;
use super::zombie::spawn_zombie;

/// Why a zombie spawn attempt produced nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnRejection {
    Obstacle,
    TooCloseToPlayer,
    PopulationCap,
}

/// Uniform random top-left corner for a box of `size` inside the world
fn random_position(state: &mut GameState, size: f32) -> Vec2 {
    let max_x = (state.world.width - size).max(0.0);
    let max_y = (state.world.height - size).max(0.0);
    Vec2::new(
        state.rng.random_range(0.0..=max_x),
        state.rng.random_range(0.0..=max_y),
    )
}

/// Check the placement rules for a zombie at `pos`
pub fn check_zombie_placement(state: &GameState, pos: Vec2) -> Result<(), SpawnRejection> {
    let footprint = Aabb::square(pos, state.tuning.spawn_footprint);
    if blocked_by_any(&footprint, &state.obstacles) {
        return Err(SpawnRejection::Obstacle);
    }
    let distance = footprint.center().distance(state.player.center());
    if distance < state.tuning.min_spawn_distance {
        return Err(SpawnRejection::TooCloseToPlayer);
    }
    Ok(())
}

/// One zombie spawn attempt at a random position.
///
/// A rejected attempt is simply skipped; the next one happens a full
/// interval later.
pub fn attempt_zombie_spawn(state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<u32, SpawnRejection> {
    if state.tuning.max_zombies.is_some_and(|cap| state.zombies.len() >= cap) {
        return Err(SpawnRejection::PopulationCap);
    }
    let footprint = state.tuning.spawn_footprint;
    let pos = random_position(state, footprint);
    check_zombie_placement(state, pos)?;
    let id = spawn_zombie(state, pos);
    log::debug!("Zombie {} spawned at ({:.0}, {:.0})", id, pos.x, pos.y);
    events.push(GameEvent::ZombieSpawned { id });
    Ok(id)
}

/// Spawn a random power-up at a random position.
///
/// Unlike zombies, power-ups are not checked against obstacles.
pub fn spawn_power_up(state: &mut GameState, events: &mut Vec<GameEvent>) -> PowerUpKind {
    let size = state.tuning.power_up_size;
    let pos = random_position(state, size);
    let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];
    let id = state.next_entity_id();
    state.power_ups.push(PowerUp { id, kind, pos, size });
    log::debug!("{:?} power-up spawned at ({:.0}, {:.0})", kind, pos.x, pos.y);
    events.push(GameEvent::PowerUpSpawned { kind });
    kind
}

/// Advance both spawn timers and fire any spawn that came due
pub fn update_spawners(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    state.spawn_timers.zombie += dt;
    if state.spawn_timers.zombie > state.tuning.zombie_spawn_interval {
        state.spawn_timers.zombie = 0.0;
        if let Err(reason) = attempt_zombie_spawn(state, events) {
            log::debug!("Zombie spawn skipped: {:?}", reason);
        }
    }

    state.spawn_timers.power_up += dt;
    if state.spawn_timers.power_up > state.tuning.power_up_spawn_interval {
        state.spawn_timers.power_up = 0.0;
        spawn_power_up(state, events);
    }
}
