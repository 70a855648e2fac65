//! Collision-driven combat and scoring
//!
//! Resolution runs in a fixed order every tick so simultaneous overlaps
//! always resolve the same way:
//! 1. player bullets that left the world
//! 2. player bullets vs obstacles
//! 3. player bullets vs zombies
//! 4. zombie bullets that left the world, then vs obstacles
//! 5. zombie bullets vs player
//! 6. power-ups vs player
//!
//! A bullet is consumed by its first match and never counted twice.

use super::collision::first_obstacle_hit;
use super::state::{Bullet, GameEvent, GameState, Player, PowerUpKind};
use super::world::WorldBounds;
use crate::tuning::Tuning;

/// Whether a bullet should be dropped for leaving the world
fn left_world(bullet: &Bullet, world: &WorldBounds) -> bool {
    world.is_outside(bullet.pos)
}

/// Steps 1-3. Returns the number of zombies killed.
pub fn resolve_player_bullets(state: &mut GameState, events: &mut Vec<GameEvent>) -> u32 {
    let mut killed = 0;
    let mut i = 0;
    while i < state.bullets.len() {
        let bullet = &state.bullets[i];
        if left_world(bullet, &state.world) {
            state.bullets.remove(i);
            continue;
        }

        let bounds = bullet.bounds();
        if first_obstacle_hit(&bounds, &state.obstacles).is_some() {
            state.bullets.remove(i);
            continue;
        }

        let Some(zi) = state.zombies.iter().position(|z| bounds.overlaps(&z.bounds())) else {
            i += 1;
            continue;
        };
        let damage = bullet.damage;
        state.bullets.remove(i);

        let zombie = &mut state.zombies[zi];
        zombie.health = zombie.health.saturating_sub(damage);
        if zombie.health == 0 {
            let id = zombie.id;
            state.zombies.remove(zi);
            state.kills += 1;
            killed += 1;
            log::debug!("Zombie {} killed (kills: {})", id, state.kills);
            events.push(GameEvent::ZombieKilled { id, kills: state.kills });
        }
    }
    killed
}

/// Steps 4-5. Returns true if this resolution killed the player.
///
/// Stops at the lethal hit so death is reported exactly once.
pub fn resolve_zombie_bullets(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    let player_bounds = state.player.bounds();
    let mut i = 0;
    while i < state.zombie_bullets.len() {
        let bullet = &state.zombie_bullets[i];
        if left_world(bullet, &state.world) {
            state.zombie_bullets.remove(i);
            continue;
        }

        let bounds = bullet.bounds();
        if first_obstacle_hit(&bounds, &state.obstacles).is_some() {
            state.zombie_bullets.remove(i);
            continue;
        }

        if !bounds.overlaps(&player_bounds) {
            i += 1;
            continue;
        }

        let damage = bullet.damage;
        state.zombie_bullets.remove(i);
        state.player.damage(damage);
        events.push(GameEvent::PlayerHit {
            health: state.player.health,
        });
        if state.player.is_dead() {
            log::debug!("Player killed with {} kills", state.kills);
            events.push(GameEvent::PlayerDied { kills: state.kills });
            return true;
        }
    }
    false
}

/// Apply a power-up's effect to the player
pub fn apply_power_up(player: &mut Player, kind: PowerUpKind, tuning: &Tuning) {
    match kind {
        PowerUpKind::Heal => player.heal(tuning.heal_amount),
        PowerUpKind::SpeedBoost => player.speed_boost.start(tuning.boost_duration),
        PowerUpKind::DamageBoost => player.damage_boost.start(tuning.boost_duration),
    }
}

/// Step 6
pub fn resolve_power_ups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_bounds = state.player.bounds();
    let mut collected = Vec::new();
    state.power_ups.retain(|p| {
        if p.bounds().overlaps(&player_bounds) {
            collected.push(p.kind);
            false
        } else {
            true
        }
    });
    for kind in collected {
        apply_power_up(&mut state.player, kind, &state.tuning);
        log::debug!("Collected {:?}", kind);
        events.push(GameEvent::PowerUpCollected { kind });
    }
}

/// Run every combat step in order. Returns true if the player died.
pub fn resolve_combat(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    resolve_player_bullets(state, events);
    if resolve_zombie_bullets(state, events) {
        return true;
    }
    resolve_power_ups(state, events);
    false
}
