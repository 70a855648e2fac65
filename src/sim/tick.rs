//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.
//! Stage order while playing: player -> zombies -> bullets -> combat -> spawners.

use glam::Vec2;

use super::collision::{advance_bullet, resolve_player_move};
use super::combat::resolve_combat;
use super::spawn::update_spawners;
use super::state::{Bullet, GameEvent, GamePhase, GameState, Owner};
use super::zombie::update_zombies;

/// Decoded intents for a single tick (deterministic)
///
/// Movement, rotation and fire are held inputs; the rest are one-shot and
/// should be cleared by the driver once a tick has consumed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
    pub toggle_pause: bool,
    /// Click in world coordinates, resolved against UI controls by the session
    pub click_at: Option<Vec2>,
    pub start_game: bool,
    pub restart_game: bool,
    pub quit: bool,
}

impl TickInput {
    /// Clear one-shot intents after they have been processed
    pub fn clear_one_shots(&mut self) {
        self.toggle_pause = false;
        self.click_at = None;
        self.start_game = false;
        self.restart_game = false;
        self.quit = false;
    }

    /// Movement direction from held keys (unnormalized: diagonals move on
    /// both axes at full speed)
    pub fn move_axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.move_up {
            axis.y -= 1.0;
        }
        if self.move_down {
            axis.y += 1.0;
        }
        if self.move_left {
            axis.x -= 1.0;
        }
        if self.move_right {
            axis.x += 1.0;
        }
        axis
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    if input.quit {
        events.push(GameEvent::QuitRequested);
    }

    match state.phase {
        GamePhase::Menu => {
            if input.start_game {
                state.set_phase(GamePhase::Playing, events);
            }
            return;
        }
        GamePhase::GameOver => {
            if input.restart_game {
                state.reset_run();
                log::info!("Run restarted");
                events.push(GameEvent::Restarted);
                state.set_phase(GamePhase::Playing, events);
            }
            return;
        }
        GamePhase::Playing | GamePhase::Paused => {
            if input.toggle_pause {
                let to = if state.phase == GamePhase::Paused {
                    GamePhase::Playing
                } else {
                    GamePhase::Paused
                };
                state.set_phase(to, events);
            }
        }
    }

    // Frozen while paused: nothing below may touch state
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    update_player(state, input, dt);
    state.player.speed_boost.update(dt);
    state.player.damage_boost.update(dt);

    update_zombies(state, dt);

    for bullet in state.bullets.iter_mut().chain(state.zombie_bullets.iter_mut()) {
        advance_bullet(bullet, dt);
    }

    if resolve_combat(state, events) {
        state.set_phase(GamePhase::GameOver, events);
        return;
    }

    update_spawners(state, dt, events);
}

/// Rotate, move and fire the player from held intents
fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    if input.rotate_left {
        player.facing = crate::normalize_angle(player.facing - tuning.player_rotation_speed * dt);
    }
    if input.rotate_right {
        player.facing = crate::normalize_angle(player.facing + tuning.player_rotation_speed * dt);
    }

    let axis = input.move_axis();
    if axis != Vec2::ZERO {
        let mut speed = tuning.player_speed;
        if player.speed_boost.active {
            speed *= tuning.speed_boost_multiplier;
        }
        player.pos = resolve_player_move(&player.bounds(), axis * speed * dt, &state.obstacles, &state.world);
    }

    player.fire_cooldown = (player.fire_cooldown - dt).max(0.0);
    if input.fire && player.fire_cooldown <= 0.0 {
        player.fire_cooldown = tuning.player_fire_cooldown;
        let damage = if player.damage_boost.active {
            tuning.boosted_bullet_damage
        } else {
            tuning.bullet_damage
        };
        let size = tuning.bullet_size;
        let speed = tuning.bullet_speed;
        let origin = player.center() - Vec2::splat(size * 0.5);
        let dir = player.aim();
        let id = state.next_entity_id();
        state.bullets.push(Bullet {
            id,
            owner: Owner::Player,
            pos: origin,
            size,
            dir,
            speed,
            damage,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::{PowerUp, PowerUpKind, Zombie};
    use crate::sim::world::blocked_by_any;
    use crate::tuning::Tuning;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        let mut events = Vec::new();
        let start = TickInput {
            start_game: true,
            ..Default::default()
        };
        tick(&mut state, &start, SIM_DT, &mut events);
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    fn add_zombie(state: &mut GameState, pos: Vec2, health: u32) {
        let id = state.next_entity_id();
        state.zombies.push(Zombie {
            id,
            pos,
            size: 32.0,
            facing: 0.0,
            health,
            fire_countdown: 100.0,
        });
    }

    #[test]
    fn test_menu_to_playing() {
        let mut state = GameState::new(1, Tuning::default());
        let mut events = Vec::new();
        tick(&mut state, &TickInput::default(), SIM_DT, &mut events);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.time_ticks, 0);

        let start = TickInput {
            start_game: true,
            ..Default::default()
        };
        tick(&mut state, &start, SIM_DT, &mut events);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(
            events,
            vec![GameEvent::PhaseChanged {
                from: GamePhase::Menu,
                to: GamePhase::Playing
            }]
        );
    }

    #[test]
    fn test_tick_pause() {
        let mut state = playing_state(12345);
        let mut events = Vec::new();
        let pause = TickInput {
            toggle_pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, SIM_DT, &mut events);
        assert_eq!(state.phase, GamePhase::Paused);
        tick(&mut state, &pause, SIM_DT, &mut events);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut state = playing_state(77);
        let mut events = Vec::new();
        // Populate the world a bit
        let held = TickInput {
            move_right: true,
            fire: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut state, &held, SIM_DT, &mut events);
        }
        let pause = TickInput {
            toggle_pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, SIM_DT, &mut events);
        assert_eq!(state.phase, GamePhase::Paused);

        let frozen = serde_json::to_string(&state).unwrap();
        let mut rng_probe = state.rng.clone();
        for _ in 0..500 {
            tick(&mut state, &held, SIM_DT, &mut events);
        }
        assert_eq!(serde_json::to_string(&state).unwrap(), frozen);
        // RNG untouched as well
        use rand::RngCore;
        assert_eq!(state.rng.next_u32(), rng_probe.next_u32());
    }

    #[test]
    fn test_player_fires_along_facing() {
        let mut state = playing_state(1);
        let mut events = Vec::new();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, SIM_DT, &mut events);
        assert_eq!(state.bullets.len(), 1);
        let bullet = &state.bullets[0];
        assert_eq!(bullet.owner, Owner::Player);
        // Facing 0 shoots up the screen
        assert!(bullet.dir.y < -0.99);

        // Cooldown prevents a second shot next tick
        tick(&mut state, &fire, SIM_DT, &mut events);
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_damage_boost_bullets() {
        let mut state = playing_state(1);
        state.player.damage_boost.start(5.0);
        let mut events = Vec::new();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, SIM_DT, &mut events);
        assert_eq!(state.bullets[0].damage, state.tuning.boosted_bullet_damage);
    }

    #[test]
    fn test_speed_boost_moves_faster() {
        let mut normal = playing_state(1);
        let mut boosted = playing_state(1);
        boosted.player.speed_boost.start(5.0);
        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        let mut events = Vec::new();
        let start = normal.player.pos.x;
        tick(&mut normal, &right, SIM_DT, &mut events);
        tick(&mut boosted, &right, SIM_DT, &mut events);
        let plain = normal.player.pos.x - start;
        let fast = boosted.player.pos.x - start;
        assert!((fast / plain - boosted.tuning.speed_boost_multiplier).abs() < 1e-3);
    }

    #[test]
    fn test_boost_expires_during_play() {
        let mut state = playing_state(1);
        state.player.speed_boost.start(state.tuning.boost_duration);
        let mut events = Vec::new();
        let ticks = (state.tuning.boost_duration / SIM_DT) as usize + 2;
        for _ in 0..ticks {
            tick(&mut state, &TickInput::default(), SIM_DT, &mut events);
        }
        assert!(!state.player.speed_boost.active);
    }

    #[test]
    fn test_player_never_enters_obstacle() {
        let mut state = playing_state(9);
        // Park the player just left of the first pillar and push into it
        let pillar = state.obstacles[0].bounds;
        state.player.pos = Vec2::new(pillar.min.x - state.player.size - 20.0, pillar.min.y + 10.0);
        let mut events = Vec::new();
        let inputs = [
            TickInput {
                move_right: true,
                ..Default::default()
            },
            TickInput {
                move_right: true,
                move_down: true,
                ..Default::default()
            },
            TickInput {
                move_down: true,
                ..Default::default()
            },
        ];
        for input in inputs.iter().cycle().take(900) {
            tick(&mut state, input, SIM_DT, &mut events);
            assert!(!blocked_by_any(&state.player.bounds(), &state.obstacles));
            if state.phase != GamePhase::Playing {
                break;
            }
        }
    }

    #[test]
    fn test_player_bullet_removed_when_leaving_world() {
        let mut state = playing_state(1);
        let mut events = Vec::new();
        let id = state.next_entity_id();
        state.bullets.push(Bullet {
            id,
            owner: Owner::Player,
            pos: Vec2::new(1999.0, 500.0),
            size: 8.0,
            dir: Vec2::X,
            speed: 600.0,
            damage: 1,
        });
        tick(&mut state, &TickInput::default(), SIM_DT, &mut events);
        assert!(state.bullets.iter().all(|b| b.id != id));
    }

    #[test]
    fn test_zombie_killed_increments_kills() {
        let mut state = playing_state(1);
        let mut events = Vec::new();
        // Zombie sits on the player's muzzle; one shot kills it
        let target = state.player.center() + Vec2::new(-16.0, -60.0);
        add_zombie(&mut state, target, 1);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut state, &fire, SIM_DT, &mut events);
            if state.kills > 0 {
                break;
            }
        }
        assert_eq!(state.kills, 1);
        assert!(state.zombies.is_empty());
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::ZombieKilled { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_lethal_hit_ends_run_same_tick() {
        let mut state = playing_state(1);
        let mut events = Vec::new();
        state.player.health = 1;
        state.kills = 3;
        let id = state.next_entity_id();
        let at = state.player.pos;
        state.zombie_bullets.push(Bullet {
            id,
            owner: Owner::Zombie,
            pos: at,
            size: 8.0,
            dir: Vec2::ZERO,
            speed: 0.0,
            damage: 1,
        });
        tick(&mut state, &TickInput::default(), SIM_DT, &mut events);
        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::PlayerDied { kills: 3 }));

        // Game over freezes the sim; further ticks are ignored
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), SIM_DT, &mut events);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = playing_state(1);
        let mut events = Vec::new();
        add_zombie(&mut state, Vec2::new(100.0, 100.0), 3);
        let id = state.next_entity_id();
        state.power_ups.push(PowerUp {
            id,
            kind: PowerUpKind::Heal,
            pos: Vec2::ZERO,
            size: 24.0,
        });
        state.kills = 9;
        state.player.health = 0;
        state.set_phase(GamePhase::GameOver, &mut events);

        let restart = TickInput {
            restart_game: true,
            ..Default::default()
        };
        tick(&mut state, &restart, SIM_DT, &mut events);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health, state.player.max_health);
        assert_eq!(state.player.center(), state.world.center());
        assert!(state.zombies.is_empty());
        assert!(state.bullets.is_empty());
        assert!(state.zombie_bullets.is_empty());
        assert!(state.power_ups.is_empty());
        assert_eq!(state.kills, 0);
        assert!(events.contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_quit_accepted_in_any_phase() {
        let mut state = GameState::new(1, Tuning::default());
        let mut events = Vec::new();
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &quit, SIM_DT, &mut events);
        assert_eq!(events, vec![GameEvent::QuitRequested]);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing_state(99999);
        let mut state2 = playing_state(99999);
        let mut events1 = Vec::new();
        let mut events2 = Vec::new();

        let inputs = [
            TickInput {
                move_left: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                rotate_right: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                move_up: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        // Long enough for several spawns and zombie volleys
        for input in inputs.iter().cycle().take(120 * 20) {
            tick(&mut state1, input, SIM_DT, &mut events1);
            tick(&mut state2, input, SIM_DT, &mut events2);
        }

        assert_eq!(events1, events2);
        assert_eq!(state1.zombies, state2.zombies);
        assert_eq!(state1.zombie_bullets, state2.zombie_bullets);
        assert_eq!(state1.player, state2.player);
    }
}
