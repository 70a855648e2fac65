//! Game state and core simulation types
//!
//! `GameState` is the entity store: it exclusively owns every per-run object.
//! Obstacles are built once from tuning and never mutated.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::world::{Obstacle, WorldBounds};
use crate::facing_to_direction;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu, simulation idle
    Menu,
    /// Active gameplay
    Playing,
    /// Simulation frozen; only phase intents are processed
    Paused,
    /// Run ended, waiting for restart
    GameOver,
}

/// A timed boost: active while `remaining > 0`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Boost {
    pub active: bool,
    /// Seconds left before the boost expires
    pub remaining: f32,
}

impl Boost {
    /// Turn the boost on and restart its timer
    pub fn start(&mut self, duration: f32) {
        self.active = true;
        self.remaining = duration;
    }

    /// Count down; clears the flag once the duration has elapsed
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.active = false;
            self.remaining = 0.0;
        }
    }
}

/// The player's unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    /// Radians, 0 = facing up
    pub facing: f32,
    pub health: u32,
    pub max_health: u32,
    pub speed_boost: Boost,
    pub damage_boost: Boost,
    /// Seconds until the next shot is allowed
    pub fire_cooldown: f32,
}

impl Player {
    pub fn new(world: &WorldBounds, tuning: &Tuning) -> Self {
        let mut player = Self {
            pos: Vec2::ZERO,
            size: tuning.player_size,
            facing: 0.0,
            health: tuning.player_max_health,
            max_health: tuning.player_max_health,
            speed_boost: Boost::default(),
            damage_boost: Boost::default(),
            fire_cooldown: 0.0,
        };
        player.reset(world);
        player
    }

    /// Restore a fresh-run player in place
    pub fn reset(&mut self, world: &WorldBounds) {
        self.health = self.max_health;
        self.pos = world.center() - Vec2::splat(self.size * 0.5);
        self.facing = 0.0;
        self.speed_boost = Boost::default();
        self.damage_boost = Boost::default();
        self.fire_cooldown = 0.0;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Unit vector the player's gun points along
    pub fn aim(&self) -> Vec2 {
        facing_to_direction(self.facing)
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Take damage, never dropping below zero
    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }
}

/// An adversary that chases and shoots at the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    pub facing: f32,
    pub health: u32,
    /// Seconds until this zombie fires again
    pub fire_countdown: f32,
}

impl Zombie {
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Zombie,
}

/// A straight-flying projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub owner: Owner,
    pub pos: Vec2,
    pub size: f32,
    /// Unit direction (may be zero for a degenerate shot)
    pub dir: Vec2,
    pub speed: f32,
    pub damage: u32,
}

impl Bullet {
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Heal,
    SpeedBoost,
    DamageBoost,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Heal,
        PowerUpKind::SpeedBoost,
        PowerUpKind::DamageBoost,
    ];
}

/// A pickup lying in the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub size: f32,
}

impl PowerUp {
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// Notable things that happened during a tick, for the session and front end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    ZombieSpawned { id: u32 },
    ZombieKilled { id: u32, kills: u32 },
    PlayerHit { health: u32 },
    /// Health reached zero; emitted exactly once per run
    PlayerDied { kills: u32 },
    PowerUpSpawned { kind: PowerUpKind },
    PowerUpCollected { kind: PowerUpKind },
    Restarted,
    QuitRequested,
}

/// Elapsed-time counters for the spawner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimers {
    pub zombie: f32,
    pub power_up: f32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state (deterministic)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG shared by spawner and zombie fire intervals
    #[serde(skip, default = "default_rng")]
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub world: WorldBounds,
    pub obstacles: Vec<Obstacle>,
    pub phase: GamePhase,
    pub player: Player,
    /// Active zombies (ascending id)
    pub zombies: Vec<Zombie>,
    /// Player bullets (ascending id)
    pub bullets: Vec<Bullet>,
    /// Zombie bullets (ascending id)
    pub zombie_bullets: Vec<Bullet>,
    pub power_ups: Vec<PowerUp>,
    /// Kill count for the current run
    pub kills: u32,
    pub spawn_timers: SpawnTimers,
    /// Simulation tick counter (only advances while playing)
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Create a new game state in the menu phase
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let world = tuning.world();
        let obstacles = tuning.build_obstacles();
        let player = Player::new(&world, &tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            world,
            obstacles,
            phase: GamePhase::Menu,
            player,
            zombies: Vec::new(),
            bullets: Vec::new(),
            zombie_bullets: Vec::new(),
            power_ups: Vec::new(),
            kills: 0,
            spawn_timers: SpawnTimers::default(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Full per-run reset: score, transient entities, player and timers.
    ///
    /// The player is reset in place; the RNG keeps running so a restarted
    /// run doesn't replay the previous one.
    pub fn reset_run(&mut self) {
        self.kills = 0;
        self.zombies.clear();
        self.bullets.clear();
        self.zombie_bullets.clear();
        self.power_ups.clear();
        self.player.reset(&self.world);
        self.spawn_timers = SpawnTimers::default();
    }

    /// Change phase, recording the transition
    pub fn set_phase(&mut self, to: GamePhase, events: &mut Vec<GameEvent>) {
        let from = self.phase;
        if from != to {
            self.phase = to;
            log::info!("Phase {:?} -> {:?}", from, to);
            events.push(GameEvent::PhaseChanged { from, to });
        }
    }
}
