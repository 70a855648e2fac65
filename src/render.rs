//! Render snapshot
//!
//! Read-only view of the simulation handed to whatever draws the frame.
//! Built once per frame after the sim has finished its substeps.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState, Owner, PowerUpKind};

/// What to draw for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Player,
    Zombie,
    Bullet,
    ZombieBullet,
    PowerUp(PowerUpKind),
    Obstacle,
}

/// One drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub kind: EntityKind,
    /// Top-left corner in world units
    pub pos: Vec2,
    pub size: Vec2,
    /// Facing in radians, 0 = up the screen
    pub facing: f32,
}

/// Values shown on the HUD and overlay screens
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hud {
    pub phase: GamePhase,
    pub health: u32,
    pub max_health: u32,
    pub kills: u32,
    pub high_score: u32,
    pub speed_boost: bool,
    pub damage_boost: bool,
}

/// Everything the renderer may look at for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Obstacles first, player last, so draw order can follow the list
    pub sprites: Vec<Sprite>,
    pub hud: Hud,
    /// View follows the player
    pub view_center: Vec2,
    pub world_size: Vec2,
}

impl Snapshot {
    pub fn capture(state: &GameState, high_score: u32) -> Self {
        let mut sprites = Vec::with_capacity(
            state.obstacles.len()
                + state.power_ups.len()
                + state.zombies.len()
                + state.bullets.len()
                + state.zombie_bullets.len()
                + 1,
        );

        sprites.extend(state.obstacles.iter().map(|o| Sprite {
            kind: EntityKind::Obstacle,
            pos: o.bounds.min,
            size: o.bounds.size,
            facing: 0.0,
        }));
        sprites.extend(state.power_ups.iter().map(|p| Sprite {
            kind: EntityKind::PowerUp(p.kind),
            pos: p.pos,
            size: Vec2::splat(p.size),
            facing: 0.0,
        }));
        sprites.extend(state.zombies.iter().map(|z| Sprite {
            kind: EntityKind::Zombie,
            pos: z.pos,
            size: Vec2::splat(z.size),
            facing: z.facing,
        }));
        sprites.extend(
            state
                .bullets
                .iter()
                .chain(state.zombie_bullets.iter())
                .map(|b| Sprite {
                    kind: match b.owner {
                        Owner::Player => EntityKind::Bullet,
                        Owner::Zombie => EntityKind::ZombieBullet,
                    },
                    pos: b.pos,
                    size: Vec2::splat(b.size),
                    facing: crate::direction_to_facing(b.dir),
                }),
        );

        let player = &state.player;
        sprites.push(Sprite {
            kind: EntityKind::Player,
            pos: player.pos,
            size: Vec2::splat(player.size),
            facing: player.facing,
        });

        Self {
            sprites,
            hud: Hud {
                phase: state.phase,
                health: player.health,
                max_health: player.max_health,
                kills: state.kills,
                high_score,
                speed_boost: player.speed_boost.active,
                damage_boost: player.damage_boost.active,
            },
            view_center: player.center(),
            world_size: Vec2::new(state.world.width, state.world.height),
        }
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.sprites.iter().filter(|s| s.kind == kind).count()
    }
}

/// Draws a snapshot
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Headless renderer: logs the HUD whenever it changes
#[derive(Debug, Default)]
pub struct LogRenderer {
    last: Option<Hud>,
    pub frames: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frames += 1;
        if self.last != Some(snapshot.hud) {
            let hud = &snapshot.hud;
            log::debug!(
                "[{:?}] health {}/{} kills {} best {} ({} sprites)",
                hud.phase,
                hud.health,
                hud.max_health,
                hud.kills,
                hud.high_score,
                snapshot.sprites.len()
            );
            self.last = Some(snapshot.hud);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bullet, PowerUp, Zombie};
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_lists_every_entity() {
        let mut state = GameState::new(3, Tuning::default());
        let id = state.next_entity_id();
        state.zombies.push(Zombie {
            id,
            pos: Vec2::new(10.0, 10.0),
            size: 32.0,
            facing: 1.0,
            health: 3,
            fire_countdown: 2.0,
        });
        let id = state.next_entity_id();
        state.zombie_bullets.push(Bullet {
            id,
            owner: Owner::Zombie,
            pos: Vec2::new(50.0, 50.0),
            size: 8.0,
            dir: Vec2::X,
            speed: 300.0,
            damage: 1,
        });
        let id = state.next_entity_id();
        state.power_ups.push(PowerUp {
            id,
            kind: PowerUpKind::SpeedBoost,
            pos: Vec2::new(90.0, 90.0),
            size: 24.0,
        });
        state.kills = 4;

        let snapshot = Snapshot::capture(&state, 11);
        assert_eq!(snapshot.count(EntityKind::Obstacle), state.obstacles.len());
        assert_eq!(snapshot.count(EntityKind::Zombie), 1);
        assert_eq!(snapshot.count(EntityKind::ZombieBullet), 1);
        assert_eq!(snapshot.count(EntityKind::PowerUp(PowerUpKind::SpeedBoost)), 1);
        assert_eq!(
            snapshot.sprites.last().map(|s| s.kind),
            Some(EntityKind::Player)
        );
        assert_eq!(snapshot.hud.kills, 4);
        assert_eq!(snapshot.hud.high_score, 11);
        assert_eq!(snapshot.hud.phase, GamePhase::Menu);
        assert_eq!(snapshot.view_center, state.player.center());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(3, Tuning::default());
        let json = serde_json::to_string(&Snapshot::capture(&state, 0)).unwrap();
        assert!(json.contains("\"Player\""));
    }
}
