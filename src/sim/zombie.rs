//! Zombie behaviour: pursuit with obstacle sliding, and timed fire
//!
//! Zombies don't pathfind. Each tick they head straight for the player and
//! fall back to axis-aligned sliding when an obstacle is in the way. Since
//! the player keeps moving, a blocked zombie gets a new heading next tick.

use glam::Vec2;
use rand::Rng;

use super::collision::{StepResult, resolve_zombie_step};
use super::state::{Bullet, GameState, Owner, Zombie};
use super::world::Obstacle;
use crate::direction_to_facing;
use crate::tuning::Tuning;

/// Draw a fresh fire interval in `[min, max]` seconds
pub fn roll_fire_interval(rng: &mut impl Rng, tuning: &Tuning) -> f32 {
    let (min, max) = (tuning.zombie_fire_min_interval, tuning.zombie_fire_max_interval);
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}

/// Turn toward `target` and take one step. Returns `None` when the zombie
/// sits exactly on the target (no heading, no movement).
pub fn steer(zombie: &mut Zombie, target: Vec2, step_len: f32, obstacles: &[Obstacle]) -> Option<StepResult> {
    let to_target = target - zombie.center();
    if to_target.length_squared() == 0.0 {
        return None;
    }
    let dir = to_target.normalize();
    zombie.facing = direction_to_facing(dir);

    let (pos, result) = resolve_zombie_step(&zombie.bounds(), dir * step_len, obstacles);
    zombie.pos = pos;
    Some(result)
}

/// Count down the fire timer; when it runs out, shoot at `target` and
/// re-roll the interval.
pub fn try_fire(zombie: &mut Zombie, target: Vec2, dt: f32, rng: &mut impl Rng, tuning: &Tuning) -> Option<Vec2> {
    zombie.fire_countdown -= dt;
    if zombie.fire_countdown > 0.0 {
        return None;
    }
    zombie.fire_countdown = roll_fire_interval(rng, tuning);
    // Aim is taken now, not remembered from an earlier tick
    Some((target - zombie.center()).normalize_or_zero())
}

/// Spawn a zombie at `pos` with a freshly rolled fire countdown
pub fn spawn_zombie(state: &mut GameState, pos: Vec2) -> u32 {
    let id = state.next_entity_id();
    let fire_countdown = roll_fire_interval(&mut state.rng, &state.tuning);
    state.zombies.push(Zombie {
        id,
        pos,
        size: state.tuning.zombie_size,
        facing: 0.0,
        health: state.tuning.zombie_health,
        fire_countdown,
    });
    id
}

/// Run every zombie for one tick: steer toward the player, then maybe fire.
pub fn update_zombies(state: &mut GameState, dt: f32) {
    let target = state.player.center();
    let step_len = state.tuning.zombie_speed * dt;
    let bullet_size = state.tuning.bullet_size;
    let bullet_speed = state.tuning.zombie_bullet_speed;

    let mut shots: Vec<(Vec2, Vec2)> = Vec::new();
    for zombie in state.zombies.iter_mut() {
        steer(zombie, target, step_len, &state.obstacles);
        if let Some(dir) = try_fire(zombie, target, dt, &mut state.rng, &state.tuning) {
            shots.push((zombie.center(), dir));
        }
    }

    for (origin, dir) in shots {
        let id = state.next_entity_id();
        state.zombie_bullets.push(Bullet {
            id,
            owner: Owner::Zombie,
            pos: origin - Vec2::splat(bullet_size * 0.5),
            size: bullet_size,
            dir,
            speed: bullet_speed,
            damage: 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn zombie_at(pos: Vec2) -> Zombie {
        Zombie {
            id: 1,
            pos,
            size: 32.0,
            facing: 0.0,
            health: 3,
            fire_countdown: 10.0,
        }
    }

    #[test]
    fn test_steer_moves_toward_target() {
        let mut z = zombie_at(Vec2::new(0.0, 0.0));
        let result = steer(&mut z, Vec2::new(116.0, 16.0), 10.0, &[]);
        assert_eq!(result, Some(StepResult::Full));
        assert!((z.pos.x - 10.0).abs() < 1e-4);
        assert!(z.pos.y.abs() < 1e-4);
        // Facing right is +90° in the sprite-up convention
        assert!((z.facing - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn test_steer_on_target_is_noop() {
        let mut z = zombie_at(Vec2::new(50.0, 50.0));
        let before = z.clone();
        let target = z.center();
        assert_eq!(steer(&mut z, target, 10.0, &[]), None);
        assert_eq!(z, before);
    }

    #[test]
    fn test_fire_interval_within_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let t = roll_fire_interval(&mut rng, &tuning);
            assert!((tuning.zombie_fire_min_interval..=tuning.zombie_fire_max_interval).contains(&t));
        }
    }

    #[test]
    fn test_fire_waits_for_countdown() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut z = zombie_at(Vec2::ZERO);
        z.fire_countdown = 0.5;

        assert!(try_fire(&mut z, Vec2::new(100.0, 16.0), 0.25, &mut rng, &tuning).is_none());
        let dir = try_fire(&mut z, Vec2::new(100.0, 16.0), 0.25, &mut rng, &tuning).unwrap();
        assert!((dir - Vec2::X).length() < 1e-4);
        assert!(z.fire_countdown >= tuning.zombie_fire_min_interval);
    }

    #[test]
    fn test_update_zombies_spawns_aimed_bullet() {
        let mut state = GameState::new(3, Tuning::default());
        state.obstacles.clear();
        let player_center = state.player.center();
        let id = spawn_zombie(&mut state, player_center + Vec2::new(300.0, -16.0));
        state.zombies[0].fire_countdown = 0.0;
        let start = state.zombies[0].center();

        update_zombies(&mut state, crate::consts::SIM_DT);

        assert_eq!(state.zombie_bullets.len(), 1);
        let bullet = &state.zombie_bullets[0];
        assert_eq!(bullet.owner, Owner::Zombie);
        assert!(bullet.dir.x < -0.99, "should aim back at the player: {:?}", bullet.dir);
        assert!(bullet.id > id);
        // Zombie stepped toward the player
        assert!(state.zombies[0].center().x < start.x);
    }
}
