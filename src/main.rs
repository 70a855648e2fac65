//! Red Alert - headless entry point
//!
//! Builds a session from `tuning.json` / `settings.json` (defaults when
//! absent) and drives it with a simple autopilot until the run ends.
//! Set `RUST_LOG=debug` to follow the game.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use glam::Vec2;

use red_alert::audio::LogAudio;
use red_alert::consts::SIM_DT;
use red_alert::persistence::FileStore;
use red_alert::platform::FixedStep;
use red_alert::render::{LogRenderer, Renderer};
use red_alert::sim::{GamePhase, GameState, TickInput};
use red_alert::ui::{Control, ControlMap};
use red_alert::{Session, Settings, Tuning, direction_to_facing, normalize_angle};

/// Simulated frame time fed to the fixed-step driver
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this much simulated time
const MAX_SIM_SECONDS: f32 = 600.0;
/// Fire when the target is within this angle of the facing
const AIM_TOLERANCE: f32 = 0.08;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Red Alert (headless) starting...");

    let tuning = Tuning::load_or_default("tuning.json");
    let settings = Settings::load(Settings::FILE_NAME);
    let store = FileStore::new(settings.high_score_path.clone());
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the Unix epoch")?
        .as_nanos() as u64;

    let audio = LogAudio::new(&settings);
    let mut session = Session::with_audio(seed, tuning, settings, store, audio)
        .with_settings_path(Settings::FILE_NAME);
    let mut renderer = LogRenderer::default();
    let mut clock = FixedStep::default();
    let mut elapsed = 0.0;

    while session.is_running() {
        let mut input = autopilot(session.state(), session.controls());
        if elapsed >= MAX_SIM_SECONDS {
            input.quit = true;
        }

        for _ in 0..clock.advance(FRAME_DT) {
            session.tick(&input, SIM_DT);
            input.clear_one_shots();
        }
        renderer.render(&session.snapshot());
        elapsed += FRAME_DT;
    }

    match session.final_score() {
        Some(score) => log::info!(
            "Final score {} (high score {}) after {:.1}s",
            score.kills,
            score.high_score,
            elapsed
        ),
        None => log::info!("Stopped after {:.1}s, high score {}", elapsed, session.high_score()),
    }
    log::info!("Rendered {} frames", renderer.frames);
    Ok(())
}

/// Intents for the next frame: click through menus, turn towards the
/// nearest zombie and shoot, pick up power-ups on the way.
fn autopilot(state: &GameState, controls: &ControlMap) -> TickInput {
    let click = |control| TickInput {
        click_at: controls.center_of(state.phase, control),
        ..Default::default()
    };

    match state.phase {
        GamePhase::Menu => click(Control::Start),
        GamePhase::Paused => click(Control::Resume),
        GamePhase::GameOver => click(Control::Exit),
        GamePhase::Playing => {
            let player = &state.player;
            let here = player.center();
            let mut input = TickInput::default();

            let target = state
                .zombies
                .iter()
                .map(|z| z.center())
                .min_by(|a, b| a.distance_squared(here).total_cmp(&b.distance_squared(here)));
            if let Some(target) = target {
                let error = normalize_angle(direction_to_facing(target - here) - player.facing);
                input.rotate_left = error < -AIM_TOLERANCE;
                input.rotate_right = error > AIM_TOLERANCE;
                input.fire = error.abs() <= AIM_TOLERANCE * 2.0;
            }

            if let Some(pickup) = state.power_ups.first() {
                let to = pickup.bounds().center() - here;
                steer_towards(&mut input, to);
            }
            input
        }
    }
}

fn steer_towards(input: &mut TickInput, to: Vec2) {
    const DEADZONE: f32 = 4.0;
    input.move_left = to.x < -DEADZONE;
    input.move_right = to.x > DEADZONE;
    input.move_up = to.y < -DEADZONE;
    input.move_down = to.y > DEADZONE;
}
