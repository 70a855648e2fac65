//! Game session
//!
//! Owns the simulation together with its collaborators and reacts to the
//! events each tick produces: high score checks, the game-over summary,
//! audio cues and the quit signal.

use std::path::PathBuf;

use glam::Vec2;

use crate::audio::{AudioCue, AudioSink, NullAudio};
use crate::highscores::HighScore;
use crate::persistence::HighScoreStore;
use crate::render::Snapshot;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui::{Control, ControlMap};

/// Shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub kills: u32,
    /// High score after this run was checked
    pub high_score: u32,
    /// This run beat the record held when it started
    pub new_record: bool,
}

pub struct Session<S: HighScoreStore, A: AudioSink = NullAudio> {
    state: GameState,
    store: S,
    high_score: HighScore,
    settings: Settings,
    settings_path: Option<PathBuf>,
    audio: A,
    controls: ControlMap,
    final_score: Option<FinalScore>,
    /// Events produced by the most recent tick
    events: Vec<GameEvent>,
    running: bool,
}

impl<S: HighScoreStore> Session<S> {
    /// Session without audio, using the default control layout
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Self {
        Self::with_audio(seed, tuning, Settings::default(), store, NullAudio)
    }
}

impl<S: HighScoreStore, A: AudioSink> Session<S, A> {
    pub fn with_audio(seed: u64, tuning: Tuning, settings: Settings, store: S, mut audio: A) -> Self {
        let high_score = HighScore::load(&store);
        if settings.sound_on {
            audio.play(AudioCue::MusicOn);
        }
        log::info!("Session created (seed {})", seed);
        Self {
            state: GameState::new(seed, tuning),
            store,
            high_score,
            settings,
            settings_path: None,
            audio,
            controls: ControlMap::default_layout(),
            final_score: None,
            events: Vec::new(),
            running: true,
        }
    }

    /// Replace the clickable control layout
    pub fn with_controls(mut self, controls: ControlMap) -> Self {
        self.controls = controls;
        self
    }

    /// Persist settings here whenever they change
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    /// Advance one fixed step and handle whatever it produced.
    ///
    /// Returns the events of this step.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> &[GameEvent] {
        self.events.clear();
        if !self.running {
            return &self.events;
        }

        let resolved;
        let input = match input.click_at {
            Some(point) => {
                resolved = self.resolve_click(input, point);
                &resolved
            }
            None => input,
        };

        tick(&mut self.state, input, dt, &mut self.events);

        for event in &self.events {
            match *event {
                GameEvent::ZombieKilled { kills, .. } => {
                    self.high_score.check(kills, &mut self.store);
                }
                GameEvent::PlayerDied { kills } => {
                    self.high_score.check(kills, &mut self.store);
                    let summary = FinalScore {
                        kills,
                        high_score: self.high_score.best,
                        new_record: self.high_score.is_new_record(kills),
                    };
                    log::info!(
                        "Game over: {} kills (high score {}{})",
                        summary.kills,
                        summary.high_score,
                        if summary.new_record { ", new record" } else { "" }
                    );
                    self.final_score = Some(summary);
                }
                GameEvent::Restarted => {
                    self.final_score = None;
                }
                GameEvent::PhaseChanged { from, to } => {
                    if to == GamePhase::Playing && from != GamePhase::Paused {
                        self.high_score.begin_run();
                    }
                }
                GameEvent::QuitRequested => {
                    log::info!("Quit requested");
                    self.running = false;
                }
                _ => {}
            }
            if let Some(cue) = AudioCue::for_event(event) {
                self.audio.play(cue);
            }
        }

        &self.events
    }

    /// Turn a click into the intent of the control under it
    fn resolve_click(&mut self, input: &TickInput, point: Vec2) -> TickInput {
        let mut input = input.clone();
        input.click_at = None;
        match self.controls.hit(self.state.phase, point) {
            Some(Control::Start) => input.start_game = true,
            Some(Control::Resume) => input.toggle_pause = true,
            Some(Control::Restart) => input.restart_game = true,
            Some(Control::Exit) => input.quit = true,
            Some(Control::Sound) => self.toggle_sound(),
            None => {}
        }
        input
    }

    /// Flip background music on or off and persist the choice
    pub fn toggle_sound(&mut self) {
        self.settings.sound_on = !self.settings.sound_on;
        self.audio.play(if self.settings.sound_on {
            AudioCue::MusicOn
        } else {
            AudioCue::MusicOff
        });
        log::info!("Sound {}", if self.settings.sound_on { "on" } else { "off" });
        if let Some(path) = &self.settings_path {
            self.settings.save(path);
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.high_score.best)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best
    }

    /// Summary of the last finished run, until the next restart
    pub fn final_score(&self) -> Option<FinalScore> {
        self.final_score
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn controls(&self) -> &ControlMap {
        &self.controls
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// False once a quit intent has been accepted
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
