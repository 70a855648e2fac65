//! Audio cues
//!
//! The core never touches a sound device. It emits cues and an `AudioSink`
//! decides what to do with them.

use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase};

/// Audio notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Start (or resume) the looping background track
    MusicOn,
    /// Stop the background track
    MusicOff,
    /// Simulation frozen by the pause toggle
    Paused,
    /// Simulation unfrozen by the pause toggle
    Resumed,
    /// Any other phase change
    Phase(GamePhase),
}

impl AudioCue {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match *event {
            GameEvent::PhaseChanged {
                from: GamePhase::Playing,
                to: GamePhase::Paused,
            } => Some(AudioCue::Paused),
            GameEvent::PhaseChanged {
                from: GamePhase::Paused,
                to: GamePhase::Playing,
            } => Some(AudioCue::Resumed),
            GameEvent::PhaseChanged { to, .. } => Some(AudioCue::Phase(to)),
            _ => None,
        }
    }
}

/// Receiver for audio cues
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Records cues in order
impl AudioSink for Vec<AudioCue> {
    fn play(&mut self, cue: AudioCue) {
        self.push(cue);
    }
}

/// Headless sink that tracks the background track and logs notifications
#[derive(Debug, Clone)]
pub struct LogAudio {
    music_volume: f32,
    music_playing: bool,
    paused: bool,
}

impl LogAudio {
    pub fn new(settings: &Settings) -> Self {
        Self {
            // On/off follows the MusicOn/MusicOff cues, not `sound_on`
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            music_playing: false,
            paused: false,
        }
    }

    /// Whether the track would be audible right now
    pub fn music_audible(&self) -> bool {
        self.music_playing && !self.paused && self.music_volume > 0.0
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::MusicOn => {
                if !self.music_playing {
                    log::debug!("Music on (volume {:.2})", self.music_volume);
                }
                self.music_playing = true;
            }
            AudioCue::MusicOff => {
                if self.music_playing {
                    log::debug!("Music off");
                }
                self.music_playing = false;
            }
            AudioCue::Paused => self.paused = true,
            AudioCue::Resumed => self.paused = false,
            AudioCue::Phase(phase) => {
                self.paused = false;
                log::trace!("Audio phase {:?}", phase);
            }
        }
    }
}
