//! High score tracking
//!
//! The check-and-save sequence runs after every kill and again when the run
//! ends, so the stored record can improve mid-run.

use serde::{Deserialize, Serialize};

use crate::persistence::HighScoreStore;

/// The best score known to this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    /// Current best (mirrors the store after every check)
    pub best: u32,
    /// Best at the start of the current run, for "new record" display
    pub run_start_best: u32,
}

impl HighScore {
    /// Load the stored record
    pub fn load(store: &impl HighScoreStore) -> Self {
        let best = store.load_high_score();
        log::info!("High score: {}", best);
        Self {
            best,
            run_start_best: best,
        }
    }

    /// Compare `kills` against the stored record and save if beaten.
    ///
    /// Returns true when `kills` set a new record.
    ///
    /// `best` never decreases, even when the store lost a write.
    pub fn check(&mut self, kills: u32, store: &mut impl HighScoreStore) -> bool {
        let known = self.best.max(store.load_high_score());
        if kills > known {
            self.best = kills;
            store.save_high_score(kills);
            log::info!("New high score: {}", kills);
            true
        } else {
            self.best = known;
            false
        }
    }

    /// Mark the start of a new run
    pub fn begin_run(&mut self) {
        self.run_start_best = self.best;
    }

    /// Whether `kills` beat the record held when this run started
    pub fn is_new_record(&self, kills: u32) -> bool {
        kills > self.run_start_best
    }
}
