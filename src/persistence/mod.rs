//! High score persistence
//!
//! The record is a single base-10 integer in a plain-text file. Absence is
//! not an error: it simply means nobody has scored yet.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default file name, relative to the working directory
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("high score record is not an integer: {0:?}")]
    Parse(String),
}

/// Where the high score lives between runs
pub trait HighScoreStore {
    /// Read the stored score; `Ok(None)` when nothing has been stored yet
    fn read(&self) -> Result<Option<u32>, StoreError>;

    /// Overwrite the stored score
    fn write(&mut self, score: u32) -> Result<(), StoreError>;

    /// Load with the documented fallback: absent or unreadable yields 0
    fn load_high_score(&self) -> u32 {
        match self.read() {
            Ok(score) => score.unwrap_or(0),
            Err(e) => {
                log::warn!("Treating high score as 0: {}", e);
                0
            }
        }
    }

    /// Best-effort save; failures are logged and otherwise ignored
    fn save_high_score(&mut self, score: u32) {
        if let Err(e) = self.write(score) {
            log::warn!("Could not save high score {}: {}", score, e);
        }
    }
}

/// Plain-text file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn read(&self) -> Result<Option<u32>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let trimmed = text.trim();
        trimmed
            .parse::<u32>()
            .map(Some)
            .map_err(|_| StoreError::Parse(trimmed.to_string()))
    }

    fn write(&mut self, score: u32) -> Result<(), StoreError> {
        std::fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// In-memory store, for tests and for running without a writable disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u32>,
    /// Number of successful writes
    pub writes: usize,
}

impl HighScoreStore for MemoryStore {
    fn read(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.value)
    }

    fn write(&mut self, score: u32) -> Result<(), StoreError> {
        self.value = Some(score);
        self.writes += 1;
        Ok(())
    }
}
