//! High-score persistence.
//!
//! The store holds a single number. A missing, unreadable, or garbled
//! store reads as zero; a failed save is logged and swallowed. Persistence
//! problems must never interrupt play.

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_FILE_NAME: &str = ".snake_high_score";

/// Persistent storage for the best score.
pub trait HighScoreStore {
    /// Load the stored high score, or 0 when nothing valid is stored.
    fn load(&self) -> u32;

    /// Persist a new high score.
    fn save(&self, score: u32);
}

/// File-backed store: the score as decimal text in a dotfile.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user's home directory, falling back to the current
    /// directory when `HOME` is unset.
    pub fn in_home_dir() -> Self {
        let base = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(DEFAULT_FILE_NAME))
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => text.trim().parse().unwrap_or(0),
            Err(_) => 0,
        }
    }

    fn save(&self, score: u32) {
        if let Err(err) = fs::write(&self.path, score.to_string()) {
            log::warn!("failed to save high score to {}: {err}", self.path.display());
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    score: Cell<u32>,
}

impl MemoryStore {
    pub fn new(score: u32) -> Self {
        Self {
            score: Cell::new(score),
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.score.get()
    }

    fn save(&self, score: u32) {
        self.score.set(score);
    }
}
