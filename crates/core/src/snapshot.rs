//! Render-facing snapshot of the game state.
//!
//! The view layer consumes snapshots instead of the live state so that
//! rendering stays a pure function and the snapshot buffer can be reused
//! across frames without reallocating.

use crate::game_state::GameState;
use tui_snake_types::{Phase, Point};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub phase: Phase,
    /// Snake cells, head first.
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub high_score: u32,
    pub tick_interval_ms: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.phase = Phase::Idle;
        self.snake.clear();
        self.food = None;
        self.score = 0;
        self.high_score = 0;
        self.tick_interval_ms = 0;
    }

    /// Head cell, if the snapshot has been filled.
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            snake: Vec::new(),
            food: None,
            score: 0,
            high_score: 0,
            tick_interval_ms: 0,
        }
    }
}

impl GameState {
    /// Fill `out` with the current state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase();
        out.snake.clear();
        out.snake.extend(self.snake());
        out.food = self.food();
        out.score = self.score();
        out.high_score = self.high_score();
        out.tick_interval_ms = self.tick_interval_ms();
    }

    /// Convenience helper that allocates a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
