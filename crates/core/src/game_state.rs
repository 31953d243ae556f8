//! Game state module - the phase machine and per-tick update step
//!
//! This module owns the snake, the food, the score, and the pending
//! direction. It is pure and clock-free: the runner decides *when* a tick
//! happens; this module decides *what* a tick does. Domain events produced
//! by transitions are queued and drained by the runner with
//! [`GameState::take_events`].

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::scoring::{is_milestone, tick_interval_ms};
use tui_snake_types::{
    Direction, GameAction, GameEvent, Phase, Point, FOOD_SCORE, GRID_COUNT, INITIAL_SNAKE_LEN,
};

/// Bounded per-tick event batch.
///
/// A single tick emits at most four events (food, milestone, high score,
/// game over); `start` emits one. The runner drains after every tick.
pub type Events = ArrayVec<GameEvent, 8>;

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Snake body, head first. Insertion order is body order.
    snake: VecDeque<Point>,
    /// Direction committed at the last tick.
    direction: Direction,
    /// Most recent valid direction request; committed at the next tick.
    pending: Direction,
    food: Option<Point>,
    phase: Phase,
    score: u32,
    high_score: u32,
    /// Accumulated run time: the interval in force is added once per tick.
    elapsed_ms: u64,
    rng: SimpleRng,
    events: Events,
}

impl GameState {
    /// Create a new game in the Idle phase.
    ///
    /// `high_score` is the persisted value loaded at startup; the core
    /// compares against it and emits [`GameEvent::HighScore`] when beaten.
    /// The board is laid out immediately so the idle screen has something
    /// to show.
    pub fn new(seed: u32, high_score: u32) -> Self {
        let mut state = Self {
            snake: VecDeque::new(),
            direction: Direction::Right,
            pending: Direction::Right,
            food: None,
            phase: Phase::Idle,
            score: 0,
            high_score,
            elapsed_ms: 0,
            rng: SimpleRng::new(seed),
            events: Events::new(),
        };
        state.reset_run();
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn head(&self) -> Point {
        *self.snake.front().expect("snake is never empty")
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    /// Snake cells, head first.
    pub fn snake(&self) -> impl Iterator<Item = Point> + '_ {
        self.snake.iter().copied()
    }

    /// Accumulated run time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Current tick interval derived from the score.
    pub fn tick_interval_ms(&self) -> u64 {
        tick_interval_ms(self.score)
    }

    /// Drain all queued domain events.
    pub fn take_events(&mut self) -> Events {
        std::mem::take(&mut self.events)
    }

    /// Start (or restart) a run.
    ///
    /// Legal from every phase; from Over/Won this re-enters Running
    /// directly. Resets the snake to a centered 3-cell horizontal segment
    /// facing right, score to 0, and places fresh food.
    pub fn start(&mut self) {
        self.reset_run();
        self.phase = Phase::Running;
        self.emit(GameEvent::GameStart {
            high_score: self.high_score,
        });
    }

    /// Request a direction change for the next tick.
    ///
    /// While not Running this acts as an implicit start; the turn itself is
    /// discarded and the run begins facing right. A request that exactly
    /// reverses the committed direction is silently dropped. Repeated
    /// requests within one tick window: last valid write wins.
    pub fn request_turn(&mut self, dir: Direction) {
        if self.phase != Phase::Running {
            self.start();
            return;
        }
        if self.direction.is_opposite(dir) {
            return;
        }
        self.pending = dir;
    }

    /// Apply an input-layer action.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Turn(dir) => self.request_turn(dir),
            GameAction::Start => {
                if self.phase != Phase::Running {
                    self.start();
                }
            }
        }
    }

    /// Execute one update step. Returns `true` if the state advanced.
    ///
    /// No-op unless Running. The sequence is fixed: commit the pending
    /// direction, move, boundary check, self-collision check, grow or trim,
    /// then the high-score check.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        // Account run time using the interval that scheduled this tick,
        // before any score change shortens it.
        self.elapsed_ms += self.tick_interval_ms();

        self.direction = self.pending;
        let new_head = self.head().step(self.direction);

        if !new_head.in_bounds() || self.snake.contains(&new_head) {
            self.end_run(Phase::Over);
            return true;
        }

        self.snake.push_front(new_head);

        let mut won = false;
        if self.food == Some(new_head) {
            self.score += FOOD_SCORE;
            self.emit(GameEvent::FoodEaten {
                score: self.score,
                snake_length: self.snake.len() as u32,
            });
            if is_milestone(self.score) {
                self.emit(GameEvent::ScoreMilestone {
                    milestone: self.score,
                });
            }

            if self.board_full() {
                // No free cell remains; placement would never terminate.
                self.food = None;
                won = true;
            } else {
                self.place_food();
            }
            // Tail kept: the snake grows by one.
        } else {
            self.snake.pop_back();
        }

        if self.score > self.high_score {
            let previous = self.high_score;
            self.high_score = self.score;
            self.emit(GameEvent::HighScore {
                new_high_score: self.high_score,
                previous_high_score: previous,
            });
        }

        if won {
            self.end_run(Phase::Won);
        }

        true
    }

    /// Lay out a fresh run without changing phase or emitting events.
    fn reset_run(&mut self) {
        let center = GRID_COUNT / 2;
        self.snake.clear();
        for i in 0..INITIAL_SNAKE_LEN as i8 {
            self.snake.push_back(Point::new(center - i, center));
        }
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.elapsed_ms = 0;
        self.place_food();
    }

    /// Enter a terminal phase and emit the end-of-run metrics.
    fn end_run(&mut self, phase: Phase) {
        debug_assert!(phase.is_terminal());
        self.phase = phase;
        self.emit(GameEvent::GameOver {
            final_score: self.score,
            high_score: self.high_score,
            snake_length: self.snake.len() as u32,
            game_duration_ms: self.elapsed_ms,
            is_new_high_score: self.score == self.high_score && self.score > 0,
        });
    }

    /// Place food uniformly at random on a cell not occupied by the snake.
    ///
    /// Rejection sampling; callers guarantee at least one free cell, so
    /// this terminates.
    fn place_food(&mut self) {
        debug_assert!(!self.board_full());
        loop {
            let p = self.rng.next_point();
            if !self.snake.contains(&p) {
                self.food = Some(p);
                return;
            }
        }
    }

    fn board_full(&self) -> bool {
        self.snake.len() >= (GRID_COUNT as usize) * (GRID_COUNT as usize)
    }

    fn emit(&mut self, event: GameEvent) {
        // Events are fire-and-forget; on overflow the oldest consumer
        // semantics still hold and we drop the newest.
        let _ = self.events.try_push(event);
    }

    #[cfg(test)]
    pub fn set_snake(&mut self, cells: &[Point], direction: Direction) {
        self.snake = cells.iter().copied().collect();
        self.direction = direction;
        self.pending = direction;
    }

    #[cfg(test)]
    pub fn set_food(&mut self, food: Point) {
        self.food = Some(food);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
