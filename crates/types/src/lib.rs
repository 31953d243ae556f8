//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, rendering, analytics mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a square lattice of `GRID_COUNT` x `GRID_COUNT` cells
//! (25 x 25, matching the original 500px canvas at 20px per cell).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 150 | Tick interval at score 0 |
//! | `MIN_SPEED_MS` | 50 | Fastest allowed tick interval |
//! | `SPEED_DECREASE_MS` | 3 | Interval reduction per 10 points |
//!
//! The tick interval is recomputed from the score after every food pickup:
//! `max(INITIAL_SPEED_MS - (score / 10) * SPEED_DECREASE_MS, MIN_SPEED_MS)`.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Point, GRID_COUNT};
//!
//! let head = Point::new(GRID_COUNT / 2, GRID_COUNT / 2);
//! let next = head.step(Direction::Right);
//! assert_eq!(next, Point::new(head.x + 1, head.y));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert_eq!(GameAction::from_str("up"), Some(GameAction::Turn(Direction::Up)));
//! ```

/// Grid side length in cells (25 x 25 playfield).
pub const GRID_COUNT: i8 = 25;

/// Tick interval at score 0 (150ms).
pub const INITIAL_SPEED_MS: u64 = 150;

/// Fastest allowed tick interval (50ms).
pub const MIN_SPEED_MS: u64 = 50;

/// Interval reduction per 10 points of score (3ms).
pub const SPEED_DECREASE_MS: u64 = 3;

/// Points awarded per food eaten.
pub const FOOD_SCORE: u32 = 10;

/// Score multiples at which a milestone analytics event fires.
pub const MILESTONE_STEP: u32 = 50;

/// Snake length at the start of every run.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// A cell position on the grid.
///
/// Coordinates are signed so that one-past-the-edge positions can be
/// represented during the boundary check; a `Point` inside the grid always
/// satisfies `0 <= x,y < GRID_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether this point lies inside the grid.
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_COUNT && self.y >= 0 && self.y < GRID_COUNT
    }
}

/// One of the four movement directions.
///
/// `y` grows downward, matching both terminal rows and the original canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The exact reverse of this direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether `other` is the exact reverse of this direction.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse a direction from a string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions produced by input handling.
///
/// Turns become the *pending* direction and take effect at the next tick
/// boundary; `Start` begins a run from Idle or restarts after a terminal
/// phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a direction change for the next tick.
    Turn(Direction),
    /// Start (or restart) a run.
    Start,
}

impl GameAction {
    /// Parse an action from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Turn(Direction::Left)));
    /// assert_eq!(GameAction::from_str("start"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("start") {
            return Some(GameAction::Start);
        }
        Direction::from_str(s).map(GameAction::Turn)
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(dir) => dir.as_str(),
            GameAction::Start => "start",
        }
    }
}

/// Game lifecycle phase.
///
/// - **Idle**: before the first run; the start screen is shown.
/// - **Running**: ticks advance the snake.
/// - **Over**: wall or self collision ended the run.
/// - **Won**: the snake filled the entire grid. Terminal like `Over`; this
///   replaces the unbounded food-placement loop the naive rules would hit
///   on a saturated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Over,
    Won,
}

impl Phase {
    /// Whether the run has ended (either terminal phase).
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Over | Phase::Won)
    }
}

/// Domain events emitted by the core and consumed by the analytics sink.
///
/// These are plain data; the events crate maps them to named flat-payload
/// analytics events, and the runner mirrors `HighScore` into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GameStart {
        high_score: u32,
    },
    FoodEaten {
        score: u32,
        snake_length: u32,
    },
    ScoreMilestone {
        milestone: u32,
    },
    HighScore {
        new_high_score: u32,
        previous_high_score: u32,
    },
    GameOver {
        final_score: u32,
        high_score: u32,
        snake_length: u32,
        game_duration_ms: u64,
        is_new_high_score: bool,
    },
}
