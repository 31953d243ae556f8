//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: same seed produces identical food placement
//! - **Testable**: every rule is exercised headlessly
//! - **Portable**: runs anywhere the runner can call `tick()`
//!
//! # Module Structure
//!
//! - [`game_state`]: phase machine, update step, pending direction, events
//! - [`rng`]: seeded LCG used for food placement
//! - [`scoring`]: score-dependent speed curve and milestones
//! - [`snapshot`]: render-facing state snapshot
//!
//! # Game Rules
//!
//! - The snake starts as a 3-cell horizontal segment centered on the grid,
//!   facing right.
//! - Each tick commits the pending direction, moves the head one cell, and
//!   either grows (food) or trims the tail.
//! - Leaving the grid or touching the body ends the run; filling the whole
//!   grid wins it.
//! - Every food is worth 10 points; every 10 points shortens the tick
//!   interval by 3ms down to a 50ms floor.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, Phase};
//!
//! let mut game = GameState::new(12345, 0);
//! game.start();
//! game.request_turn(Direction::Down);
//! game.tick();
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.direction(), Direction::Down);
//! ```

pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::{Events, GameState};
pub use rng::SimpleRng;
pub use scoring::{is_milestone, tick_interval_ms};
pub use snapshot::GameSnapshot;
