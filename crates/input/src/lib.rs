//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`tui_snake_types::GameAction`]. This
//! module is stateless: direction requests are last-write-wins inside the
//! core, so there is nothing to debounce here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
