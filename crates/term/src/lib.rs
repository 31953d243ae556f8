//! Terminal frontend for the snake game.
//!
//! Three layers, from pure to impure:
//!
//! | module       | role                                          |
//! |--------------|-----------------------------------------------|
//! | [`fb`]       | styled character framebuffer (pure data)      |
//! | [`game_view`]| snapshot -> framebuffer projection (pure)     |
//! | [`renderer`] | framebuffer -> terminal escape sequences (IO) |
//!
//! Everything above [`renderer`] is deterministic and unit-testable without
//! a terminal attached.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
