//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: entities paint colored cells into
//! a sparse [`Screen`], and the compositor flattens everything into one
//! escape-coded frame per render tick. The frame is plain bytes, so the same
//! pipeline serves a local terminal and a network transport.

pub mod screen;
pub mod tty;

pub use tui_snake_types as types;

pub use screen::{Screen, FRAME_PREFIX, TERMINAL_RESET};
pub use tty::TerminalGuard;
