//! Input module (engine-facing).
//!
//! This module is independent of any UI framework: it turns a raw byte
//! stream into logical [`tui_snake_types::InputEvent`]s and feeds them into
//! a bounded queue the game loop can drain without blocking.

pub mod decoder;
pub mod pump;

pub use tui_snake_types as types;

pub use decoder::Decoder;
pub use pump::spawn_event_pump;
