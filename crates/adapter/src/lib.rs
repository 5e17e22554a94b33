//! Networked deployment of the engine.
//!
//! The transport is a byte relay and nothing more: raw keystrokes flow from
//! a TCP client into the engine's input stream, and composed terminal
//! frames flow back. Three activities progress independently per
//! connection:
//!
//! 1. the input pump, blocking on socket bytes and feeding the bounded
//!    event queue;
//! 2. the game loop on its own blocking thread, the sole mutator of
//!    simulation state;
//! 3. the output flush task, draining buffered frame bytes to the socket
//!    every 40 ms so network cadence never back-pressures the simulation.

pub mod io;
pub mod server;

pub use tui_snake_types as types;

pub use io::{ChannelReader, FrameSink};
pub use server::{run_server, ServerConfig};
