//! Engine module: the scheduler tying input, simulation and rendering
//! together at a fixed timestep.

pub mod clock;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use clock::run;
