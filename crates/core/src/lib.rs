//! Game core: entities, registry, session and simulation rules.
//!
//! Everything here is driven from the outside: the game loop dispatches
//! input events and draw passes through the [`registry::Registry`], and the
//! entities mutate their own state and call back into the owning
//! [`session::Session`] for scoring, scene transitions and food placement.
//!
//! # Module structure
//!
//! - [`arena`]: static border geometry and the border-collision predicate
//! - [`snake`]: movement, direction queue, collision, growth
//! - [`food`]: spawn-and-replace food entity with three variants
//! - [`placement`]: injectable food placement policy
//! - [`registry`]: concurrency-safe entity list with capability dispatch
//! - [`session`]: the session object owning registry, stats and scenes
//!   (scene construction itself is internal to the crate)
//! - [`scorelog`]: append-only results log
//! - [`ui`]: text/rectangle/banner entities and the game-over menu

pub mod arena;
pub mod entity;
pub mod food;
pub mod placement;
pub mod registry;
pub(crate) mod scene;
pub mod scorelog;
pub mod session;
pub mod snake;
pub mod ui;

pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use arena::Arena;
pub use entity::{Drawable, Entity, Tickable};
pub use food::Food;
pub use placement::{PlacementPolicy, RandomPlacement, ScriptedPlacement};
pub use registry::{EntityRef, Registry};
pub use scorelog::ScoreLog;
pub use session::{Phase, Session};
pub use snake::Snake;
