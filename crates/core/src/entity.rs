//! Entity capability traits.
//!
//! Game objects are a small closed set of kinds. Each declares which
//! capabilities it implements through the `as_*` queries; the registry
//! dispatches through those rather than inspecting concrete types. Both
//! capabilities receive the owning [`Session`] so no entity needs ambient
//! global state.

use tui_snake_term::Screen;
use tui_snake_types::InputEvent;

use crate::session::Session;

/// Renders into the frame buffer given current state.
pub trait Drawable {
    fn draw(&mut self, session: &Session, screen: &mut Screen);
}

/// Receives one logical input event per dispatch.
///
/// Tick order between sibling entities is unspecified; entities must not
/// rely on it.
pub trait Tickable {
    fn tick(&mut self, session: &Session, event: InputEvent);
}

pub trait Entity: Send {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        None
    }

    fn as_tickable(&mut self) -> Option<&mut dyn Tickable> {
        None
    }
}
