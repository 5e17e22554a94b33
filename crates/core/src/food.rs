//! Food entity: spawn-and-replace, three variants.

use tui_snake_term::Screen;
use tui_snake_types::{Cell, Color, FoodKind, Point};

use crate::entity::{Drawable, Entity};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Point,
    kind: FoodKind,
}

impl Food {
    pub fn new(position: Point, kind: FoodKind) -> Self {
        Self { position, kind }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    /// Replace the food wholesale. Consumption never mutates in place.
    pub fn replace(&mut self, position: Point, kind: FoodKind) {
        *self = Food::new(position, kind);
    }

    pub fn glyph(&self) -> char {
        match self.kind {
            FoodKind::Normal => '■',
            FoodKind::Favourite => 'R',
            FoodKind::SpeedUp => 'S',
        }
    }
}

impl Drawable for Food {
    fn draw(&mut self, _session: &Session, screen: &mut Screen) {
        screen.render_cell(
            self.position.x,
            self.position.y,
            Cell::glyph(self.glyph(), Color::Default, Color::Default),
        );
    }
}

impl Entity for Food {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}
