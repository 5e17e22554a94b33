//! Arena: static border geometry used for collision queries.

use std::collections::HashSet;

use tui_snake_term::Screen;
use tui_snake_types::{Cell, Color, Point};

use crate::entity::{Drawable, Entity};
use crate::session::Session;

const ARENA_COLOR: Color = Color::White;

/// Fixed playing-field geometry. Immutable after construction; the border
/// set is derived once and reused for drawing.
#[derive(Debug, Clone)]
pub struct Arena {
    width: i32,
    height: i32,
    border: HashSet<Point>,
}

impl Arena {
    pub fn new(width: i32, height: i32) -> Self {
        let mut border = HashSet::new();
        for x in 0..width {
            border.insert(Point::new(x, 0));
            border.insert(Point::new(x, height - 1));
        }
        for y in 0..height {
            border.insert(Point::new(0, y));
            border.insert(Point::new(width - 1, y));
        }
        Self {
            width,
            height,
            border,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The border-collision predicate: true when `p` lies on or past the
    /// border.
    pub fn contains(&self, p: Point) -> bool {
        p.x <= 0 || p.y <= 0 || p.x >= self.width - 1 || p.y >= self.height - 1
    }

    /// All coordinates strictly inside the border, row-major.
    pub fn interior(&self) -> impl Iterator<Item = Point> + '_ {
        (1..self.height - 1)
            .flat_map(move |y| (1..self.width - 1).map(move |x| Point::new(x, y)))
    }
}

impl Drawable for Arena {
    fn draw(&mut self, _session: &Session, screen: &mut Screen) {
        for p in &self.border {
            screen.render_cell(p.x, p.y, Cell::bg(ARENA_COLOR));
        }
    }
}

impl Entity for Arena {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}
