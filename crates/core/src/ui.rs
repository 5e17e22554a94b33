//! Static UI entities: text lines, filled rectangles, multi-line banners,
//! and the game-over menu.

use tui_snake_term::Screen;
use tui_snake_types::{Cell, Color, InputEvent};

use crate::entity::{Drawable, Entity, Tickable};
use crate::session::Session;

/// One line of colored text.
pub struct Text {
    x: i32,
    y: i32,
    content: String,
    fg: Color,
    bg: Color,
}

impl Text {
    pub fn new(x: i32, y: i32, content: impl Into<String>, fg: Color, bg: Color) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            fg,
            bg,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

impl Drawable for Text {
    fn draw(&mut self, _session: &Session, screen: &mut Screen) {
        for (i, ch) in self.content.chars().enumerate() {
            screen.render_cell(
                self.x + i as i32,
                self.y,
                Cell::glyph(ch, self.fg, self.bg),
            );
        }
    }
}

impl Entity for Text {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}

/// A filled rectangle of one background color.
pub struct Rectangle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    bg: Color,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, bg: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            bg,
        }
    }
}

impl Drawable for Rectangle {
    fn draw(&mut self, _session: &Session, screen: &mut Screen) {
        for dy in 0..self.height {
            for dx in 0..self.width {
                screen.render_cell(self.x + dx, self.y + dy, Cell::bg(self.bg));
            }
        }
    }
}

impl Entity for Rectangle {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}

/// Multi-line ASCII art rendered with default colors.
pub struct Banner {
    x: i32,
    y: i32,
    lines: Vec<String>,
}

impl Banner {
    pub fn new(x: i32, y: i32, art: &str) -> Self {
        Self {
            x,
            y,
            lines: art.lines().map(str::to_owned).collect(),
        }
    }
}

impl Drawable for Banner {
    fn draw(&mut self, _session: &Session, screen: &mut Screen) {
        for (dy, line) in self.lines.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                screen.render_cell(
                    self.x + dx as i32,
                    self.y + dy as i32,
                    Cell::glyph(ch, Color::Default, Color::Default),
                );
            }
        }
    }
}

impl Entity for Banner {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}

/// Invisible entity that listens for the restart key on the game-over
/// scene. Quit is the loop's concern, not this entity's.
pub struct GameOverMenu;

impl Tickable for GameOverMenu {
    fn tick(&mut self, session: &Session, event: InputEvent) {
        if event == InputEvent::Char('r') {
            session.restart();
        }
    }
}

impl Entity for GameOverMenu {
    fn as_tickable(&mut self) -> Option<&mut dyn Tickable> {
        Some(self)
    }
}
