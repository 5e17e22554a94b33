//! Sparse frame buffer and frame compositor.
//!
//! Entities paint cells into a [`Screen`] each frame; [`Screen::composite`]
//! serializes everything painted so far into one escape-coded text frame and
//! empties the buffer for the next frame. Every frame redraws the full
//! bounding box; there is no diffing against the previous frame.

use std::collections::HashMap;

use tui_snake_types::{Cell, Color, Point};

/// Emitted at the start of every frame: cursor home, full clear, hide cursor.
pub const FRAME_PREFIX: &str = "\x1b[H\x1b[2J\x1b[?25l";

/// Emitted once when the engine shuts down: attribute reset, show cursor.
pub const TERMINAL_RESET: &str = "\x1b[0m\x1b[?25h";

fn bg_code(color: Color) -> u8 {
    match color {
        Color::Black => 40,
        Color::Red => 41,
        Color::Green => 42,
        Color::Yellow => 43,
        Color::Blue => 44,
        Color::Magenta => 45,
        Color::Cyan => 46,
        Color::White => 47,
        Color::Default => 49,
    }
}

/// Sparse cell grid for the frame in progress.
///
/// Coordinates are unbounded; the compositor derives the frame extent from
/// whatever was actually painted.
#[derive(Debug, Default)]
pub struct Screen {
    cells: HashMap<Point, Cell>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint one cell. Last writer wins, so draw order determines layering.
    pub fn render_cell(&mut self, x: i32, y: i32, cell: Cell) {
        self.cells.insert(Point::new(x, y), cell);
    }

    /// Number of painted cells in the current frame.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.cells.get(&Point::new(x, y)).copied()
    }

    /// Serialize the painted cells into one terminal frame and clear the
    /// buffer.
    ///
    /// The frame covers the minimal bounding box of all painted cells (a
    /// single cell at the origin when nothing was painted). Background color
    /// codes are emitted only when the color changes from the previous cell,
    /// and the background is reset at every row boundary so color never
    /// bleeds into content to the right of the frame.
    pub fn composite(&mut self) -> String {
        let mut min = Point::new(0, 0);
        let mut max = Point::new(0, 0);
        let mut first = true;
        for p in self.cells.keys() {
            if first {
                min = *p;
                max = *p;
                first = false;
                continue;
            }
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        let mut out = String::with_capacity(
            FRAME_PREFIX.len() + ((max.x - min.x + 8) * (max.y - min.y + 1)) as usize,
        );
        out.push_str(FRAME_PREFIX);

        let mut current_bg = Color::Default;
        let mut set_bg = |out: &mut String, bg: Color| {
            if bg == current_bg {
                return;
            }
            current_bg = bg;
            out.push_str(&format!("\x1b[{}m", bg_code(bg)));
        };

        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let cell = self
                    .cells
                    .get(&Point::new(x, y))
                    .copied()
                    .unwrap_or_default();
                set_bg(&mut out, cell.bg);
                out.push(cell.ch.unwrap_or(' '));
            }
            set_bg(&mut out, Color::Default);
            out.push_str("\r\n");
        }

        out.push_str("\x1b[49m");
        self.cells.clear();
        out
    }
}
