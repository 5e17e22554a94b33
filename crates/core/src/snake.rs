//! Snake entity: direction queue, movement, collision, growth.
//!
//! Movement is driven by render ticks. A counter increments on every draw
//! call and a logical move fires only when it reaches the interval derived
//! from current speed, so the snake redraws at its resolved position each
//! frame while advancing far less often.

use arrayvec::ArrayVec;

use tui_snake_term::Screen;
use tui_snake_types::{
    Cell, Color, Direction, FoodKind, InputEvent, Point, BASE_SPEED, MOVEMENT_RATE,
    PENDING_DIRECTION_CAP, VERTICAL_STRETCH,
};

use crate::entity::{Drawable, Entity, Tickable};
use crate::session::Session;

const SNAKE_COLOR: Color = Color::White;

/// Render ticks between logical moves at `speed`, for a move heading in
/// `direction`. Vertical intervals are stretched because terminal glyphs
/// are taller than wide.
fn movement_interval(speed: u32, direction: Direction) -> u32 {
    let mut interval = (MOVEMENT_RATE as f64 / speed.max(1) as f64).round();
    if direction.is_vertical() {
        interval = (interval * VERTICAL_STRETCH).round();
    }
    (interval as u32).max(1)
}

pub struct Snake {
    /// Body coordinates, tail first. The head is the last element and is
    /// the hitbox for food, border and self collision.
    body: Vec<Point>,
    direction: Direction,
    pending: ArrayVec<Direction, PENDING_DIRECTION_CAP>,
    speed: u32,
    counter: u32,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: vec![Point::new(1, 6), Point::new(2, 6), Point::new(3, 6)],
            direction: Direction::Right,
            pending: ArrayVec::new(),
            speed: BASE_SPEED,
            counter: 0,
        }
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending(&self) -> &[Direction] {
        &self.pending
    }

    /// The direction a newly queued input is judged against: the last
    /// queued direction if any, else the current one.
    fn effective_direction(&self) -> Direction {
        self.pending.last().copied().unwrap_or(self.direction)
    }

    /// Admission rule for direction input, applied at dispatch time.
    ///
    /// Rejects the exact reverse of the effective direction and duplicates
    /// of the last queued entry; silently drops input when the queue is
    /// full.
    fn queue_direction(&mut self, next: Direction) {
        if next == self.effective_direction().opposite() {
            return;
        }
        if self.pending.last() == Some(&next) {
            return;
        }
        let _ = self.pending.try_push(next);
    }

    /// One movement tick: up to two sub-steps of movement, collision and
    /// food handling. Returns false when the session transitioned to game
    /// over, in which case all further processing for this tick stops.
    fn advance(&mut self, session: &Session) -> bool {
        // Two sub-steps only when two turns are already queued, so a sharp
        // double corner resolves within one movement tick.
        let substeps = if self.pending.len() >= 2 { 2 } else { 1 };
        let mut speed_changed = false;

        for _ in 0..substeps {
            if let Some(next) = self.pending.pop_at(0) {
                // A queued reverse is dropped; the current direction holds.
                if next != self.direction.opposite() {
                    self.direction = next;
                }
            }

            let prospective = self.head().step(self.direction);

            if session.arena().contains(prospective) {
                session.game_over(self.speed);
                return false;
            }
            if self.body[..self.body.len() - 1].contains(&prospective) {
                session.game_over(self.speed);
                return false;
            }

            if let Some(kind) = session.food_at(prospective) {
                match kind {
                    FoodKind::Favourite => {
                        session.add_score(5);
                        if self.speed.saturating_sub(3) <= session.base_speed() {
                            self.speed = session.base_speed();
                        } else {
                            self.speed -= 3;
                        }
                        speed_changed = true;
                        self.body.push(prospective);
                    }
                    FoodKind::SpeedUp => {
                        // No growth and no advance on this sub-step.
                        self.speed += 1;
                        speed_changed = true;
                    }
                    FoodKind::Normal => {
                        session.add_score(1);
                        self.body.push(prospective);
                    }
                }
                session.respawn_food(&self.body);
            } else {
                self.body.remove(0);
                self.body.push(prospective);
            }
        }

        if speed_changed {
            session.note_speed(self.speed);
            // Prime the counter so the next move reflects the new speed
            // without waiting a full stale interval.
            self.counter = movement_interval(self.speed, self.direction).saturating_sub(1);
        }

        true
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Tickable for Snake {
    fn tick(&mut self, _session: &Session, event: InputEvent) {
        if let Some(dir) = event.direction() {
            self.queue_direction(dir);
        }
    }
}

impl Drawable for Snake {
    fn draw(&mut self, session: &Session, screen: &mut Screen) {
        self.counter += 1;
        if self.counter >= movement_interval(self.speed, self.direction) {
            self.counter = 0;
            if !self.advance(session) {
                return;
            }
        }

        for p in &self.body {
            screen.render_cell(p.x, p.y, Cell::bg(SNAKE_COLOR));
        }
    }
}

impl Entity for Snake {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }

    fn as_tickable(&mut self) -> Option<&mut dyn Tickable> {
        Some(self)
    }
}
