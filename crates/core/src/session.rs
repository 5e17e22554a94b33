//! Game session: the explicitly constructed object owning registry, stats,
//! scene handles, placement policy and score log.
//!
//! There is no ambient global state; the session is passed by reference to
//! every subsystem, and entities receive it through dispatch.

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tui_snake_types::{Difficulty, FoodKind, Point, BASE_SPEED};

use crate::arena::Arena;
use crate::food::Food;
use crate::placement::PlacementPolicy;
use crate::registry::Registry;
use crate::scene;
use crate::scorelog::ScoreLog;
use crate::ui::Text;

/// Lifecycle phase. Collisions are state transitions, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Handles into the live scene for entities the session mutates directly.
#[derive(Default)]
pub(crate) struct SceneHandles {
    pub(crate) food: Option<Arc<Mutex<Food>>>,
    pub(crate) score_text: Option<Arc<Mutex<Text>>>,
    pub(crate) speed_text: Option<Arc<Mutex<Text>>>,
}

pub struct Session {
    registry: Registry,
    arena: Arena,
    difficulty: Difficulty,
    score: Mutex<u32>,
    phase: Mutex<Phase>,
    quit: AtomicBool,
    scene: Mutex<SceneHandles>,
    placement: Mutex<Box<dyn PlacementPolicy>>,
    score_log: Option<ScoreLog>,
}

impl Session {
    pub fn new(
        difficulty: Difficulty,
        placement: Box<dyn PlacementPolicy>,
        score_log: Option<ScoreLog>,
    ) -> Self {
        Self {
            registry: Registry::new(),
            arena: Arena::new(tui_snake_types::ARENA_WIDTH, tui_snake_types::ARENA_HEIGHT),
            difficulty,
            score: Mutex::new(0),
            phase: Mutex::new(Phase::Playing),
            quit: AtomicBool::new(false),
            scene: Mutex::new(SceneHandles::default()),
            placement: Mutex::new(placement),
            score_log,
        }
    }

    /// Build the playing scene. The host calls this once before running the
    /// loop; restarts reuse it internally.
    pub fn start(&self) {
        *self.lock_score() = 0;
        *self.lock_phase() = Phase::Playing;
        scene::build_playing(self);
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Render rate, fixed for the lifetime of the session.
    pub fn fps(&self) -> u32 {
        self.difficulty.fps()
    }

    pub fn base_speed(&self) -> u32 {
        BASE_SPEED
    }

    pub fn score(&self) -> u32 {
        *self.lock_score()
    }

    pub fn phase(&self) -> Phase {
        *self.lock_phase()
    }

    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Relaxed);
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Relaxed)
    }

    /// Add points and refresh the score display.
    pub fn add_score(&self, amount: u32) {
        let total = {
            let mut score = self.lock_score();
            *score += amount;
            *score
        };
        if let Some(text) = self.lock_scene().score_text.clone() {
            let mut text = text.lock().unwrap_or_else(|e| e.into_inner());
            text.set_content(format!("Score: {}", total));
        }
    }

    /// Refresh the speed display after the snake's speed changed.
    pub fn note_speed(&self, speed: u32) {
        if let Some(text) = self.lock_scene().speed_text.clone() {
            let mut text = text.lock().unwrap_or_else(|e| e.into_inner());
            text.set_content(format!("Speed: {}", speed));
        }
    }

    /// The food's kind if it currently sits at `p`.
    pub fn food_at(&self, p: Point) -> Option<FoodKind> {
        let food = self.lock_scene().food.clone()?;
        let food = food.lock().unwrap_or_else(|e| e.into_inner());
        (food.position() == p).then(|| food.kind())
    }

    /// Move the food somewhere not occupied by `occupied` or the border.
    ///
    /// With no free cell left the food simply stays put.
    pub fn respawn_food(&self, occupied: &[Point]) {
        let Some(food) = self.lock_scene().food.clone() else {
            return;
        };
        let placed = {
            let mut placement = self.placement.lock().unwrap_or_else(|e| e.into_inner());
            placement.place(&self.arena, occupied)
        };
        if let Some((pos, kind)) = placed {
            let mut food = food.lock().unwrap_or_else(|e| e.into_inner());
            food.replace(pos, kind);
        }
    }

    /// Place the initial food for a fresh scene.
    pub(crate) fn place_food(&self, occupied: &[Point]) -> (Point, FoodKind) {
        let mut placement = self.placement.lock().unwrap_or_else(|e| e.into_inner());
        placement
            .place(&self.arena, occupied)
            .unwrap_or((Point::new(35, 12), FoodKind::Normal))
    }

    /// Terminal collision: freeze the simulation, persist the result, and
    /// replace the scene with the game-over screen.
    pub fn game_over(&self, final_speed: u32) {
        *self.lock_phase() = Phase::GameOver;

        let score = self.score();
        if let Some(log) = &self.score_log {
            if let Err(err) = log.append(score, final_speed, self.difficulty) {
                // The one condition that may abort the process: an
                // environment where the score log cannot be written.
                eprintln!("score log failure: {:#}", err);
                process::exit(1);
            }
        }

        scene::build_game_over(self, final_speed);
    }

    /// Rebuild the playing scene from scratch: fresh snake and food, score
    /// and speed back at base.
    pub fn restart(&self) {
        self.start();
    }

    pub(crate) fn set_scene(&self, handles: SceneHandles) {
        *self.lock_scene() = handles;
    }

    fn lock_score(&self) -> std::sync::MutexGuard<'_, u32> {
        self.score.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_phase(&self) -> std::sync::MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_scene(&self) -> std::sync::MutexGuard<'_, SceneHandles> {
        self.scene.lock().unwrap_or_else(|e| e.into_inner())
    }
}
