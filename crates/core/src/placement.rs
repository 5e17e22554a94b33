//! Food placement policy.
//!
//! Respawn placement is injectable so tests can script exact positions and
//! kinds while the game uses a random policy.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use tui_snake_types::{FoodKind, Point};

use crate::arena::Arena;

/// Chooses where (and what) the next food is.
pub trait PlacementPolicy: Send {
    /// Pick a coordinate avoiding `occupied` and the arena border.
    ///
    /// `None` means no free cell is available; the caller leaves the food
    /// where it is.
    fn place(&mut self, arena: &Arena, occupied: &[Point]) -> Option<(Point, FoodKind)>;
}

// Normal food dominates; the special kinds show up often enough to matter.
const KIND_MIX: [FoodKind; 6] = [
    FoodKind::Normal,
    FoodKind::Normal,
    FoodKind::Normal,
    FoodKind::Normal,
    FoodKind::Favourite,
    FoodKind::SpeedUp,
];

/// Uniform choice over the free interior cells.
pub struct RandomPlacement {
    rng: StdRng,
}

impl RandomPlacement {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementPolicy for RandomPlacement {
    fn place(&mut self, arena: &Arena, occupied: &[Point]) -> Option<(Point, FoodKind)> {
        let free: Vec<Point> = arena
            .interior()
            .filter(|p| !occupied.contains(p))
            .collect();
        let pos = free.choose(&mut self.rng).copied()?;
        let kind = KIND_MIX
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(FoodKind::Normal);
        Some((pos, kind))
    }
}

/// Deterministic policy fed from a fixed script. Used by tests.
pub struct ScriptedPlacement {
    script: VecDeque<(Point, FoodKind)>,
}

impl ScriptedPlacement {
    pub fn new(script: impl IntoIterator<Item = (Point, FoodKind)>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl PlacementPolicy for ScriptedPlacement {
    fn place(&mut self, _arena: &Arena, _occupied: &[Point]) -> Option<(Point, FoodKind)> {
        self.script.pop_front()
    }
}
