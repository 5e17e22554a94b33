//! Scene construction: the playing scene and the game-over scene.
//!
//! A scene is the set of entities registered for one lifecycle phase.
//! Scenes are replaced wholesale; snake and food are always built fresh so
//! no stale handle survives a transition.

use std::sync::{Arc, Mutex};

use tui_snake_types::{Color, ARENA_HEIGHT, ARENA_WIDTH};

use crate::food::Food;
use crate::session::{SceneHandles, Session};
use crate::snake::Snake;
use crate::ui::{Banner, GameOverMenu, Rectangle, Text};

const PANEL_X: i32 = ARENA_WIDTH + 1;
const PANEL_WIDTH: i32 = 45;
const PANEL_TEXT_X: i32 = ARENA_WIDTH + 2;

const INSTRUCTIONS: [&str; 6] = [
    "Instructions:",
    "Use ← → ↑ ↓ to move the snake around",
    "Pick up the food to grow bigger",
    "■: 1 point/growth",
    "R: 5 points (removes some speed!)",
    "S: 1 point (increased speed!!)",
];

const GAME_OVER_LOGO: &str = r"  ____                        ___
 / ___| __ _ _ __ ___   ___  / _ \__   _____ _ __
| |  _ / _` | '_ ` _ \ / _ \| | | \ \ / / _ \ '__|
| |_| | (_| | | | | | |  __/| |_| |\ V /  __/ |
 \____|\__,_|_| |_| |_|\___| \___/  \_/ \___|_|";

/// Build the playing scene. Draw order follows registration order, so the
/// arena border and the snake land on top of the panel furniture.
pub(crate) fn build_playing(session: &Session) {
    let registry = session.registry();
    registry.clear();

    let snake = Snake::new();
    let (food_pos, food_kind) = session.place_food(snake.body());

    let food = Arc::new(Mutex::new(Food::new(food_pos, food_kind)));
    let score_text = Arc::new(Mutex::new(Text::new(
        PANEL_TEXT_X,
        1,
        format!("Score: {}", session.score()),
        Color::Black,
        Color::White,
    )));
    let speed_text = Arc::new(Mutex::new(Text::new(
        PANEL_TEXT_X,
        3,
        format!("Speed: {}", snake.speed()),
        Color::Black,
        Color::White,
    )));

    registry.register(food.clone());
    registry.register(Arc::new(Mutex::new(Rectangle::new(
        PANEL_X,
        0,
        PANEL_WIDTH,
        ARENA_HEIGHT,
        Color::White,
    ))));
    registry.register(score_text.clone());
    registry.register(speed_text.clone());
    registry.register(Arc::new(Mutex::new(Text::new(
        PANEL_TEXT_X,
        5,
        format!("Difficulty: {}", session.difficulty().as_str()),
        Color::Black,
        Color::White,
    ))));

    let mut y = 7;
    for line in INSTRUCTIONS {
        y += 2;
        registry.register(Arc::new(Mutex::new(Text::new(
            PANEL_TEXT_X,
            y,
            line,
            Color::Black,
            Color::White,
        ))));
    }

    registry.register(Arc::new(Mutex::new(snake)));
    registry.register(Arc::new(Mutex::new(session.arena().clone())));

    session.set_scene(SceneHandles {
        food: Some(food),
        score_text: Some(score_text),
        speed_text: Some(speed_text),
    });
}

/// Build the game-over scene: logo, final stats, and the restart/quit menu.
pub(crate) fn build_game_over(session: &Session, final_speed: u32) {
    let registry = session.registry();
    registry.clear();

    for (y, line) in [
        (13, format!("Score: {}", session.score())),
        (15, format!("Speed: {}", final_speed)),
        (17, format!("Difficulty: {}", session.difficulty().as_str())),
    ] {
        registry.register(Arc::new(Mutex::new(Text::new(
            10,
            y,
            line,
            Color::White,
            Color::Black,
        ))));
    }

    registry.register(Arc::new(Mutex::new(Banner::new(10, 3, GAME_OVER_LOGO))));
    registry.register(Arc::new(Mutex::new(Rectangle::new(
        45,
        12,
        45,
        7,
        Color::White,
    ))));

    for (y, line) in [
        (13, "Press \"r\" to restart!"),
        (15, "Press \"Delete\" to quit!"),
    ] {
        registry.register(Arc::new(Mutex::new(Text::new(
            47,
            y,
            line,
            Color::Black,
            Color::White,
        ))));
    }

    registry.register(Arc::new(Mutex::new(GameOverMenu)));

    // Stale handles from the playing scene must not outlive it.
    session.set_scene(SceneHandles::default());
}
