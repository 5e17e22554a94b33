//! Frame composition tests against a full playing scene.

use tui_snake::core::{ScriptedPlacement, Session};
use tui_snake::term::{Screen, FRAME_PREFIX};
use tui_snake::types::{Difficulty, FoodKind, Point, ARENA_HEIGHT};

fn playing_frame() -> String {
    let session = Session::new(
        Difficulty::Normal,
        Box::new(ScriptedPlacement::new([(
            Point::new(50, 20),
            FoodKind::Normal,
        )])),
        None,
    );
    session.start();

    let mut screen = Screen::new();
    session.registry().draw_entities(&session, &mut screen);
    screen.composite()
}

#[test]
fn frame_starts_with_home_clear_and_cursor_hide() {
    let frame = playing_frame();
    assert!(frame.starts_with(FRAME_PREFIX));
    assert!(frame.ends_with("\x1b[49m"));
}

#[test]
fn frame_covers_arena_and_side_panel() {
    let frame = playing_frame();
    // The bounding box spans the arena border rows plus the side panel.
    assert_eq!(frame.matches("\r\n").count(), ARENA_HEIGHT as usize);
}

#[test]
fn panel_labels_appear_verbatim() {
    let frame = playing_frame();
    assert!(frame.contains("Score: 0"));
    assert!(frame.contains("Speed: 8"));
    assert!(frame.contains("Difficulty: Normal"));
    assert!(frame.contains("Instructions:"));
}

#[test]
fn food_glyph_is_rendered() {
    let frame = playing_frame();
    assert!(frame.contains('■'));
}

#[test]
fn consecutive_frames_are_rebuilt_from_scratch() {
    let session = Session::new(
        Difficulty::Normal,
        Box::new(ScriptedPlacement::new([(
            Point::new(50, 20),
            FoodKind::Normal,
        )])),
        None,
    );
    session.start();

    let mut screen = Screen::new();
    session.registry().draw_entities(&session, &mut screen);
    let first = screen.composite();
    assert_eq!(screen.cell_count(), 0);

    session.registry().draw_entities(&session, &mut screen);
    let second = screen.composite();
    // Nothing moved within one tick, so the redrawn frame is identical.
    assert_eq!(first, second);
}
