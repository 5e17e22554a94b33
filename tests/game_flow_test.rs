//! Session-level flow tests: the full scene graph driven through the
//! registry, one draw pass per render tick, with scripted food placement.

use tui_snake::core::{Phase, ScriptedPlacement, Session};
use tui_snake::term::Screen;
use tui_snake::types::{Difficulty, FoodKind, InputEvent, Point};

fn session_with_script(script: Vec<(Point, FoodKind)>) -> Session {
    Session::new(
        Difficulty::Normal,
        Box::new(ScriptedPlacement::new(script)),
        None,
    )
}

/// Render ticks until the session leaves `Playing`, bounded so a regression
/// cannot hang the test.
fn tick_until_game_over(session: &Session, screen: &mut Screen, max_ticks: usize) -> usize {
    for tick in 0..max_ticks {
        if session.phase() == Phase::GameOver {
            return tick;
        }
        session.registry().draw_entities(session, screen);
        let _ = screen.composite();
    }
    panic!("no game over within {} ticks", max_ticks);
}

#[test]
fn eating_food_in_the_path_scores_and_respawns() {
    // First script entry is the initial placement, straight ahead of the
    // snake; the second is the respawn location.
    let session = session_with_script(vec![
        (Point::new(4, 6), FoodKind::Normal),
        (Point::new(50, 20), FoodKind::Normal),
    ]);
    session.start();
    let mut screen = Screen::new();

    // Horizontal interval at base speed is 8 render ticks.
    for _ in 0..8 {
        session.registry().draw_entities(&session, &mut screen);
        let _ = screen.composite();
    }

    assert_eq!(session.score(), 1);
    assert_eq!(session.food_at(Point::new(50, 20)), Some(FoodKind::Normal));
    assert_eq!(session.phase(), Phase::Playing);
}

#[test]
fn steering_into_the_top_border_ends_the_game() {
    let session = session_with_script(vec![(Point::new(50, 20), FoodKind::Normal)]);
    session.start();
    let mut screen = Screen::new();

    session
        .registry()
        .dispatch_event(&session, InputEvent::ArrowUp);

    // Head starts at y=6; five moves reach y=1 and the sixth hits the
    // border. Vertical interval is 13 ticks, so well under 100 ticks.
    let ticks = tick_until_game_over(&session, &mut screen, 100);
    assert!(ticks >= 13 * 5, "died after only {} ticks", ticks);
}

#[test]
fn restart_after_game_over_resets_score_and_speed() {
    let session = session_with_script(vec![
        (Point::new(4, 6), FoodKind::SpeedUp),
        (Point::new(50, 20), FoodKind::Normal),
        (Point::new(51, 20), FoodKind::Normal),
    ]);
    session.start();
    let mut screen = Screen::new();

    // Eat the speed-up, then steer into the top border.
    for _ in 0..8 {
        session.registry().draw_entities(&session, &mut screen);
        let _ = screen.composite();
    }
    session
        .registry()
        .dispatch_event(&session, InputEvent::ArrowUp);
    tick_until_game_over(&session, &mut screen, 200);

    // Only the restart key is accepted; anything else is ignored.
    session
        .registry()
        .dispatch_event(&session, InputEvent::Char('x'));
    assert_eq!(session.phase(), Phase::GameOver);

    session
        .registry()
        .dispatch_event(&session, InputEvent::Char('r'));
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.food_at(Point::new(51, 20)), Some(FoodKind::Normal));

    // The fresh scene ticks along without carrying over the old speed.
    session.registry().draw_entities(&session, &mut screen);
    assert_eq!(session.phase(), Phase::Playing);
}

#[test]
fn game_over_scene_displays_final_stats() {
    let session = session_with_script(vec![(Point::new(50, 20), FoodKind::Normal)]);
    session.start();
    let mut screen = Screen::new();

    session
        .registry()
        .dispatch_event(&session, InputEvent::ArrowUp);
    tick_until_game_over(&session, &mut screen, 100);

    session.registry().draw_entities(&session, &mut screen);
    let frame = screen.composite();
    assert!(frame.contains("Score: 0"));
    assert!(frame.contains("Speed: 8"));
    assert!(frame.contains("Difficulty: Normal"));
    assert!(frame.contains("Press \"r\" to restart!"));
    assert!(frame.contains("Press \"Delete\" to quit!"));
}
