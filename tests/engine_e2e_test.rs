//! End-to-end pipeline test: raw bytes through decoder, pump, loop and
//! compositor, without any terminal or network attached.

use std::io::Cursor;

use tui_snake::core::{ScriptedPlacement, Session};
use tui_snake::input::spawn_event_pump;
use tui_snake::term::{FRAME_PREFIX, TERMINAL_RESET};
use tui_snake::types::{Difficulty, FoodKind, Point};

fn session() -> Session {
    Session::new(
        Difficulty::Normal,
        Box::new(ScriptedPlacement::new([(
            Point::new(50, 20),
            FoodKind::Normal,
        )])),
        None,
    )
}

#[test]
fn delete_byte_sequence_shuts_the_engine_down() {
    let session = session();
    // A couple of steering keys, then the quit sequence.
    let events = spawn_event_pump(Cursor::new(b"\x1b[A\x1b[D\x1b[3~".to_vec()));

    let mut out = Vec::new();
    tui_snake::engine::run(&session, &events, &mut out).unwrap();

    assert!(session.quit_requested());
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with(TERMINAL_RESET));
}

#[test]
fn closing_the_byte_source_shuts_the_engine_down() {
    let session = session();
    let events = spawn_event_pump(Cursor::new(Vec::new()));

    let mut out = Vec::new();
    tui_snake::engine::run(&session, &events, &mut out).unwrap();
    assert!(session.quit_requested());
}

#[test]
fn engine_emits_frames_while_running() {
    let session = session();
    // Garbage and unknown sequences must not disturb the engine; the
    // stream stays open long enough for a few frames by sheer volume of
    // dispatch work, then quits.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"\x1b[5~zz\x1bq");
    bytes.extend_from_slice(b"\x1b[3~");
    let events = spawn_event_pump(Cursor::new(bytes));

    let mut out = Vec::new();
    tui_snake::engine::run(&session, &events, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with(TERMINAL_RESET));
    // Any frame that was emitted is a full, well-formed frame.
    for frame in text.split(FRAME_PREFIX).skip(1) {
        assert!(frame.contains("\r\n"));
    }
}
