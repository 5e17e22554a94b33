//! Fixed-timestep game loop.
//!
//! One loop iteration: drain queued input events (never blocking), then
//! catch up on elapsed wall-clock time one frame at a time, then yield
//! briefly. The loop is the sole mutator of simulation state; the input
//! pump and the output flush progress independently.

use std::io::Write;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use tui_snake_core::Session;
use tui_snake_term::{Screen, TERMINAL_RESET};
use tui_snake_types::InputEvent;

/// Brief yield between iterations to avoid busy-spinning.
const LOOP_YIELD: Duration = Duration::from_millis(4);

/// Run the engine until the session's quit flag is set.
///
/// This is the start entry point of the scene host contract: after calling
/// it the engine owns both streams until the quit condition, and the final
/// terminal reset sequence has been written when it returns.
pub fn run(session: &Session, events: &Receiver<InputEvent>, out: &mut dyn Write) -> Result<()> {
    session.start();

    let mut screen = Screen::new();
    let frame = Duration::from_secs_f64(1.0 / f64::from(session.fps().max(1)));
    let mut last = Instant::now();
    let mut accumulated = Duration::ZERO;

    while !session.quit_requested() {
        loop {
            match events.try_recv() {
                Ok(event) => {
                    if event == InputEvent::Delete {
                        session.request_quit();
                    }
                    session.registry().dispatch_event(session, event);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Input stream closed: wind the session down cleanly.
                    session.request_quit();
                    break;
                }
            }
        }

        let now = Instant::now();
        accumulated += now - last;
        last = now;

        while accumulated >= frame {
            accumulated -= frame;
            session.registry().draw_entities(session, &mut screen);
            out.write_all(screen.composite().as_bytes())?;
            out.flush()?;
        }

        thread::sleep(LOOP_YIELD);
    }

    out.write_all(TERMINAL_RESET.as_bytes())?;
    out.flush()?;
    Ok(())
}
