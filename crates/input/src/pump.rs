//! Event pump: drives the decoder on its own thread into a bounded queue.
//!
//! The pump owns the blocking read of the byte source; the game loop drains
//! the queue without ever blocking. When the queue is full the newest event
//! is dropped, trading completeness for responsiveness.

use std::io::Read;
use std::sync::mpsc::{sync_channel, Receiver, TrySendError};
use std::thread;

use tui_snake_types::{InputEvent, EVENT_QUEUE_CAP};

/// Spawn the pump thread for `source`.
///
/// The returned receiver yields decoded events until the source closes (the
/// channel then disconnects). Dropping the receiver ends the pump thread at
/// its next decoded event.
pub fn spawn_event_pump<R: Read + Send + 'static>(source: R) -> Receiver<InputEvent> {
    let (tx, rx) = sync_channel::<InputEvent>(EVENT_QUEUE_CAP);
    thread::spawn(move || {
        for event in crate::Decoder::new(source) {
            match tx.try_send(event) {
                Ok(()) => {}
                // Full queue: drop the newest event.
                Err(TrySendError::Full(_)) => {}
                Err(TrySendError::Disconnected(_)) => return,
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    #[test]
    fn pump_delivers_decoded_events_in_order() {
        let rx = spawn_event_pump(Cursor::new(b"\x1b[A\x1b[C".to_vec()));
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(1)).unwrap(),
            InputEvent::ArrowUp
        );
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(1)).unwrap(),
            InputEvent::ArrowRight
        );
        // Source exhausted: channel disconnects.
        assert!(rx.recv_timeout(Duration::from_secs(1)).is_err());
    }

    #[test]
    fn full_queue_drops_newest_events() {
        // 3 more events than the queue holds, all decoded before we drain.
        let count = EVENT_QUEUE_CAP + 3;
        let bytes: Vec<u8> = std::iter::repeat(*b"\x1b[A")
            .take(count)
            .flatten()
            .collect();
        let rx = spawn_event_pump(Cursor::new(bytes));

        // Let the pump run dry against the full queue.
        thread::sleep(Duration::from_millis(200));

        let mut delivered = 0;
        while rx.try_recv().is_ok() {
            delivered += 1;
        }
        assert_eq!(delivered, EVENT_QUEUE_CAP);
    }
}
