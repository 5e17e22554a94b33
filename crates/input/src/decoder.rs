//! Escape-sequence decoder: raw keystroke bytes to logical input events.
//!
//! The decoder is a lazy iterator over an underlying byte stream. It never
//! fails: malformed or unrecognized escape sequences are consumed and
//! silently discarded, and the iterator simply ends when the stream closes.
//! Once the stream is gone decoding cannot resume.

use std::io::{ErrorKind, Read};

use tui_snake_types::InputEvent;

pub struct Decoder<R> {
    source: R,
}

impl<R: Read> Decoder<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Blocking single-byte read. `None` means end of stream or a hard read
    /// error; both end the decoder.
    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => return None,
                Ok(_) => return Some(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => return None,
            }
        }
    }

    /// Consume the remainder of a `ESC [ <digits...>` sequence.
    ///
    /// Returns `Some(Delete)` for the one recognized numeric pattern
    /// (`ESC [ 3 ~`); every other numeric sequence is buffered up to its
    /// terminator and dropped.
    fn finish_numeric_csi(&mut self, first: u8) -> Option<Option<InputEvent>> {
        let mut digits = vec![first];
        loop {
            let b = self.read_byte()?;
            if b.is_ascii_digit() || b == b';' {
                digits.push(b);
                continue;
            }
            if b == b'~' && digits == [b'3'] {
                return Some(Some(InputEvent::Delete));
            }
            // Unrecognized terminator: the whole sequence is discarded.
            return Some(None);
        }
    }
}

impl<R: Read> Iterator for Decoder<R> {
    type Item = InputEvent;

    fn next(&mut self) -> Option<InputEvent> {
        loop {
            let b = self.read_byte()?;
            match b {
                0x1b => {
                    if self.read_byte()? != b'[' {
                        // Lone escape (or a non-CSI sequence): discard.
                        continue;
                    }
                    match self.read_byte()? {
                        b'A' => return Some(InputEvent::ArrowUp),
                        b'B' => return Some(InputEvent::ArrowDown),
                        b'C' => return Some(InputEvent::ArrowRight),
                        b'D' => return Some(InputEvent::ArrowLeft),
                        d if d.is_ascii_digit() => match self.finish_numeric_csi(d)? {
                            Some(event) => return Some(event),
                            None => continue,
                        },
                        _ => continue,
                    }
                }
                b'\n' | b'\r' => continue,
                other => return Some(InputEvent::Char(other as char)),
            }
        }
    }
}
