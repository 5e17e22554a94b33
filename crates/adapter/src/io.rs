//! Byte plumbing between the async transport and the sync engine.
//!
//! The engine reads a blocking byte stream and writes frames to a plain
//! `Write` sink. [`ChannelReader`] turns a channel of byte chunks into that
//! stream; [`FrameSink`] buffers written frames until the flush tick drains
//! them to the transport.

use std::io::{self, Read, Write};
use std::mem;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

/// Shared, append-only byte buffer the engine renders into.
///
/// Cloning yields another handle onto the same buffer. The flush task takes
/// the accumulated bytes with [`FrameSink::drain`] on its own cadence, which
/// decouples simulation cadence from network write cadence.
#[derive(Clone, Default)]
pub struct FrameSink {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl FrameSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything buffered so far.
    pub fn drain(&self) -> Vec<u8> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        mem::take(&mut *inner)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Write for FrameSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Blocking `Read` over a channel of byte chunks.
///
/// `recv` blocks until the transport delivers more bytes; a disconnected
/// sender reads as end-of-stream, which is how a client hangup reaches the
/// decoder.
pub struct ChannelReader {
    rx: Receiver<Vec<u8>>,
    pending: Vec<u8>,
    offset: usize,
}

impl ChannelReader {
    pub fn new(rx: Receiver<Vec<u8>>) -> Self {
        Self {
            rx,
            pending: Vec::new(),
            offset: 0,
        }
    }
}

impl Read for ChannelReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.offset >= self.pending.len() {
            match self.rx.recv() {
                Ok(bytes) => {
                    self.pending = bytes;
                    self.offset = 0;
                }
                Err(_) => return Ok(0),
            }
        }
        let n = buf.len().min(self.pending.len() - self.offset);
        buf[..n].copy_from_slice(&self.pending[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}
