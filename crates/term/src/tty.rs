//! Raw-mode terminal guard for local play.
//!
//! The engine itself only speaks byte streams; this guard puts the hosting
//! terminal into a state where arrow keys arrive as escape sequences on
//! stdin and frames can be written without line discipline interference.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalGuard {
    stdout: io::Stdout,
}

impl TerminalGuard {
    /// Enter raw mode on the alternate screen with the cursor hidden.
    pub fn enter() -> Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        stdout.queue(terminal::EnterAlternateScreen)?;
        stdout.queue(cursor::Hide)?;
        stdout.queue(terminal::DisableLineWrap)?;
        stdout.flush()?;
        Ok(Self { stdout })
    }

    /// Restore the terminal. Callers should invoke this even when the game
    /// loop returned an error.
    pub fn restore(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}
