//! Append-only score log.
//!
//! One text row per finished game, keyed by timestamp. The engine fires and
//! forgets; a failing append is surfaced to the caller, which treats it as a
//! fatal environment problem.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use tui_snake_types::Difficulty;

pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one result row: `|MM-DD-YYYY HH:MM:SS|score|speed|difficulty|`.
    pub fn append(&self, score: u32, speed: u32, difficulty: Difficulty) -> Result<()> {
        let stamp = Local::now().format("%m-%d-%Y %H:%M:%S");
        let row = format!("\n|{}|{}|{}|{}|  ", stamp, score, speed, difficulty.as_str());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening score log {}", self.path.display()))?;
        file.write_all(row.as_bytes())
            .with_context(|| format!("appending to score log {}", self.path.display()))?;
        Ok(())
    }
}
