//! Local terminal runner (default binary).
//!
//! Puts the hosting terminal into raw mode, wires stdin/stdout to the
//! engine and plays until the quit key. The engine itself never touches the
//! terminal state; it only reads and writes bytes.

use std::io;

use anyhow::{anyhow, Result};

use tui_snake::core::{RandomPlacement, ScoreLog, Session};
use tui_snake::input::spawn_event_pump;
use tui_snake::term::TerminalGuard;
use tui_snake::types::Difficulty;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let difficulty = parse_args(&args)?;

    let mut term = TerminalGuard::enter()?;
    let result = run(difficulty);

    // Always try to restore terminal state.
    let _ = term.restore();
    result
}

fn parse_args(args: &[String]) -> Result<Difficulty> {
    let mut difficulty = Difficulty::Normal;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--difficulty" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --difficulty"))?;
                difficulty = Difficulty::from_str(v)
                    .ok_or_else(|| anyhow!("invalid difficulty: {} (easy|normal|hard)", v))?;
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(difficulty)
}

fn run(difficulty: Difficulty) -> Result<()> {
    let session = Session::new(
        difficulty,
        Box::new(RandomPlacement::new()),
        Some(ScoreLog::new("HIGHSCORES.md")),
    );
    let events = spawn_event_pump(io::stdin());
    let mut stdout = io::stdout();
    tui_snake::engine::run(&session, &events, &mut stdout)
}
