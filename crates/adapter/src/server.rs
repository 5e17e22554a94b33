//! TCP server for networked play.
//!
//! The server relays raw bytes: client keystrokes stream into the engine's
//! input, composed frames stream back on a fixed flush tick. Each accepted
//! connection gets its own session and engine on a blocking thread; the
//! transport never interprets the bytes it carries.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use tui_snake_core::{RandomPlacement, ScoreLog, Session};
use tui_snake_input::spawn_event_pump;
use tui_snake_types::{Difficulty, FLUSH_INTERVAL_MS};

use crate::io::{ChannelReader, FrameSink};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub difficulty: Difficulty,
    pub score_log: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            difficulty: Difficulty::Normal,
            score_log: PathBuf::from("HIGHSCORES.md"),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let host = env::var("SNAKE_HOST").unwrap_or(defaults.host);
        let port = env::var("SNAKE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);
        let difficulty = env::var("SNAKE_DIFFICULTY")
            .ok()
            .and_then(|s| Difficulty::from_str(&s))
            .unwrap_or(defaults.difficulty);
        let score_log = env::var("SNAKE_SCORE_LOG")
            .map(PathBuf::from)
            .unwrap_or(defaults.score_log);

        Self {
            host,
            port,
            difficulty,
            score_log,
        }
    }
}

/// Bind and serve until the process is terminated.
///
/// `ready_tx` receives the bound address once the listener is up; tests use
/// it to connect against an ephemeral port.
pub async fn run_server(
    config: ServerConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let bound = listener.local_addr()?;
    println!("[server] listening on {}", bound);
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let mut client_id = 0usize;
    loop {
        let (socket, addr) = listener.accept().await?;
        client_id += 1;
        let id = client_id;
        println!("[server] client {} connected from {}", id, addr);

        let config = config.clone();
        tokio::spawn(async move {
            if let Err(err) = handle_client(socket, config).await {
                eprintln!("[server] client {} error: {}", id, err);
            }
            println!("[server] client {} disconnected", id);
        });
    }
}

/// Drive one engine for one connection.
async fn handle_client(socket: TcpStream, config: ServerConfig) -> Result<()> {
    socket.set_nodelay(true)?;
    let (mut read_half, mut write_half) = socket.into_split();

    let (in_tx, in_rx) = mpsc::channel::<Vec<u8>>();
    let frames = FrameSink::new();

    // The engine is synchronous; give it a blocking thread for the whole
    // session.
    let engine_frames = frames.clone();
    let mut engine = tokio::task::spawn_blocking(move || {
        let session = Session::new(
            config.difficulty,
            Box::new(RandomPlacement::new()),
            Some(ScoreLog::new(&config.score_log)),
        );
        let events = spawn_event_pump(ChannelReader::new(in_rx));
        let mut out = engine_frames;
        tui_snake_engine::run(&session, &events, &mut out)
    });

    // Keystrokes: socket -> engine input. Dropping `in_tx` on hangup reads
    // as end-of-stream inside the engine.
    let reader = tokio::spawn(async move {
        let mut buf = [0u8; 512];
        loop {
            match read_half.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if in_tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    // Frames: engine output -> socket, drained on the flush tick.
    let mut ticker = tokio::time::interval(Duration::from_millis(FLUSH_INTERVAL_MS));
    let result = loop {
        tokio::select! {
            _ = ticker.tick() => {
                let bytes = frames.drain();
                if !bytes.is_empty() && write_half.write_all(&bytes).await.is_err() {
                    break Ok(());
                }
            }
            joined = &mut engine => {
                // The loop wrote its reset sequence; flush it and close.
                let bytes = frames.drain();
                if !bytes.is_empty() {
                    let _ = write_half.write_all(&bytes).await;
                }
                let _ = write_half.shutdown().await;
                break match joined {
                    Ok(engine_result) => engine_result,
                    Err(join_err) => Err(join_err.into()),
                };
            }
        }
    };

    reader.abort();
    result
}
