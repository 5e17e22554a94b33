//! Acceptance test for the TCP deployment: a client sees frames flowing
//! and the delete sequence winds the whole session down.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::time::timeout;

use tui_snake::adapter::{run_server, ServerConfig};
use tui_snake::term::{FRAME_PREFIX, TERMINAL_RESET};

const STEP: Duration = Duration::from_secs(5);

#[tokio::test]
async fn client_receives_frames_and_delete_closes_the_session() {
    let config = ServerConfig {
        port: 0, // ephemeral
        ..ServerConfig::default()
    };
    let (ready_tx, ready_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = run_server(config, Some(ready_tx)).await;
    });
    let addr = timeout(STEP, ready_rx).await.unwrap().unwrap();

    let mut client = timeout(STEP, TcpStream::connect(addr)).await.unwrap().unwrap();

    // Frames arrive on the flush tick without the client sending anything.
    let mut received = Vec::new();
    let mut buf = [0u8; 4096];
    while !contains(&received, FRAME_PREFIX.as_bytes()) {
        let n = timeout(STEP, client.read(&mut buf)).await.unwrap().unwrap();
        assert!(n > 0, "server closed before sending a frame");
        received.extend_from_slice(&buf[..n]);
    }

    // The quit sequence ends the engine; the server flushes the terminal
    // reset and closes the connection.
    client.write_all(b"\x1b[3~").await.unwrap();
    loop {
        let n = timeout(STEP, client.read(&mut buf)).await.unwrap().unwrap();
        if n == 0 {
            break;
        }
        received.extend_from_slice(&buf[..n]);
    }
    assert!(received.ends_with(TERMINAL_RESET.as_bytes()));
}

#[tokio::test]
async fn client_hangup_does_not_take_the_server_down() {
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };
    let (ready_tx, ready_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = run_server(config, Some(ready_tx)).await;
    });
    let addr = timeout(STEP, ready_rx).await.unwrap().unwrap();

    // First client connects and hangs up immediately.
    let client = timeout(STEP, TcpStream::connect(addr)).await.unwrap().unwrap();
    drop(client);

    // A second client still gets a fresh session.
    let mut client = timeout(STEP, TcpStream::connect(addr)).await.unwrap().unwrap();
    let mut buf = [0u8; 4096];
    let n = timeout(STEP, client.read(&mut buf)).await.unwrap().unwrap();
    assert!(n > 0);
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}
