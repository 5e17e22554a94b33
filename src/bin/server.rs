//! Networked runner: serves the engine over TCP, one session per client.

use anyhow::Result;

use tui_snake::adapter::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    run_server(ServerConfig::from_env(), None).await
}
