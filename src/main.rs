//! Nanochain node binary
//!
//! Starts a ledger node serving the REST surface on the configured port.

use clap::Parser;
use log::info;
use nanochain::api::{create_router, ApiState};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "nanochain")]
#[command(version = "0.1.0")]
#[command(about = "A proof-of-work ledger node with HTTP peer consensus", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    // Process-wide node identifier; recipient of this node's mining rewards.
    // Not persisted, so it changes across restarts.
    let node_id = Uuid::new_v4().simple().to_string();
    info!("Node identifier: {}", node_id);

    let state = ApiState::new(&node_id);
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
