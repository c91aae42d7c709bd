//! Room finder REST server.
//!
//! Serves create/read/update/delete endpoints for rooms under `/api/rooms`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomfinder-server -- --storage memory
//! ```

use clap::Parser;
use roomfinder_server::ServerConfig;
use roomfinder_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = roomfinder_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
