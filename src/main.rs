//! Service entry point
//!
//! This is a minimal entrypoint that:
//! 1. Initializes logging
//! 2. Loads configuration (the `PORT` variable is the only knob)
//! 3. Opens the store once and hands it to the server
//! 4. Prints errors to stderr and exits non-zero on failure
//!
//! All request logic lives in the library modules.

use custodb::http_server::{HttpServer, HttpServerConfig};
use custodb::store::CustomerStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HttpServerConfig::from_env();

    let store = CustomerStore::open(&config.database_path).await?;
    tracing::info!(path = %config.database_path, "connected to the SQLite database");

    HttpServer::new(config, store).start().await?;
    Ok(())
}
