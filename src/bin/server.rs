// Person Registry - Main GraphQL Server
// Run with: cargo run --bin server

//! # Person Registry Server Binary
//!
//! Starts the HTTP server that exposes the person registry over GraphQL.
//!
//! ## Configuration
//!
//! Everything comes from the environment (a `.env` file is honored if
//! present, but optional):
//!
//! - `SERVER_PORT`: listening port, default 4000
//! - `PERSONS_URL`: when set, the store is bulk-loaded once from this
//!   endpoint at startup instead of using the static seed data; a failed
//!   load aborts startup before the socket is bound
//! - `RUST_LOG`: tracing filter, default behavior of `tracing_subscriber`

use dotenv::dotenv;
use person_registry::GraphQLServerBuilder;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The .env file is optional; environment variables may also be set by
    // the deployment system
    if let Err(e) = dotenv() {
        eprintln!("Warning: Could not load .env file: {}", e);
    }

    // Initialize structured logging for the application
    tracing_subscriber::fmt::init();

    info!("🚀 Starting Person Registry Server...");

    let server_port = env::var("SERVER_PORT")
        .unwrap_or_else(|_| "4000".to_string())
        .parse::<u16>()
        .unwrap_or(4000);

    info!("Server port: {}", server_port);

    let mut builder = GraphQLServerBuilder::new().with_port(server_port);

    // Remote bulk-load variant: seed the store from an HTTP endpoint
    if let Ok(persons_url) = env::var("PERSONS_URL") {
        info!("Seed source: {}", persons_url);
        builder = builder.with_remote_seed(persons_url);
    } else {
        info!("Seed source: static data");
    }

    builder.build_and_run().await?;

    Ok(())
}
