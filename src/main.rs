//! Helpdesk Frontend Gateway
//!
//! A thin HTTP gateway in front of the helpdesk ticketing API, built with
//! Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                   GATEWAY                     │
//!                      │                                               │
//!   Browser Request    │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   ───────────────────┼─▶│  http   │───▶│ handlers │───▶│upstream │──┼──▶ Ticketing
//!                      │  │ server  │    │user/oper.│    │ client  │  │      API
//!                      │  └─────────┘    └──────────┘    └─────────┘  │
//!                      │       │                                      │
//!                      │       ▼ (unmatched path)                     │
//!   Browser Response   │  ┌─────────┐                                 │
//!   ◀──────────────────┼──│  shell  │   + config / observability      │
//!                      │  └─────────┘                                 │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! Every API handler performs exactly one upstream call and relays the
//! upstream response verbatim. The gateway holds no state of its own.

// Core subsystems
pub mod config;
pub mod handlers;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod observability;

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use crate::config::{loader::load_config, GatewayConfig};
use crate::http::HttpServer;

#[derive(Parser)]
#[command(name = "helpdesk-gateway")]
#[command(about = "HTTP gateway for the helpdesk ticketing API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration before logging so the configured level can apply.
    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => GatewayConfig::default(),
    };

    observability::logging::init(&config.observability);

    tracing::info!("helpdesk-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_base_url = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
