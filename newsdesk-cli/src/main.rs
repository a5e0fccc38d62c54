//! newsdesk - HTTP API server for news posts
//!
//! Connects to MongoDB and serves the posts API until shutdown. All
//! startup knobs are explicit flags or environment variables; there is
//! no hidden global configuration.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use newsdesk_server::store::MongoStore;
use newsdesk_server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "newsdesk",
    author,
    version,
    about = "HTTP API server for news posts"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:4000")]
    bind: SocketAddr,

    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URL", default_value = "mongodb://127.0.0.1:27017")]
    database_url: String,

    /// Database name
    #[arg(long, default_value = "newsdb")]
    database: String,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!("starting newsdesk on {}", cli.bind);

    let store = MongoStore::connect(&cli.database_url, &cli.database)
        .await
        .context("failed to connect to MongoDB")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    // Blocks until shutdown
    run_server(Arc::new(store), config)
        .await
        .context("server error")?;

    Ok(())
}
