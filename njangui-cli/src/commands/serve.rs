//! HTTP server command for the Njangui Tracker API

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use njangui_server::{run_server, DocumentStore, MemoryStore, PgDocumentStore};

use super::{load_config, require_database_url};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Use a throwaway in-memory store instead of Postgres
    #[arg(long)]
    pub memory: bool,

    /// Config file (default: $NJANGUI_CONFIG or ~/.njangui/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if args.cors_permissive {
        config.server.cors_permissive = true;
    }
    if let Some(url) = args.database_url {
        config.database.url = Some(url);
    }
    if let Some(max) = args.max_connections {
        config.database.max_connections = max;
    }

    let store: Arc<dyn DocumentStore> = if args.memory {
        tracing::warn!("Using in-memory store - data is lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        let url = require_database_url(&config)?;
        let store = PgDocumentStore::connect(url, config.pool_options())
            .await
            .context("Failed to connect to database")?;
        Arc::new(store)
    };

    tracing::info!("Starting njangui server on {}", config.server.bind);

    // Run server (blocks until shutdown)
    run_server(store, config.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
