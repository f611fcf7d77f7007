//! Apply the document schema and unique key indexes without serving

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use njangui_server::db::{create_pool, ensure_indexes, migrations};
use njangui_server::{DocumentStore, PgDocumentStore};

use super::{load_config, require_database_url};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Config file (default: $NJANGUI_CONFIG or ~/.njangui/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(url) = args.database_url {
        config.database.url = Some(url);
    }

    let url = require_database_url(&config)?;
    let pool = create_pool(url, config.pool_options())
        .await
        .context("Failed to connect to database")?;
    migrations::run(&pool)
        .await
        .context("Failed to create document table")?;
    tracing::info!("document table ready");

    let store = PgDocumentStore::new(pool);
    let result = ensure_indexes(&store)
        .await
        .context("Failed to create unique key indexes");
    store.close().await;
    result?;

    println!("Migrations applied");
    Ok(())
}
