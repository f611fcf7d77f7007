//! njangui CLI - Njangui Tracker service entry point
//!
//! Subcommands:
//! - `serve`: run the HTTP API (Postgres, or `--memory` for a throwaway store)
//! - `migrate`: create the document table and unique key indexes
//! - `config`: inspect the resolved configuration

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "njangui",
    author,
    version,
    about = "Track internal lending between njangui members and funds"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server (funds and members endpoints)
    Serve(commands::serve::ServeArgs),
    /// Create the document table and unique key indexes
    Migrate(commands::migrate::MigrateArgs),
    /// Inspect configuration (show, path)
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Config(args) => commands::run_config(args),
    }
}
