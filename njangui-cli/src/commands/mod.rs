//! Command implementations for the njangui CLI

use std::path::Path;

use anyhow::{Context, Result};
use njangui_server::NjanguiConfig;

pub mod config;
pub mod migrate;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use config::run_config;
pub use migrate::run_migrate;
pub use serve::run_serve;

/// Resolve configuration from an explicit file or the default location,
/// with environment overrides applied.
pub(crate) fn load_config(path: Option<&Path>) -> Result<NjanguiConfig> {
    let Some(path) = path else {
        return NjanguiConfig::load().context("Failed to load configuration");
    };

    let mut config = NjanguiConfig::load_from(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    config
        .apply_overrides(|var| std::env::var(var).ok())
        .context("Invalid environment override")?;
    Ok(config)
}

/// Database URL or an actionable error.
pub(crate) fn require_database_url(config: &NjanguiConfig) -> Result<&str> {
    config.database.url.as_deref().context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or [database].url in ~/.njangui/config.toml",
    )
}
