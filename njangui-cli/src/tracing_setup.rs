//! Console logging for the njangui binary
//!
//! `RUST_LOG` wins when set. Otherwise the service crates log at `info`
//! (`debug` with `--debug`) and everything else at `warn`, which keeps sqlx
//! statement logs and hyper internals out of the request log.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Verbose service logs and targets (ignored when RUST_LOG is set)
    pub debug: bool,
}

impl TracingConfig {
    fn default_directives(&self) -> String {
        let level = if self.debug { "debug" } else { "info" };
        format!("warn,njangui={level},njangui_server={level},tower_http={level}")
    }
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()))
}

pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_dependencies_by_default() {
        let directives = TracingConfig::default().default_directives();
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("njangui_server=info"));
    }

    #[test]
    fn debug_raises_service_crates_only() {
        let directives = TracingConfig { debug: true }.default_directives();
        assert!(directives.contains("njangui_server=debug"));
        assert!(directives.contains("tower_http=debug"));
        assert!(directives.starts_with("warn,"));
    }
}
