//! Tracing setup for the `rival` binary.
//!
//! Logging starts before the config file is read, under [`BOOTSTRAP_FILTER`]
//! (or `RUST_LOG`), so config loading is traced too. Once the config is known
//! its `log_filter` replaces the bootstrap filter unless `RUST_LOG` is set.

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Filter in force until the config file has been loaded.
pub const BOOTSTRAP_FILTER: &str = "warn";

/// Picks the active filter directives. A non-empty `RUST_LOG` always wins.
pub fn tracing_filter(rust_log: Option<String>, configured: &str) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

/// Handle for swapping the filter after startup.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    rust_log: Option<String>,
}

impl LogHandle {
    /// Builds a reloadable filter layer seeded with the bootstrap filter.
    pub fn filter_layer(rust_log: Option<String>) -> (reload::Layer<EnvFilter, Registry>, Self) {
        let filter = EnvFilter::new(tracing_filter(rust_log.clone(), BOOTSTRAP_FILTER));
        let (layer, handle) = reload::Layer::new(filter);
        (layer, Self { handle, rust_log })
    }

    /// Switches to the configured filter unless `RUST_LOG` overrides it.
    pub fn apply_config(&self, configured: &str) -> Result<()> {
        let directives = tracing_filter(self.rust_log.clone(), configured);
        self.handle
            .reload(EnvFilter::new(&directives))
            .context("Failed to apply log filter")?;
        debug!(filter = %directives, "Log filter applied");
        Ok(())
    }

    /// Directives of the filter currently in force.
    pub fn current(&self) -> Result<String> {
        self.handle
            .with_current(|filter| filter.to_string())
            .context("Tracing subscriber is gone")
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only the game.
pub fn initialize_tracing(rust_log: Option<String>) -> LogHandle {
    let (filter, handle) = LogHandle::filter_layer(rust_log);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_overrides_configured_filter() {
        assert_eq!(tracing_filter(Some("trace".to_string()), "warn"), "trace");
    }

    #[test]
    fn test_configured_filter_used_without_rust_log() {
        assert_eq!(tracing_filter(None, "info,rival_cli=debug"), "info,rival_cli=debug");
        assert_eq!(tracing_filter(Some("  ".to_string()), "info"), "info");
    }

    #[test]
    fn test_apply_config_replaces_bootstrap_filter() {
        let (layer, handle) = LogHandle::filter_layer(None);
        let _guard = tracing_subscriber::registry().with(layer).set_default();

        assert_eq!(handle.current().unwrap(), BOOTSTRAP_FILTER);
        handle.apply_config("debug").unwrap();
        assert_eq!(handle.current().unwrap(), "debug");
    }

    #[test]
    fn test_apply_config_keeps_rust_log() {
        let (layer, handle) = LogHandle::filter_layer(Some("trace".to_string()));
        let _guard = tracing_subscriber::registry().with(layer).set_default();

        handle.apply_config("debug").unwrap();
        assert_eq!(handle.current().unwrap(), "trace");
    }
}
