#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Tracing setup for harness binaries.
//!
//! The library only emits events; installing a subscriber is left to the
//! binary that links it (fuzz targets, reproducers).

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Subscriber configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Default level when `RUST_LOG` is unset.
    pub log_level: Level,
    /// Include thread ids in each line.
    pub thread_ids: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self { log_level: Level::WARN, thread_ids: false }
    }
}

impl TracingConfig {
    /// Log every dispatched check.
    #[must_use]
    pub fn trace() -> Self {
        Self { log_level: Level::TRACE, ..Default::default() }
    }

    /// Include thread ids in each line.
    #[must_use]
    pub fn with_thread_ids(mut self) -> Self {
        self.thread_ids = true;
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::builder().with_default_directive(self.log_level.into()).from_env_lossy()
    }
}

/// Installs a global stderr subscriber.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing(config: &TracingConfig) -> bool {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(config.thread_ids),
        )
        .with(config.filter())
        .try_init()
        .is_ok()
}
