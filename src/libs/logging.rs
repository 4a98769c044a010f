//! Tracing subscriber setup for the binary.
//!
//! The filter comes from `RUST_LOG`; without it only warnings and errors are
//! shown.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
