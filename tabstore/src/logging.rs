use std::io;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

pub fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).with_context(|| format!("invalid log filter `{directives}`"))
}

/// Install the global fmt subscriber. Events go to stderr; stdout carries
/// the menu and reports.
pub fn init(directives: &str) -> Result<()> {
    let filter = parse_filter(directives)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
