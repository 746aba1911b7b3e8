//! Global tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
///
/// `log_level` is an `EnvFilter` directive string (the value of `RUST_LOG`);
/// `log_format` is `text` for human-readable output or `json` for one JSON
/// object per line.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is already
/// installed.
pub fn init(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level)?;

    let builder = fmt().with_env_filter(filter).with_target(true);

    match log_format {
        "json" => builder
            .json()
            .with_current_span(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?,
        _ => builder.try_init().map_err(|e| anyhow::anyhow!(e))?,
    }

    Ok(())
}
