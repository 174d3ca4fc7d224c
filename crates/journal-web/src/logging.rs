//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` is used as the filter.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| anyhow::anyhow!("Invalid log filter {:?}: {}", level, e))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))
}
