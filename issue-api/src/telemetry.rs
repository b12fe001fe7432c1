use tracing_subscriber::{fmt::time::UtcTime, EnvFilter};

const DEFAULT_FILTER: &str = "issue_api=debug,tower_http=debug";

/// Install the global fmt subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init() -> Result<(), anyhow::Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
