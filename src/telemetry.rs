use anyhow::Context;

use tracing::subscriber::set_global_default;

use tracing_log::LogTracer;

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber, redirecting `log` events from
/// dependencies into it. `RUST_LOG` overrides the default filter.
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = fmt::fmt().with_env_filter(filter).finish();

    LogTracer::init().context("Failed to initialize logging")?;

    set_global_default(subscriber).context("Failed to set global subscriber")
}
