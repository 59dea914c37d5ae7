// ABOUTME: Optional tracing subscriber setup for hosts embedding the explorer.
// ABOUTME: Filters with RUST_LOG and falls back to info for this workspace's crates.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "boj_explorer=info,boj_scrape=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr fmt subscriber.
///
/// Returns `false` if a global subscriber was already set; calling this more
/// than once is harmless.
pub fn init_logging() -> bool {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .try_init()
        .is_ok()
}
