//! Diagnostic tracing.
//!
//! The library emits `tracing` events (persist failures at `warn`, load
//! fallbacks and mutations at `debug`). A corrupt save is silently replaced
//! by an empty list, so nothing about it reaches a default run's stderr. Only the binary installs a subscriber. User-facing
//! output never goes through here; that is the CLI's job.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn`, or `tally=debug` when `verbose`.
/// Calling it twice is harmless: the second install is ignored.
///
/// ```bash
/// RUST_LOG=tally=debug tally up apples
/// ```
pub fn init(verbose: bool) {
    let fallback = if verbose { "warn,tally=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
