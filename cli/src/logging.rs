//! Logging for the CLI.
//!
//! Logs go to stderr so they do not interleave with REPL output. Set
//! `DEBUG_LOGGING=1` to enable debug output for trailhead crates.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        // debug for trailhead crates, info for dependencies
        "info,trailhead_core=debug,trailhead_cli=debug,trailhead=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(EnvFilter::new(filter_directive))
        .init();

    tracing::debug!(debug_logging, "Trailhead logging initialized");
}
