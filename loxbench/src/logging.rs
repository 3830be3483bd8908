//! Development-time tracing for debugging the harness.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: diagnostics via `RUST_LOG` — scan timings,
//!   byte counts — on stderr. Never part of product output.
//!
//! - **Product output**: token counts, dumps, and reports go to stdout and
//!   are unaffected by `RUST_LOG`, so `time loxbench count FILE` and piped
//!   consumers see the bare values.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset. Output: stderr, compact
/// format.
///
/// # Example
/// ```bash
/// RUST_LOG=loxbench=debug cargo run -- count 10_000_lines.lox
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
