//! Tracing/logging initialization.
//!
//! Ledger diagnostics are `tracing` events. They go to stderr so stdout stays
//! clean for command output and `--json`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_FORMAT_ENV;

/// Initialize tracing for the process.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `warn` in quiet mode.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|value| value.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
