//! Logging initialization for hp-core.
//!
//! All log output goes to stderr; stdout is reserved for command
//! payloads (e.g. `check --format json`). The level comes from the
//! verbosity flags unless `RUST_LOG` overrides it.

use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Resolve the default level string from the verbosity flags.
///
/// `-q` drops to warn, `-v` raises to debug, `-vv` and beyond to trace.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Initialize the logging subsystem.
///
/// Must be called once at startup before any logging occurs.
pub fn init_logging(verbose: u8, quiet: bool, no_color: bool) {
    let level = level_for(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hp_core={level},hp_pack={level}")));

    let use_ansi = !no_color && std::io::stderr().is_terminal();
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_ansi)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
