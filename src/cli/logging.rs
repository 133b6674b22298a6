//! Diagnostic logging through `tracing`
//!
//! Logs go to stderr so stdout stays clean for the menu and JSON output.
//! `RUST_LOG` takes precedence; otherwise `--verbose` enables debug events
//! for this crate and only errors are shown by default.

use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "car_inventory=debug"
    } else {
        "error"
    }
}

/// Installs the global subscriber; later calls are no-ops
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
