//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with the game transcript on stdout.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber for the CLI
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug over warn.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "bulls_and_cows=debug"
    } else {
        "bulls_and_cows=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
