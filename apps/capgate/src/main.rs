//! # capgate
//!
//! Command-line boundary adapter for test frameworks that cannot link the
//! Rust crate directly.
//!
//! ## Usage
//!
//! ```bash
//! # One-shot query, prints "suppress" or "capture"
//! capgate --config capture_config.json check --name "Verify Login" --kind screenshot
//!
//! # Long-lived worker: one JSON request per stdin line, one answer per stdout line
//! echo '{"name": "Checkout Suite", "kind": "recording"}' | capgate serve
//!
//! # CI lint for the config file (exit 2 if missing or malformed)
//! capgate validate
//! ```
//!
//! Logging goes to stderr. `CAPGATE_LOG_FORMAT=json` switches to
//! machine-parseable output; `RUST_LOG` overrides the filter.

use capgate::cli;
use capgate_core::CaptureError;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

/// Exit status for a failed command: 2 for a bad config file, 1 otherwise.
fn exit_code(error: &CaptureError) -> i32 {
    if error.is_config_error() { 2 } else { 1 }
}

/// Initialize tracing on stderr; stdout is reserved for answers.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("CAPGATE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "capgate=debug,capgate_core=debug"
    } else {
        "capgate=info,capgate_core=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
