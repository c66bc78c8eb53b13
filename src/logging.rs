//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for codes, reports and JSON.
//! `RUST_LOG` wins over the configured level; `-v` forces `debug`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// The filter directive to use when `RUST_LOG` is not set.
pub fn default_directive(configured: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else if configured.trim().is_empty() {
        "warn".to_string()
    } else {
        configured.trim().to_string()
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(configured: &str, verbose: bool) {
    let directive = default_directive(configured, verbose);
    let filter = if verbose {
        EnvFilter::new(&directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
