//! Tracing subscriber setup for the command-line generator

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Filter directive for a `-v` count
pub const fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter string, scoping the verbose level to this crate
pub fn filter_directive(verbosity: u8) -> String {
    format!("warn,edgewave={}", level_for_verbosity(verbosity))
}

/// Install the global subscriber (idempotent; first call wins)
///
/// `RUST_LOG` takes precedence over the verbosity-derived filter.
pub fn init_tracing(verbosity: u8) {
    let directive = filter_directive(verbosity);
    TRACING_INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        // A subscriber may already be installed by an embedding application
        let _ = subscriber.try_init();
    });
}
