//! Tracing setup for the CLI.
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`
//! always wins; otherwise `-v` flags pick the level, and with no flags the
//! configured level applies.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{CoreError, Result};

/// Filter directive for a verbosity count.
///
/// `0` uses `configured` (a level such as `warn`, or a full directive
/// containing `=`); `1` is info, `2` debug, `3` and above trace.
pub fn filter_directive(verbosity: u8, configured: &str) -> String {
    let level = match verbosity {
        0 if configured.contains('=') => return configured.to_string(),
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("betterrest_core={level},betterrest_cli={level}")
}

/// Check that `configured` yields a filter `EnvFilter` accepts.
pub fn validate_level(configured: &str) -> std::result::Result<(), String> {
    EnvFilter::try_new(filter_directive(0, configured))
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init_logging(verbosity: u8, configured: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity, configured)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= 2)
                .with_file(verbosity >= 3)
                .with_line_number(verbosity >= 3),
        )
        .try_init()
        .map_err(|e| CoreError::Io(std::io::Error::other(e.to_string())))
}
