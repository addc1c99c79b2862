//! Diagnostic logging for the CLI.
//!
//! Engine events (rejected actions, showdowns, transitions) go through `tracing`. The
//! binary installs a `fmt` subscriber that writes to stderr so stdout carries only the
//! table. Verbosity follows `BETCHA_LOG` using `EnvFilter` syntax, e.g.
//! `BETCHA_LOG=betcha_engine=debug`.

pub const LOG_ENV: &str = "BETCHA_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs the global stderr subscriber. Does nothing if one is already set.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
