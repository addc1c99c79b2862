//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of each value.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_money": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_money": {
            "value": config.starting_money,
            "source": sources.starting_money,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "unicode": {
            "value": config.unicode,
            "source": sources.unicode,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
