//! Command handler modules for the Betcha CLI.
//!
//! Each subcommand lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and stdin (`&mut dyn BufRead`) passed in
//! - Errors propagated via [`crate::CliError`]; the dispatcher prints them and exits with 2

mod cfg;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::{PlaySettings, handle_play_command};
