//! # Betcha CLI Library
//!
//! Command-line front end for the Betcha round engine: an interactive table against the
//! house plus a few inspection tools.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand, writing game output to `out`
//! and diagnostics to `err`. [`run_with_input`] does the same with an injected stdin.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["betcha", "eval", "AS", "KS", "QS", "JS", "10S"];
//! let code = betcha_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against the house (interactive or `--auto`)
//! - `deal`: Shuffle a deck and show the top cards
//! - `eval`: Classify 5 to 7 cards
//! - `cfg`: Display the resolved configuration with sources

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{BetchaCli, Commands};
use commands::{
    PlaySettings, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_play_command,
};
use formatters::CardStyle;

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "eval", "cfg"];

/// Main entry point for the CLI application, reading interactive input from the process stdin.
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["betcha", "deal", "--seed", "42"];
/// let code = betcha_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], with `stdin` supplying the commands typed at the table.
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BetchaCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        cmd => match config::load() {
            Ok(cfg) => dispatch(cmd, &cfg, stdin, out, err),
            Err(e) => Err(CliError::from(e)),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    cfg: &config::Config,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let style = CardStyle::from_unicode_flag(cfg.unicode);
    match cmd {
        Commands::Play {
            rounds,
            seed,
            money,
            auto,
        } => {
            let settings = PlaySettings {
                rounds,
                // flags win over configuration
                seed: seed.or(cfg.seed),
                money: money.unwrap_or(cfg.starting_money),
                auto,
                style,
            };
            handle_play_command(settings, out, err, stdin)
        }
        Commands::Deal {
            seed,
            count,
            jokers,
        } => handle_deal_command(seed.or(cfg.seed), count, jokers, style, out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, style, out),
        Commands::Cfg => handle_cfg_command(out),
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Betcha Poker CLI").is_err()
                || writeln!(err, "Usage: betcha <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: betcha --help");
            exit_code::ERROR
        }
    }
}
