//! # Play Command
//!
//! Rounds of Betcha against the house.
//!
//! - **Interactive**: commands are read line by line from stdin and the table is
//!   redrawn after every accepted action. Rejected actions are reported and the
//!   round continues unchanged.
//! - **Auto** (`--auto`): small bets through every step, a fresh deck whenever the
//!   current one can no longer cover a round.
//!
//! Both modes stop after the requested number of showdowns, when the balance can no
//! longer pay for a whole round of small bets, or on quit/EOF.

use crate::error::CliError;
use crate::formatters::CardStyle;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_play_command};
use betcha_engine::engine::try_reduce;
use betcha_engine::game::{Action, RoundState, SHOWDOWN_STEP, SMALL_BET};
use betcha_engine::rules::can_open_round;
use std::io::{BufRead, Write};

/// Resolved options for one play session; flags have already been merged with config.
#[derive(Debug, Clone)]
pub struct PlaySettings {
    /// Showdowns to play; `None` means until quit (interactive) or 1 (auto)
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
    pub money: u32,
    pub auto: bool,
    pub style: CardStyle,
}

struct SessionSummary {
    rounds_played: u32,
    balance: u32,
}

/// Handle the play command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when `rounds` is 0 or `money` is below a small bet,
/// and `CliError::Io` when the output streams fail.
pub fn handle_play_command(
    settings: PlaySettings,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if settings.rounds == Some(0) {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    if settings.money < SMALL_BET {
        return Err(CliError::InvalidInput(format!(
            "money must be >= {}",
            SMALL_BET
        )));
    }

    let seed = settings.seed.unwrap_or_else(rand::random);
    writeln!(
        out,
        "play: seed={} money={} mode={}",
        seed,
        settings.money,
        if settings.auto { "auto" } else { "interactive" }
    )?;

    let state = RoundState::new(settings.money, Some(seed));
    let summary = if settings.auto {
        play_auto(state, settings.rounds.unwrap_or(1), out)?
    } else {
        play_interactive(state, settings.rounds, settings.style, out, err, stdin)?
    };

    writeln!(out, "Rounds played: {}", summary.rounds_played)?;
    writeln!(out, "Final balance: {}", summary.balance)?;
    Ok(())
}

fn play_auto(
    mut state: RoundState,
    rounds: u32,
    out: &mut dyn Write,
) -> Result<SessionSummary, CliError> {
    let mut played = 0u32;

    while played < rounds {
        writeln!(out, "Round {}", state.round())?;
        if !can_open_round(state.player_money()) {
            writeln!(out, "Out of money.")?;
            break;
        }
        while state.step() < SHOWDOWN_STEP {
            state = apply(state, &Action::small_bet())?;
        }
        played += 1;
        writeln!(
            out,
            "{} | Money: {}",
            ui::describe_results(&state.results()),
            state.player_money()
        )?;

        if played < rounds {
            let next = if state.is_game_over() {
                writeln!(out, "Deck exhausted, reshuffling.")?;
                Action::ResetDeck
            } else {
                Action::Reset
            };
            state = apply(state, &next)?;
        }
    }

    Ok(SessionSummary {
        rounds_played: played,
        balance: state.player_money(),
    })
}

fn play_interactive(
    mut state: RoundState,
    rounds: Option<u32>,
    style: CardStyle,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<SessionSummary, CliError> {
    let mut played = 0u32;

    writeln!(out, "Round {}", state.round())?;
    ui::write_table(out, &state.snapshot(), style)?;

    loop {
        if state.step() == 0 && !can_open_round(state.player_money()) {
            writeln!(out, "Out of money.")?;
            break;
        }

        write!(out, "{}", prompt(&state))?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        let action = match parse_play_command(&line) {
            ParseResult::Action(action) => action,
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        let was_complete = state.is_round_complete();
        match try_reduce(state, &action) {
            Ok(next) => state = next,
            Err((unchanged, e)) => {
                state = unchanged;
                ui::write_error(err, &format!("Rejected: {}", e))?;
                continue;
            }
        }

        if state.step() == 0 {
            writeln!(out, "Round {}", state.round())?;
        }
        ui::write_table(out, &state.snapshot(), style)?;

        if !was_complete && state.is_round_complete() {
            played += 1;
            if rounds == Some(played) {
                break;
            }
        }
    }

    Ok(SessionSummary {
        rounds_played: played,
        balance: state.player_money(),
    })
}

fn prompt(state: &RoundState) -> &'static str {
    if state.is_round_complete() {
        if state.is_game_over() {
            "Enter action (deck/q): "
        } else {
            "Enter action (next/deck/q): "
        }
    } else if state.can_double_bet() {
        "Enter action (bet/double/q): "
    } else {
        "Enter action (bet/q): "
    }
}

/// Auto mode only issues actions it has already checked, so a rejection is a bug worth surfacing.
fn apply(state: RoundState, action: &Action) -> Result<RoundState, CliError> {
    try_reduce(state, action).map_err(|(_, e)| CliError::from(e))
}
