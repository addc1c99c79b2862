//! UI helper functions for terminal output formatting.
//!
//! Error and warning lines go to the error stream; the table view goes to the output
//! stream. The house hole cards stay face down until the showdown.

use betcha_engine::game::{MIN_CARDS_PER_ROUND, Results, SHOWDOWN_STEP, Snapshot, Winner};
use std::io::Write;

use crate::formatters::{CardStyle, format_cards, format_hidden};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Renders one snapshot of the table.
pub fn write_table(
    out: &mut dyn Write,
    snapshot: &Snapshot,
    style: CardStyle,
) -> std::io::Result<()> {
    writeln!(
        out,
        "Step {} | Money: {} | Purse: {} | Cards left: {}",
        snapshot.step, snapshot.player_money, snapshot.purse, snapshot.cards_left
    )?;
    let house = if snapshot.step >= SHOWDOWN_STEP {
        format_cards(&snapshot.house_cards, style)
    } else {
        format_hidden(snapshot.house_cards.len())
    };
    writeln!(out, "House: {}", house)?;
    writeln!(out, "Board: {}", format_cards(&snapshot.community_cards, style))?;
    writeln!(out, "You:   {}", format_cards(&snapshot.player_cards, style))?;
    if snapshot.step >= SHOWDOWN_STEP {
        writeln!(out, "{}", describe_results(&snapshot.results))?;
    }
    if snapshot.game_over {
        writeln!(
            out,
            "Game over: fewer than {} cards left. Type 'deck' for a fresh deck.",
            MIN_CARDS_PER_ROUND
        )?;
    }
    Ok(())
}

pub fn describe_results(results: &Results) -> String {
    let outcome = match results.winner {
        Winner::Player => "You win",
        Winner::House => "House wins",
        Winner::None => "Pending",
    };
    format!(
        "Result: {} (you: {}, house: {})",
        outcome, results.player, results.house
    )
}
