//! Eval command handler: classify a hand typed on the command line.

use crate::error::CliError;
use crate::formatters::{CardStyle, format_card, format_cards};
use crate::validation::parse_cards;
use betcha_engine::hand::Hand;
use betcha_engine::rules::bonus_for;
use std::io::Write;

/// Handle the eval command.
///
/// Prints the parsed hand, its category, the best single card, and the bonus the
/// category would pay on a win.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for malformed or duplicate cards, or a count
/// outside 5 to 7.
pub fn handle_eval_command(
    tokens: &[String],
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_cards(tokens).map_err(CliError::InvalidInput)?;
    let high = Hand::highest_card(&cards)?;
    let hand = Hand::new(cards);
    let category = hand.evaluate();

    writeln!(out, "Hand: {}", format_cards(hand.cards(), style))?;
    writeln!(out, "Category: {}", category)?;
    writeln!(out, "High card: {}", format_card(&high, style))?;
    writeln!(out, "Bonus: {}", bonus_for(category))?;
    Ok(())
}
