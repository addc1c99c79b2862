//! Deal command handler: shuffle a deck and show the top cards.

use crate::error::CliError;
use crate::formatters::{CardStyle, format_cards};
use crate::ui;
use betcha_engine::deck::Deck;
use std::io::Write;

/// Handle the deal command.
///
/// Shuffles a fresh deck (optionally with jokers) and prints the seed, the dealt cards
/// and how many remain. Asking for more cards than the deck holds deals what is left
/// and warns on `err`.
pub fn handle_deal_command(
    seed: Option<u64>,
    count: usize,
    jokers: bool,
    style: CardStyle,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(jokers, seed);
    deck.shuffle();
    let dealt = deck.deal(count);
    if dealt.len() < count {
        ui::display_warning(
            err,
            &format!("Deck holds {} cards; dealt {}", deck.size(), dealt.len()),
        )?;
    }

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Dealt: {}", format_cards(&dealt, style))?;
    writeln!(out, "Remaining: {}", deck.cards_total())?;
    Ok(())
}
