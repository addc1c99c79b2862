//! Input parsing and validation for interactive commands.
//!
//! This module turns what the user types into engine values:
//! - Table commands (`bet`, `double`, `next`, `deck`, `q`) into [`Action`]s
//! - Card tokens such as `AS`, `10h` or `Td` into [`Card`]s
//!
//! Parsing never consults the round state; whether an action is legal right now is
//! decided by the engine.

use std::collections::HashSet;

use betcha_engine::cards::{Card, Suit, Value};
use betcha_engine::game::Action;

/// Smallest and largest hand `eval` accepts.
pub const MIN_EVAL_CARDS: usize = 5;
pub const MAX_EVAL_CARDS: usize = 7;

/// Result type for parsing a line typed at the table.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Engine action parsed from input
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a table command (case-insensitive):
/// - "b" or "bet" → small bet; "bet N" → bet of N
/// - "d" or "double" → double bet (exchanges hole cards)
/// - "n" or "next" → next round with the same deck
/// - "deck" → next round with a freshly shuffled deck
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use betcha_cli::validation::{parse_play_command, ParseResult};
/// use betcha_engine::game::Action;
///
/// assert_eq!(parse_play_command("bet"), ParseResult::Action(Action::small_bet()));
/// assert_eq!(
///     parse_play_command("bet 7"),
///     ParseResult::Action(Action::Bet { amount: 7 })
/// );
/// assert_eq!(parse_play_command("q"), ParseResult::Quit);
///
/// match parse_play_command("fold") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_play_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [] => ParseResult::Invalid("Empty input".to_string()),
        ["q"] | ["quit"] => ParseResult::Quit,
        ["b"] | ["bet"] => ParseResult::Action(Action::small_bet()),
        ["b" | "bet", amount] => match amount.parse::<u32>() {
            Ok(amount) => ParseResult::Action(Action::Bet { amount }),
            Err(_) => ParseResult::Invalid(format!("Invalid bet amount: {}", amount)),
        },
        ["d"] | ["double"] => ParseResult::Action(Action::double_bet()),
        ["n"] | ["next"] => ParseResult::Action(Action::Reset),
        ["deck"] => ParseResult::Action(Action::ResetDeck),
        _ => ParseResult::Invalid(format!(
            "Unrecognized command: {}. Use bet, double, next, deck or q",
            input
        )),
    }
}

/// Parse one card written as value then suit: `AS`, `10h`, `Td`, `2c`.
pub fn parse_card(token: &str) -> Result<Card, String> {
    let token = token.trim();
    let mut chars = token.chars();
    let suit = match chars.next_back().map(|c| c.to_ascii_lowercase()) {
        Some('s') => Suit::Spades,
        Some('h') => Suit::Hearts,
        Some('d') => Suit::Diamonds,
        Some('c') => Suit::Clubs,
        Some(_) => return Err(format!("Invalid suit in card '{}'", token)),
        None => return Err("Empty card".to_string()),
    };
    let value = match chars.as_str().to_ascii_uppercase().as_str() {
        "A" => Value::Ace,
        "2" => Value::Two,
        "3" => Value::Three,
        "4" => Value::Four,
        "5" => Value::Five,
        "6" => Value::Six,
        "7" => Value::Seven,
        "8" => Value::Eight,
        "9" => Value::Nine,
        "10" | "T" => Value::Ten,
        "J" => Value::Jack,
        "Q" => Value::Queen,
        "K" => Value::King,
        _ => return Err(format!("Invalid value in card '{}'", token)),
    };
    Ok(Card::new(suit, value))
}

/// Parse a hand for evaluation: 5 to 7 distinct cards.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, String> {
    if !(MIN_EVAL_CARDS..=MAX_EVAL_CARDS).contains(&tokens.len()) {
        return Err(format!(
            "Expected {} to {} cards, got {}",
            MIN_EVAL_CARDS,
            MAX_EVAL_CARDS,
            tokens.len()
        ));
    }
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(tokens.len());
    for token in tokens {
        let card = parse_card(token.as_ref())?;
        if !seen.insert(card) {
            return Err(format!("Duplicate card: {}", token.as_ref()));
        }
        cards.push(card);
    }
    Ok(cards)
}
