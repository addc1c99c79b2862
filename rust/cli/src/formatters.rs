//! Card and hand formatters for terminal display.
//!
//! Pure functions turning engine cards into short tokens like `A♠` (Unicode) or `As`
//! (ASCII fallback). The style is resolved once from configuration and passed in, so
//! output never depends on the terminal at call time.
//!
//! ## Example
//!
//! ```rust
//! use betcha_engine::cards::{Card, Suit, Value};
//! use betcha_cli::formatters::{format_card, format_cards, CardStyle};
//!
//! let ace_spades = Card::new(Suit::Spades, Value::Ace);
//! assert_eq!(format_card(&ace_spades, CardStyle::Unicode), "A♠");
//! assert_eq!(format_card(&ace_spades, CardStyle::Ascii), "As");
//! assert_eq!(format_cards(&[ace_spades], CardStyle::Ascii), "[As]");
//! ```

use betcha_engine::cards::{Card, Suit, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Unicode,
    Ascii,
}

impl CardStyle {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode {
            CardStyle::Unicode
        } else {
            CardStyle::Ascii
        }
    }
}

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Suit symbol (♥ ♦ ♣ ♠) or letter (h d c s). Jokers carry no suit mark.
pub fn format_suit(suit: Suit, style: CardStyle) -> &'static str {
    match (style, suit) {
        (_, Suit::Joker) => "",
        (CardStyle::Unicode, Suit::Hearts) => "♥",
        (CardStyle::Unicode, Suit::Diamonds) => "♦",
        (CardStyle::Unicode, Suit::Clubs) => "♣",
        (CardStyle::Unicode, Suit::Spades) => "♠",
        (CardStyle::Ascii, Suit::Hearts) => "h",
        (CardStyle::Ascii, Suit::Diamonds) => "d",
        (CardStyle::Ascii, Suit::Clubs) => "c",
        (CardStyle::Ascii, Suit::Spades) => "s",
    }
}

/// Single-character value (2-9, T, J, Q, K, A); jokers print as `JK`.
pub fn format_value(value: Value) -> &'static str {
    match value {
        Value::Joker => "JK",
        Value::Ace => "A",
        Value::Two => "2",
        Value::Three => "3",
        Value::Four => "4",
        Value::Five => "5",
        Value::Six => "6",
        Value::Seven => "7",
        Value::Eight => "8",
        Value::Nine => "9",
        Value::Ten => "T",
        Value::Jack => "J",
        Value::Queen => "Q",
        Value::King => "K",
    }
}

pub fn format_card(card: &Card, style: CardStyle) -> String {
    format!("{}{}", format_value(card.value), format_suit(card.suit, style))
}

/// Cards in bracket notation, e.g. `[A♠ K♥ 2♦]`; an empty slice prints `[]`.
pub fn format_cards(cards: &[Card], style: CardStyle) -> String {
    let formatted: Vec<String> = cards.iter().map(|c| format_card(c, style)).collect();
    format!("[{}]", formatted.join(" "))
}

/// Face-down placeholder for `count` cards, e.g. `[?? ??]`.
pub fn format_hidden(count: usize) -> String {
    format!("[{}]", vec!["??"; count].join(" "))
}
