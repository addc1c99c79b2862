use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents one of the four playable suits, or the marker carried by a joker.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣), the weakest suit in tie-breaks
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠), the strongest suit in tie-breaks
    Spades,
    /// Non-playable marker used only by jokers
    Joker,
}

impl Suit {
    /// Tie-break strength: Spade > Heart > Diamond > Club. Jokers rank below every suit.
    pub fn strength(self) -> u8 {
        match self {
            Suit::Joker => 0,
            Suit::Clubs => 1,
            Suit::Diamonds => 2,
            Suit::Hearts => 3,
            Suit::Spades => 4,
        }
    }

    /// Single-letter code used by [`Card::image_id`].
    pub fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Joker => 'J',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Joker => "Joker",
        }
    }
}

/// Represents the face value of a playing card.
///
/// The discriminant is the low-ace face number (Ace = 1 … King = 13, Joker = 0)
/// used by the ace-low straight pass. Use [`Value::rank`] for magnitude comparisons.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Joker (0), never evaluated
    Joker = 0,
    /// Ace (face 1, rank 14)
    Ace,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Value {
    /// Low-ace face number: Joker 0, Ace 1, Two 2 … King 13.
    pub fn face(self) -> u8 {
        self as u8
    }

    /// Magnitude used for comparisons: Joker 0, Two 2 … King 13, Ace 14.
    pub fn rank(self) -> u8 {
        match self {
            Value::Ace => 14,
            other => other as u8,
        }
    }

    /// Short code used by [`Card::image_id`]: `A`, `2`..`10`, `J`, `Q`, `K`.
    pub fn code(self) -> &'static str {
        match self {
            Value::Joker => "J",
            Value::Ace => "A",
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Value::Joker => "Joker",
            Value::Ace => "Ace",
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "Jack",
            Value::Queen => "Queen",
            Value::King => "King",
        }
    }
}

/// Represents a single immutable playing card.
///
/// Identity is the structural `(suit, value)` pair: two cards compare equal and hash
/// identically exactly when both fields match. Ordering follows [`Card::is_higher_than`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (or the joker marker)
    pub suit: Suit,
    /// The face value of the card
    pub value: Value,
}

impl Card {
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self { suit, value }
    }

    pub const fn joker() -> Self {
        Self {
            suit: Suit::Joker,
            value: Value::Joker,
        }
    }

    pub fn rank(&self) -> u8 {
        self.value.rank()
    }

    pub fn is_joker(&self) -> bool {
        self.value == Value::Joker
    }

    /// Stable identity string such as `D-Q` or `H-10`; jokers are `J-J`.
    pub fn image_id(&self) -> String {
        format!("{}-{}", self.suit.code(), self.value.code())
    }

    /// Returns true when this card beats `other` in a showdown tie-break.
    ///
    /// Higher rank wins; equal values fall back to suit order
    /// Spade > Heart > Diamond > Club. A card is never higher than itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use betcha_engine::cards::{Card, Suit, Value};
    ///
    /// let queen = Card::new(Suit::Diamonds, Value::Queen);
    /// let jack = Card::new(Suit::Spades, Value::Jack);
    /// assert!(queen.is_higher_than(&jack));
    /// assert!(!jack.is_higher_than(&queen));
    /// ```
    pub fn is_higher_than(&self, other: &Card) -> bool {
        self.cmp(other) == Ordering::Greater
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.suit.strength().cmp(&other.suit.strength()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return write!(f, "Joker");
        }
        write!(f, "{} of {}", self.value.name(), self.suit.name())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_values() -> [Value; 13] {
    [
        Value::Ace,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
    ]
}

/// Canonical deck order: suits Clubs..Spades, values Ace..King, then two jokers if asked.
pub fn full_deck(include_jokers: bool) -> Vec<Card> {
    let mut v = Vec::with_capacity(54);
    for &s in &all_suits() {
        for &r in &all_values() {
            v.push(Card::new(s, r));
        }
    }
    if include_jokers {
        v.push(Card::joker());
        v.push(Card::joker());
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_increase_two_through_ace() {
        let ranks: Vec<u8> = all_values().iter().map(|v| v.rank()).collect();
        assert_eq!(ranks, vec![14, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]);
        assert_eq!(Value::Joker.rank(), 0);
        assert_eq!(Value::Ace.face(), 1);
    }

    #[test]
    fn suit_order_breaks_value_ties() {
        let spade = Card::new(Suit::Spades, Value::Seven);
        let heart = Card::new(Suit::Hearts, Value::Seven);
        let diamond = Card::new(Suit::Diamonds, Value::Seven);
        let club = Card::new(Suit::Clubs, Value::Seven);
        assert!(spade.is_higher_than(&heart));
        assert!(heart.is_higher_than(&diamond));
        assert!(diamond.is_higher_than(&club));
        assert!(!club.is_higher_than(&spade));
        assert!(!spade.is_higher_than(&spade));
    }

    #[test]
    fn image_id_is_structural() {
        assert_eq!(Card::new(Suit::Diamonds, Value::Queen).image_id(), "D-Q");
        assert_eq!(Card::new(Suit::Spades, Value::Jack).image_id(), "S-J");
        assert_eq!(Card::new(Suit::Hearts, Value::Ten).image_id(), "H-10");
        assert_eq!(Card::joker().image_id(), "J-J");
    }

    #[test]
    fn display_reads_naturally() {
        assert_eq!(
            Card::new(Suit::Diamonds, Value::Queen).to_string(),
            "Queen of Diamonds"
        );
        assert_eq!(Card::new(Suit::Clubs, Value::Nine).to_string(), "9 of Clubs");
        assert_eq!(Card::joker().to_string(), "Joker");
    }

    #[test]
    fn full_deck_sizes() {
        assert_eq!(full_deck(false).len(), 52);
        let with_jokers = full_deck(true);
        assert_eq!(with_jokers.len(), 54);
        assert!(with_jokers[52].is_joker() && with_jokers[53].is_joker());
    }
}
