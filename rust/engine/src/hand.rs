use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Value};
use crate::errors::GameError;

/// The ten hand categories, weakest first. Derived ordering is strength ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A 5–7 card collection built fresh for one showdown and classified with [`Hand::evaluate`].
///
/// Each `is_*` probe is independent: a four of a kind also answers true to
/// [`Hand::is_three_of_a_kind`] and [`Hand::is_pair`]. Probes sort private copies and
/// never reorder the hand itself.
///
/// # Examples
///
/// ```
/// use betcha_engine::cards::{Card, Suit, Value};
/// use betcha_engine::hand::{Category, Hand};
///
/// let hand = Hand::new(vec![
///     Card::new(Suit::Diamonds, Value::Two),
///     Card::new(Suit::Clubs, Value::Two),
///     Card::new(Suit::Diamonds, Value::Three),
///     Card::new(Suit::Clubs, Value::Three),
///     Card::new(Suit::Spades, Value::Three),
/// ]);
/// assert_eq!(hand.evaluate(), Category::FullHouse);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Best single card by [`Card::is_higher_than`]; used for the hole-card tie-break.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsufficientCards`] for fewer than two cards.
    pub fn highest_card(cards: &[Card]) -> Result<Card, GameError> {
        if cards.len() < 2 {
            return Err(GameError::InsufficientCards { found: cards.len() });
        }
        let highest = cards[1..].iter().fold(cards[0], |best, next| {
            if next.is_higher_than(&best) {
                *next
            } else {
                best
            }
        });
        Ok(highest)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_at(&self, index: usize) -> Result<Card, GameError> {
        self.cards
            .get(index)
            .copied()
            .ok_or(GameError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Appends cards and returns the new hand size.
    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) -> usize {
        self.cards.extend(cards);
        self.cards.len()
    }

    /// Replaces the whole hand with a freshly dealt set.
    pub fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub fn has_card(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// All cards except those sharing `card`'s identity.
    pub fn without(&self, card: &Card) -> Vec<Card> {
        self.cards.iter().filter(|c| *c != card).copied().collect()
    }

    /// Sorts highest first by the tie-break order.
    pub fn sort(&mut self) {
        self.cards.sort_unstable_by(|a, b| b.cmp(a));
    }

    pub fn is_pair(&self) -> bool {
        has_pair(&self.cards)
    }

    pub fn is_three_of_a_kind(&self) -> bool {
        any_card_matches(&self.cards, |m| m >= 2)
    }

    pub fn is_four_of_a_kind(&self) -> bool {
        any_card_matches(&self.cards, |m| m == 3)
    }

    /// A pair remains after every card of the first paired value is removed.
    pub fn is_two_pair(&self) -> bool {
        match first_value_matching(&self.cards, |m| m >= 1) {
            Some(value) => has_pair(&without_value(&self.cards, value)),
            None => false,
        }
    }

    /// A pair remains after every card of the first tripled value is removed.
    pub fn is_full_house(&self) -> bool {
        if !self.is_three_of_a_kind() {
            return false;
        }
        match first_value_matching(&self.cards, |m| m == 2) {
            Some(value) => has_pair(&without_value(&self.cards, value)),
            None => false,
        }
    }

    /// Some suit appears on at least five cards.
    pub fn is_flush(&self) -> bool {
        (0..self.cards.len()).any(|i| {
            let suit = self.cards[i].suit;
            self.cards
                .iter()
                .enumerate()
                .filter(|&(j, c)| j != i && c.suit == suit)
                .count()
                >= 4
        })
    }

    /// Five consecutive values with Ace low (A-2-3-4-5) or Ace high (10-J-Q-K-A).
    pub fn is_straight(&self) -> bool {
        if self.cards.len() < 5 {
            return false;
        }

        // ace-low: Ace counts as 1
        let mut faces: Vec<u8> = self.cards.iter().map(|c| c.value.face()).collect();
        faces.sort_unstable_by(|a, b| b.cmp(a));
        faces.dedup();
        if has_run(&faces) {
            return true;
        }

        // ace-high: Ace counts as 14
        let mut sorted = self.clone();
        sorted.sort();
        let mut ranks: Vec<u8> = sorted.cards.iter().map(|c| c.rank()).collect();
        ranks.dedup();
        has_run(&ranks)
    }

    /// Straight and flush probed independently; they need not share the same five cards.
    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    /// Straight flush whose highest card is an Ace.
    pub fn is_royal_flush(&self) -> bool {
        if !self.is_straight_flush() {
            return false;
        }
        let mut sorted = self.clone();
        sorted.sort();
        matches!(sorted.card_at(0), Ok(top) if top.value == Value::Ace)
    }

    /// Strongest applicable category, checked from RoyalFlush down.
    pub fn evaluate(&self) -> Category {
        if self.is_royal_flush() {
            Category::RoyalFlush
        } else if self.is_straight_flush() {
            Category::StraightFlush
        } else if self.is_four_of_a_kind() {
            Category::FourOfAKind
        } else if self.is_full_house() {
            Category::FullHouse
        } else if self.is_flush() {
            Category::Flush
        } else if self.is_straight() {
            Category::Straight
        } else if self.is_three_of_a_kind() {
            Category::ThreeOfAKind
        } else if self.is_two_pair() {
            Category::TwoPair
        } else if self.is_pair() {
            Category::Pair
        } else {
            Category::HighCard
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.cards.iter().map(Card::image_id).collect();
        f.write_str(&ids.join(", "))
    }
}

/// How many other cards share the value of the card at `index`.
fn count_matches(cards: &[Card], index: usize) -> usize {
    let value = cards[index].value;
    cards
        .iter()
        .enumerate()
        .filter(|&(i, c)| i != index && c.value == value)
        .count()
}

fn any_card_matches(cards: &[Card], pred: impl Fn(usize) -> bool) -> bool {
    (0..cards.len()).any(|i| pred(count_matches(cards, i)))
}

fn first_value_matching(cards: &[Card], pred: impl Fn(usize) -> bool) -> Option<Value> {
    (0..cards.len())
        .find(|&i| pred(count_matches(cards, i)))
        .map(|i| cards[i].value)
}

fn has_pair(cards: &[Card]) -> bool {
    any_card_matches(cards, |m| m >= 1)
}

fn without_value(cards: &[Card], value: Value) -> Vec<Card> {
    cards.iter().filter(|c| c.value != value).copied().collect()
}

/// `values` sorted descending and deduplicated; any 5-window stepping down by exactly 1.
fn has_run(values: &[u8]) -> bool {
    values
        .windows(5)
        .any(|w| w.windows(2).all(|p| p[0] == p[1] + 1))
}
