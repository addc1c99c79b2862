use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Number of times the single-pass swap shuffle is repeated per [`Deck::shuffle`].
pub const SHUFFLE_PASSES: usize = 8;

/// An ordered, shuffleable, one-way-consumable supply of cards.
///
/// The card array never changes after construction. Shuffling permutes a list of
/// positions into it, and dealing walks that permutation with a cursor that only
/// moves forward until the next shuffle.
///
/// # Examples
///
/// ```
/// use betcha_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(false, 42);
/// deck.shuffle();
/// let hole = deck.deal(2);
/// assert_eq!(hole.len(), 2);
/// assert_eq!(deck.cards_total(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in canonical order
    cards: Vec<Card>,
    /// Permutation of positions into `cards`
    order: Vec<usize>,
    /// Next position in `order` to deal
    cursor: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds a deck seeded from the thread RNG.
    pub fn new(include_jokers: bool) -> Self {
        Self::new_with_seed(include_jokers, rand::random())
    }

    pub fn new_with_seed(include_jokers: bool, seed: u64) -> Self {
        let cards = full_deck(include_jokers);
        let order = (0..cards.len()).collect();
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards,
            order,
            cursor: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Builds a deck that deals `cards` in the given order until it is shuffled.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        let order = (0..cards.len()).collect();
        Self {
            cards,
            order,
            cursor: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Rewinds the cursor and re-permutes the existing order.
    pub fn shuffle(&mut self) {
        self.cursor = 0;
        let n = self.order.len();
        for _ in 0..SHUFFLE_PASSES {
            for j in 0..n {
                let r = self.rng.random_range(j..n);
                self.order.swap(j, r);
            }
        }
    }

    /// Deals up to `n` cards from the cursor.
    ///
    /// Returns fewer than `n` cards once the supply runs out; the cursor saturates at
    /// the deck size. Callers check [`Deck::cards_total`] before relying on a full deal.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        if n == 0 {
            return Vec::new();
        }
        let end = self.cursor.saturating_add(n).min(self.order.len());
        let dealt = self.order[self.cursor..end]
            .iter()
            .map(|&i| self.cards[i])
            .collect();
        self.cursor = end;
        dealt
    }

    pub fn cards_total(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_deal_does_not_advance() {
        let mut deck = Deck::new_with_seed(false, 1);
        assert!(deck.deal(0).is_empty());
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn overdeal_saturates() {
        let mut deck = Deck::new_with_seed(false, 1);
        assert_eq!(deck.deal(50).len(), 50);
        let rest = deck.deal(5);
        assert_eq!(rest.len(), 2);
        assert_eq!(deck.cards_total(), 0);
        assert_eq!(deck.cursor(), 52);
        assert!(deck.deal(1).is_empty());
    }

    #[test]
    fn shuffle_rewinds_cursor() {
        let mut deck = Deck::new_with_seed(false, 9);
        deck.deal(20);
        deck.shuffle();
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.cards_total(), 52);
    }
}
