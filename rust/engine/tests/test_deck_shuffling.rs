use std::collections::HashSet;

use betcha_engine::cards::{full_deck, Card, Suit, Value};
use betcha_engine::deck::Deck;

#[test]
fn fresh_deck_holds_52_unique_cards() {
    let mut deck = Deck::new_with_seed(false, 42);
    assert_eq!(deck.cards_total(), 52);
    let all = deck.deal(52);
    let set: HashSet<Card> = all.iter().copied().collect();
    assert_eq!(set.len(), 52);
    assert_eq!(deck.cards_total(), 0);
}

#[test]
fn jokers_extend_the_deck_to_54() {
    let mut deck = Deck::new_with_seed(true, 42);
    assert_eq!(deck.size(), 54);
    deck.shuffle();
    let jokers = deck.deal(54).iter().filter(|c| c.is_joker()).count();
    assert_eq!(jokers, 2);
}

#[test]
fn dealing_reduces_cards_total() {
    let mut deck = Deck::new_with_seed(false, 3);
    deck.shuffle();
    let dealt = deck.deal(7);
    assert_eq!(dealt.len(), 7);
    assert_eq!(deck.cards_total(), 45);
    assert_eq!(deck.cursor(), 7);
}

#[test]
fn unshuffled_deck_deals_in_canonical_order() {
    let mut deck = Deck::new_with_seed(false, 0);
    let first = deck.deal(2);
    assert_eq!(first[0], Card::new(Suit::Clubs, Value::Ace));
    assert_eq!(first[1], Card::new(Suit::Clubs, Value::Two));
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(false, 12345);
    let mut d2 = Deck::new_with_seed(false, 12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.deal(10), d2.deal(10), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(false, 1);
    let mut d2 = Deck::new_with_seed(false, 2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(d1.deal(52), d2.deal(52));
}

#[test]
fn shuffle_is_a_permutation_of_the_full_deck() {
    let mut deck = Deck::new_with_seed(false, 77);
    deck.shuffle();
    let mut dealt = deck.deal(52);
    let mut canonical = full_deck(false);
    assert_ne!(dealt, canonical);
    dealt.sort();
    canonical.sort();
    assert_eq!(dealt, canonical);
}

#[test]
fn reshuffle_restores_the_whole_supply() {
    let mut deck = Deck::new_with_seed(false, 5);
    deck.shuffle();
    let first_pass = deck.deal(30);
    deck.shuffle();
    assert_eq!(deck.cards_total(), 52);
    let second_pass = deck.deal(30);
    assert_ne!(first_pass, second_pass);
}

#[test]
fn stacked_deck_deals_in_given_order() {
    let top = vec![
        Card::new(Suit::Spades, Value::Ace),
        Card::new(Suit::Hearts, Value::Seven),
    ];
    let mut deck = Deck::from_cards(top.clone(), 0);
    assert_eq!(deck.size(), 2);
    assert_eq!(deck.deal(5), top);
    assert!(deck.deal(1).is_empty());
}
