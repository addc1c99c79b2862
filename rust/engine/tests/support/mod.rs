#![allow(dead_code)]

use betcha_engine::cards::{full_deck, Card, Suit, Value};
use betcha_engine::deck::Deck;
use betcha_engine::game::RoundState;

pub fn c(suit: Suit, value: Value) -> Card {
    Card::new(suit, value)
}

/// Deck that deals `top` first, then the rest of a standard deck in canonical order.
pub fn stacked_deck(top: &[Card]) -> Deck {
    let mut cards = top.to_vec();
    cards.extend(full_deck(false).into_iter().filter(|card| !top.contains(card)));
    Deck::from_cards(cards, 0)
}

pub fn stacked_game(top: &[Card], money: u32) -> RoundState {
    RoundState::with_deck(stacked_deck(top), money)
}

/// House C2 D7, player HA HK, board H2 H5 H9 SJ D3: player flush beats house pair.
pub fn player_flush_deal() -> Vec<Card> {
    vec![
        c(Suit::Clubs, Value::Two),
        c(Suit::Diamonds, Value::Seven),
        c(Suit::Hearts, Value::Ace),
        c(Suit::Hearts, Value::King),
        c(Suit::Hearts, Value::Two),
        c(Suit::Hearts, Value::Five),
        c(Suit::Hearts, Value::Nine),
        c(Suit::Spades, Value::Jack),
        c(Suit::Diamonds, Value::Three),
    ]
}

/// Same board with the hole cards swapped: house flush beats player pair.
pub fn house_flush_deal() -> Vec<Card> {
    let mut cards = player_flush_deal();
    cards.swap(0, 2);
    cards.swap(1, 3);
    cards
}

/// House C3 D4, player HQ D8, board S2 D2 C9 HJ CK: both pair, player holds the best hole card.
pub fn paired_board_deal() -> Vec<Card> {
    vec![
        c(Suit::Clubs, Value::Three),
        c(Suit::Diamonds, Value::Four),
        c(Suit::Hearts, Value::Queen),
        c(Suit::Diamonds, Value::Eight),
        c(Suit::Spades, Value::Two),
        c(Suit::Diamonds, Value::Two),
        c(Suit::Clubs, Value::Nine),
        c(Suit::Hearts, Value::Jack),
        c(Suit::Clubs, Value::King),
    ]
}
