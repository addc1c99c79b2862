use betcha_engine::cards::{Card, Suit, Value};
use betcha_engine::deck::Deck;
use betcha_engine::errors::GameError;
use betcha_engine::hand::{Category, Hand};

fn c(suit: Suit, value: Value) -> Card {
    Card::new(suit, value)
}

fn hand(cards: &[Card]) -> Hand {
    Hand::new(cards.to_vec())
}

#[test]
fn five_card_full_house() {
    let h = hand(&[
        c(Suit::Diamonds, Value::Two),
        c(Suit::Clubs, Value::Two),
        c(Suit::Diamonds, Value::Three),
        c(Suit::Clubs, Value::Three),
        c(Suit::Spades, Value::Three),
    ]);
    assert!(h.is_full_house());
    assert_eq!(h.evaluate(), Category::FullHouse);
}

#[test]
fn seven_card_full_house_ignores_kickers() {
    let h = hand(&[
        c(Suit::Diamonds, Value::Two),
        c(Suit::Clubs, Value::Two),
        c(Suit::Diamonds, Value::Three),
        c(Suit::Clubs, Value::Three),
        c(Suit::Spades, Value::Three),
        c(Suit::Hearts, Value::Nine),
        c(Suit::Spades, Value::King),
    ]);
    assert_eq!(h.evaluate(), Category::FullHouse);
}

#[test]
fn four_of_a_kind_also_answers_lower_probes() {
    let h = hand(&[
        c(Suit::Clubs, Value::Eight),
        c(Suit::Diamonds, Value::Eight),
        c(Suit::Hearts, Value::Eight),
        c(Suit::Spades, Value::Eight),
        c(Suit::Clubs, Value::King),
    ]);
    assert!(h.is_four_of_a_kind());
    assert!(h.is_three_of_a_kind());
    assert!(h.is_pair());
    assert_eq!(h.evaluate(), Category::FourOfAKind);
}

#[test]
fn three_of_a_kind_is_not_two_pair() {
    let h = hand(&[
        c(Suit::Clubs, Value::Four),
        c(Suit::Diamonds, Value::Four),
        c(Suit::Hearts, Value::Four),
        c(Suit::Spades, Value::Nine),
        c(Suit::Clubs, Value::King),
    ]);
    assert!(!h.is_two_pair());
    assert!(!h.is_full_house());
    assert_eq!(h.evaluate(), Category::ThreeOfAKind);
}

#[test]
fn two_pair_and_pair() {
    let two_pair = hand(&[
        c(Suit::Clubs, Value::Four),
        c(Suit::Diamonds, Value::Four),
        c(Suit::Hearts, Value::Jack),
        c(Suit::Spades, Value::Jack),
        c(Suit::Clubs, Value::King),
    ]);
    assert_eq!(two_pair.evaluate(), Category::TwoPair);

    let pair = hand(&[
        c(Suit::Clubs, Value::Four),
        c(Suit::Diamonds, Value::Four),
        c(Suit::Hearts, Value::Jack),
        c(Suit::Spades, Value::Seven),
        c(Suit::Clubs, Value::King),
    ]);
    assert!(!pair.is_two_pair());
    assert_eq!(pair.evaluate(), Category::Pair);
}

#[test]
fn ace_high_straight() {
    let h = hand(&[
        c(Suit::Hearts, Value::Ten),
        c(Suit::Clubs, Value::Jack),
        c(Suit::Hearts, Value::Queen),
        c(Suit::Spades, Value::King),
        c(Suit::Diamonds, Value::Ace),
    ]);
    assert!(h.is_straight());
    assert!(!h.is_flush());
    assert_eq!(h.evaluate(), Category::Straight);
}

#[test]
fn wheel_counts_ace_low() {
    let h = hand(&[
        c(Suit::Hearts, Value::Ace),
        c(Suit::Clubs, Value::Two),
        c(Suit::Hearts, Value::Three),
        c(Suit::Spades, Value::Four),
        c(Suit::Diamonds, Value::Five),
    ]);
    assert_eq!(h.evaluate(), Category::Straight);
}

#[test]
fn ace_does_not_wrap_around() {
    let h = hand(&[
        c(Suit::Hearts, Value::Queen),
        c(Suit::Clubs, Value::King),
        c(Suit::Hearts, Value::Ace),
        c(Suit::Spades, Value::Two),
        c(Suit::Diamonds, Value::Three),
    ]);
    assert!(!h.is_straight());
    assert_eq!(h.evaluate(), Category::HighCard);
}

#[test]
fn paired_board_with_a_gap_is_not_a_straight() {
    let h = hand(&[
        c(Suit::Spades, Value::King),
        c(Suit::Hearts, Value::Nine),
        c(Suit::Clubs, Value::Five),
        c(Suit::Diamonds, Value::Four),
        c(Suit::Clubs, Value::Four),
        c(Suit::Diamonds, Value::Three),
        c(Suit::Diamonds, Value::Two),
    ]);
    assert!(!h.is_straight());
    assert_eq!(h.evaluate(), Category::Pair);
}

#[test]
fn duplicated_value_inside_a_run_still_straight() {
    let h = hand(&[
        c(Suit::Spades, Value::Six),
        c(Suit::Hearts, Value::Seven),
        c(Suit::Clubs, Value::Seven),
        c(Suit::Diamonds, Value::Eight),
        c(Suit::Clubs, Value::Nine),
        c(Suit::Diamonds, Value::Ten),
        c(Suit::Diamonds, Value::Two),
    ]);
    assert!(h.is_straight());
    assert_eq!(h.evaluate(), Category::Straight);
}

#[test]
fn flush_needs_five_of_one_suit() {
    let flush = hand(&[
        c(Suit::Hearts, Value::Two),
        c(Suit::Hearts, Value::Seven),
        c(Suit::Hearts, Value::Nine),
        c(Suit::Hearts, Value::Jack),
        c(Suit::Hearts, Value::King),
        c(Suit::Clubs, Value::King),
    ]);
    assert!(flush.is_flush());
    assert_eq!(flush.evaluate(), Category::Flush);

    let four_suited = hand(&[
        c(Suit::Hearts, Value::Two),
        c(Suit::Hearts, Value::Seven),
        c(Suit::Hearts, Value::Nine),
        c(Suit::Hearts, Value::Jack),
        c(Suit::Clubs, Value::King),
    ]);
    assert!(!four_suited.is_flush());
}

#[test]
fn straight_flush_below_ace() {
    let h = hand(&[
        c(Suit::Spades, Value::Five),
        c(Suit::Spades, Value::Six),
        c(Suit::Spades, Value::Seven),
        c(Suit::Spades, Value::Eight),
        c(Suit::Spades, Value::Nine),
    ]);
    assert!(!h.is_royal_flush());
    assert_eq!(h.evaluate(), Category::StraightFlush);
}

#[test]
fn royal_flush() {
    let h = hand(&[
        c(Suit::Diamonds, Value::Ten),
        c(Suit::Diamonds, Value::Jack),
        c(Suit::Diamonds, Value::Queen),
        c(Suit::Diamonds, Value::King),
        c(Suit::Diamonds, Value::Ace),
    ]);
    assert_eq!(h.evaluate(), Category::RoyalFlush);
}

#[test]
fn first_five_of_an_unshuffled_deck_classify_as_royal() {
    // Clubs A-2-3-4-5: suited wheel whose top sorted card is the Ace
    let mut deck = Deck::new_with_seed(false, 0);
    let h = Hand::new(deck.deal(5));
    assert_eq!(h.evaluate(), Category::RoyalFlush);
}

#[test]
fn straight_and_flush_probe_independently() {
    // Straight from mixed suits plus five unrelated hearts
    let h = hand(&[
        c(Suit::Hearts, Value::Two),
        c(Suit::Hearts, Value::Three),
        c(Suit::Clubs, Value::Four),
        c(Suit::Hearts, Value::Five),
        c(Suit::Spades, Value::Six),
        c(Suit::Hearts, Value::Nine),
        c(Suit::Hearts, Value::Queen),
    ]);
    assert!(h.is_straight());
    assert!(h.is_flush());
    assert_eq!(h.evaluate(), Category::StraightFlush);
}

#[test]
fn highest_card_prefers_suit_on_equal_value() {
    let spade_ace = c(Suit::Spades, Value::Ace);
    let heart_ace = c(Suit::Hearts, Value::Ace);
    let diamond_ace = c(Suit::Diamonds, Value::Ace);
    let king = c(Suit::Spades, Value::King);

    assert_eq!(Hand::highest_card(&[heart_ace, spade_ace]), Ok(spade_ace));
    assert_eq!(Hand::highest_card(&[diamond_ace, heart_ace, king]), Ok(heart_ace));
    assert_eq!(Hand::highest_card(&[king, diamond_ace]), Ok(diamond_ace));
}

#[test]
fn highest_card_ignores_position_among_aces() {
    let club = c(Suit::Clubs, Value::Ace);
    let spade = c(Suit::Spades, Value::Ace);
    let heart = c(Suit::Hearts, Value::Ace);
    let diamond = c(Suit::Diamonds, Value::Ace);

    assert_eq!(Hand::highest_card(&[club, spade, heart, diamond]), Ok(spade));
    assert_eq!(Hand::highest_card(&[club, heart, diamond]), Ok(heart));
    assert_eq!(Hand::highest_card(&[club, diamond]), Ok(diamond));
}

#[test]
fn highest_card_requires_two_cards() {
    assert_eq!(
        Hand::highest_card(&[c(Suit::Spades, Value::Ace)]),
        Err(GameError::InsufficientCards { found: 1 })
    );
    assert_eq!(
        Hand::highest_card(&[]),
        Err(GameError::InsufficientCards { found: 0 })
    );
}

#[test]
fn sort_places_highest_first() {
    let mut h = hand(&[
        c(Suit::Hearts, Value::Two),
        c(Suit::Clubs, Value::Ace),
        c(Suit::Spades, Value::Ace),
    ]);
    h.sort();
    assert_eq!(h.card_at(0), Ok(c(Suit::Spades, Value::Ace)));
    assert_eq!(h.card_at(2), Ok(c(Suit::Hearts, Value::Two)));
}

#[test]
fn display_joins_image_ids() {
    let h = hand(&[c(Suit::Diamonds, Value::Queen), c(Suit::Hearts, Value::Ten)]);
    assert_eq!(h.to_string(), "D-Q, H-10");
}

#[test]
fn building_a_hand_from_board_and_hole() {
    let mut h = Hand::default();
    assert!(h.is_empty());
    h.add_card(c(Suit::Spades, Value::Ace));
    let len = h.add_cards([c(Suit::Hearts, Value::Ace), c(Suit::Clubs, Value::Nine)]);
    assert_eq!(len, 3);
    assert!(h.has_card(&c(Suit::Hearts, Value::Ace)));
    assert!(!h.has_card(&c(Suit::Diamonds, Value::Ace)));
    assert_eq!(
        h.without(&c(Suit::Spades, Value::Ace)),
        vec![c(Suit::Hearts, Value::Ace), c(Suit::Clubs, Value::Nine)]
    );

    h.replace(vec![c(Suit::Diamonds, Value::Two)]);
    assert_eq!(h.len(), 1);
}
