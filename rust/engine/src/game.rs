use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::hand::Category;

/// Regular bet placed each step
pub const SMALL_BET: u32 = 5;
/// Bet that also exchanges the player's hole cards
pub const DOUBLE_BET: u32 = 10;
/// Wallet balance at game start
pub const DEFAULT_STARTING_MONEY: u32 = 100;
/// Cards one round consumes: 2 house + 2 player + 3 + 1 + 1 community
pub const MIN_CARDS_PER_ROUND: usize = 9;
/// Step reached once the showdown has been resolved
pub const SHOWDOWN_STEP: u8 = 4;

/// Input to the round state machine.
///
/// Deserialises from `{"kind": "bet", "amount": 5}`, `{"kind": "reset"}` or
/// `{"kind": "reset-deck"}`; any other kind becomes [`Action::Unknown`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Action {
    /// Wager `amount`; an amount equal to [`DOUBLE_BET`] also exchanges hole cards
    Bet { amount: u32 },
    /// Start the next round with the same deck
    Reset,
    /// Start the next round with a freshly shuffled deck
    ResetDeck,
    /// Anything the engine does not recognise; applying it is a no-op
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn small_bet() -> Self {
        Action::Bet { amount: SMALL_BET }
    }

    pub fn double_bet() -> Self {
        Action::Bet { amount: DOUBLE_BET }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    #[default]
    None,
    Player,
    House,
}

/// Outcome of the last showdown; reset to the default between rounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub player: Category,
    pub house: Category,
    pub winner: Winner,
}

impl Default for Results {
    fn default() -> Self {
        Self {
            player: Category::HighCard,
            house: Category::HighCard,
            winner: Winner::None,
        }
    }
}

/// Authoritative state of a single-table game.
///
/// Owns the one [`Deck`] for the life of the game. Each action consumes the previous
/// state and yields the next one through [`crate::engine::reduce`]; nothing else mutates it.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub(crate) deck: Deck,
    /// Betting phase, 0 (nothing dealt) through 4 (showdown resolved)
    pub(crate) step: u8,
    /// Round counter, starting at 1
    pub(crate) round: u32,
    pub(crate) player_money: u32,
    /// Pot accumulated this round
    pub(crate) purse: u32,
    pub(crate) house_cards: Vec<Card>,
    pub(crate) player_cards: Vec<Card>,
    pub(crate) community_cards: Vec<Card>,
    /// Cards retired since the last fresh deck
    pub(crate) used_cards: Vec<Card>,
    pub(crate) can_double_bet: bool,
    pub(crate) game_over: bool,
    pub(crate) results: Results,
}

impl RoundState {
    /// Starts a game with a freshly shuffled deck.
    pub fn new(player_money: u32, seed: Option<u64>) -> Self {
        let mut deck = match seed {
            Some(seed) => Deck::new_with_seed(false, seed),
            None => Deck::new(false),
        };
        deck.shuffle();
        Self::with_deck(deck, player_money)
    }

    /// Starts a game around a deck exactly as given; the caller decides whether to shuffle.
    pub fn with_deck(deck: Deck, player_money: u32) -> Self {
        Self {
            deck,
            step: 0,
            round: 1,
            player_money,
            purse: 0,
            house_cards: Vec::new(),
            player_cards: Vec::new(),
            community_cards: Vec::new(),
            used_cards: Vec::new(),
            can_double_bet: false,
            game_over: false,
            results: Results::default(),
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn player_money(&self) -> u32 {
        self.player_money
    }
    pub fn purse(&self) -> u32 {
        self.purse
    }
    pub fn house_cards(&self) -> &[Card] {
        &self.house_cards
    }
    pub fn player_cards(&self) -> &[Card] {
        &self.player_cards
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }
    pub fn used_cards(&self) -> &[Card] {
        &self.used_cards
    }
    pub fn can_double_bet(&self) -> bool {
        self.can_double_bet
    }
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
    pub fn results(&self) -> Results {
        self.results
    }
    pub fn cards_left(&self) -> usize {
        self.deck.cards_total()
    }
    pub fn is_round_complete(&self) -> bool {
        self.step >= SHOWDOWN_STEP
    }

    /// Read-only copy handed to whatever renders the table.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step: self.step,
            round: self.round,
            player_money: self.player_money,
            purse: self.purse,
            cards_left: self.deck.cards_total(),
            house_cards: self.house_cards.clone(),
            player_cards: self.player_cards.clone(),
            community_cards: self.community_cards.clone(),
            used_cards: self.used_cards.clone(),
            can_double_bet: self.can_double_bet,
            game_over: self.game_over,
            results: self.results,
        }
    }
}

/// Serializable view of a [`RoundState`] without the deck internals.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub step: u8,
    pub round: u32,
    pub player_money: u32,
    pub purse: u32,
    pub cards_left: usize,
    pub house_cards: Vec<Card>,
    pub player_cards: Vec<Card>,
    pub community_cards: Vec<Card>,
    pub used_cards: Vec<Card>,
    pub can_double_bet: bool,
    pub game_over: bool,
    pub results: Results,
}
