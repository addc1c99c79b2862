use crate::errors::GameError;
use crate::game::{Action, RoundState, DOUBLE_BET, SHOWDOWN_STEP, SMALL_BET};
use crate::hand::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Bet(u32),
    /// Bet that exchanges the player's hole cards before dealing
    DoubleBet(u32),
    Reset,
    ResetDeck,
}

/// Double-bet gate for the state reached after dealing at step 0, 1 and 2:
/// `(minimum cards left, minimum balance)`.
const DOUBLE_BET_GATES: [(usize, u32); 3] = [(4, 20), (3, 15), (2, 10)];

/// Validates an action against the current round state without changing it.
///
/// Converts an [`Action`] into a [`ValidatedAction`], enforcing that bets are
/// affordable, placed before the showdown, and fully covered by the deck.
///
/// # Errors
///
/// - [`GameError::UnknownAction`] - the action kind is not recognised
/// - [`GameError::InvalidBetAmount`] - a bet of zero
/// - [`GameError::RoundComplete`] - a bet after the showdown
/// - [`GameError::InsufficientMoney`] - a bet larger than the balance
/// - [`GameError::RoundNotCovered`] - a bet that leaves too little for the small bets still to come
/// - [`GameError::DeckExhausted`] - the deck cannot supply the cards the bet deals
/// - [`GameError::RoundInProgress`] - a reset between the first bet and the showdown
/// - [`GameError::GameOver`] - a reset when only a fresh deck can continue
///
/// # Examples
///
/// ```
/// use betcha_engine::game::{Action, RoundState};
/// use betcha_engine::rules::{validate_action, ValidatedAction};
/// use betcha_engine::errors::GameError;
///
/// let state = RoundState::new(100, Some(7));
/// assert_eq!(
///     validate_action(&state, &Action::small_bet()),
///     Ok(ValidatedAction::Bet(5))
/// );
/// assert_eq!(
///     validate_action(&state, &Action::Bet { amount: 500 }),
///     Err(GameError::InsufficientMoney { amount: 500, balance: 100 })
/// );
/// ```
pub fn validate_action(state: &RoundState, action: &Action) -> Result<ValidatedAction, GameError> {
    match action {
        Action::Unknown => Err(GameError::UnknownAction),
        Action::ResetDeck => Ok(ValidatedAction::ResetDeck),
        Action::Reset => {
            if state.game_over {
                Err(GameError::GameOver)
            } else if state.step > 0 && state.step < SHOWDOWN_STEP {
                Err(GameError::RoundInProgress { step: state.step })
            } else {
                Ok(ValidatedAction::Reset)
            }
        }
        &Action::Bet { amount } => {
            if amount == 0 {
                return Err(GameError::InvalidBetAmount { amount });
            }
            if state.step >= SHOWDOWN_STEP {
                return Err(GameError::RoundComplete);
            }
            if amount > state.player_money {
                return Err(GameError::InsufficientMoney {
                    amount,
                    balance: state.player_money,
                });
            }
            let committed = round_commitment(state.step, amount);
            if committed > state.player_money {
                return Err(GameError::RoundNotCovered {
                    needed: committed,
                    balance: state.player_money,
                });
            }
            let exchange = amount == DOUBLE_BET;
            let needed = cards_needed(state.step, exchange && !state.player_cards.is_empty());
            let remaining = state.deck.cards_total();
            if needed > remaining {
                return Err(GameError::DeckExhausted { needed, remaining });
            }
            if exchange {
                Ok(ValidatedAction::DoubleBet(amount))
            } else {
                Ok(ValidatedAction::Bet(amount))
            }
        }
    }
}

/// Balance a bet of `amount` at `step` commits: the bet plus one small bet for every later step.
///
/// A round that starts must be able to reach the showdown, otherwise the purse is stranded.
pub fn round_commitment(step: u8, amount: u32) -> u32 {
    let later = u32::from(SHOWDOWN_STEP.saturating_sub(step.saturating_add(1)));
    amount.saturating_add(later * SMALL_BET)
}

/// Whether `player_money` pays for a whole round of small bets.
pub fn can_open_round(player_money: u32) -> bool {
    player_money >= round_commitment(0, SMALL_BET)
}

/// Cards a bet at `step` deals, including a two-card hole exchange.
pub fn cards_needed(step: u8, exchange: bool) -> usize {
    let dealt = match step {
        0 => 7,
        1 | 2 => 1,
        _ => 0,
    };
    if exchange {
        dealt + 2
    } else {
        dealt
    }
}

/// Whether a double bet is offered once the deal for `step` is done.
pub fn double_bet_available(step: u8, cards_left: usize, player_money: u32) -> bool {
    match DOUBLE_BET_GATES.get(usize::from(step)) {
        Some(&(min_cards, min_money)) => cards_left >= min_cards && player_money >= min_money,
        None => false,
    }
}

/// Bonus paid on top of the purse when the player wins on category.
pub fn bonus_for(category: Category) -> u32 {
    match category {
        Category::RoyalFlush => 100,
        Category::StraightFlush => 50,
        Category::FourOfAKind => 40,
        Category::FullHouse => 30,
        Category::Flush => 25,
        Category::Straight => 20,
        Category::ThreeOfAKind => 15,
        Category::TwoPair => 10,
        Category::Pair => 5,
        Category::HighCard => 0,
    }
}
