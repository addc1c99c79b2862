use std::cmp::Ordering;

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::{Action, Results, RoundState, Winner, MIN_CARDS_PER_ROUND};
use crate::hand::{Category, Hand};
use crate::rules::{bonus_for, double_bet_available, validate_action, ValidatedAction};

/// Applies one action to a round, returning the next state.
///
/// Rejected actions (unknown kinds, unaffordable bets, bets after the showdown, ...) are
/// logged and leave the state exactly as it was. Use [`try_reduce`] to observe the reason.
///
/// # Examples
///
/// ```
/// use betcha_engine::engine::reduce;
/// use betcha_engine::game::{Action, RoundState};
///
/// let state = RoundState::new(100, Some(12345));
/// let state = reduce(state, &Action::small_bet());
/// assert_eq!(state.step(), 1);
/// assert_eq!(state.player_money(), 95);
/// assert_eq!(state.purse(), 5);
/// assert_eq!(state.community_cards().len(), 3);
/// ```
pub fn reduce(state: RoundState, action: &Action) -> RoundState {
    match validate_action(&state, action) {
        Ok(validated) => apply(state, validated),
        Err(e) => {
            tracing::warn!(
                step = state.step,
                round = state.round,
                ?action,
                error = %e,
                "action rejected"
            );
            state
        }
    }
}

/// Like [`reduce`], but hands the unchanged state back alongside the rejection reason.
pub fn try_reduce(state: RoundState, action: &Action) -> Result<RoundState, (RoundState, GameError)> {
    match validate_action(&state, action) {
        Ok(validated) => Ok(apply(state, validated)),
        Err(e) => Err((state, e)),
    }
}

fn apply(state: RoundState, action: ValidatedAction) -> RoundState {
    let next = match action {
        ValidatedAction::Bet(amount) => bet(state, amount, false),
        ValidatedAction::DoubleBet(amount) => bet(state, amount, true),
        ValidatedAction::Reset => reset(state, false),
        ValidatedAction::ResetDeck => reset(state, true),
    };
    tracing::debug!(
        step = next.step,
        round = next.round,
        player_money = next.player_money,
        purse = next.purse,
        cards_left = next.deck.cards_total(),
        "transition applied"
    );
    next
}

fn bet(mut state: RoundState, amount: u32, exchange: bool) -> RoundState {
    state.player_money -= amount;
    state.purse += amount;

    // No hole cards before the step-0 deal, so a double bet there only raises the stake
    if exchange && !state.player_cards.is_empty() {
        let discarded = std::mem::take(&mut state.player_cards);
        state.used_cards.extend(discarded);
        state.player_cards = state.deck.deal(2);
    }

    match state.step {
        0 => {
            state.house_cards.extend(state.deck.deal(2));
            state.player_cards.extend(state.deck.deal(2));
            state.community_cards.extend(state.deck.deal(3));
        }
        1 | 2 => state.community_cards.extend(state.deck.deal(1)),
        _ => showdown(&mut state),
    }

    state.can_double_bet = double_bet_available(
        state.step,
        state.deck.cards_total(),
        state.player_money,
    );
    state.step += 1;
    state
}

fn showdown(state: &mut RoundState) {
    let player = seven_card_category(&state.community_cards, &state.player_cards);
    let house = seven_card_category(&state.community_cards, &state.house_cards);

    let winner = match player.cmp(&house) {
        Ordering::Greater => Winner::Player,
        Ordering::Less => Winner::House,
        Ordering::Equal => hole_card_tie_break(&state.player_cards, &state.house_cards),
    };

    if winner == Winner::Player {
        let bonus = if player > house { bonus_for(player) } else { 0 };
        state.player_money += state.purse + bonus;
    }
    state.purse = 0;
    state.results = Results {
        player,
        house,
        winner,
    };
    state.game_over = state.deck.cards_total() < MIN_CARDS_PER_ROUND;

    tracing::info!(
        round = state.round,
        %player,
        %house,
        ?winner,
        player_money = state.player_money,
        game_over = state.game_over,
        "showdown"
    );
}

fn seven_card_category(community: &[Card], hole: &[Card]) -> Category {
    let mut hand = Hand::new(community.to_vec());
    hand.add_cards(hole.iter().copied());
    hand.evaluate()
}

/// Compares the best hole card of each side; the house keeps ties it cannot lose.
fn hole_card_tie_break(player: &[Card], house: &[Card]) -> Winner {
    match (Hand::highest_card(player), Hand::highest_card(house)) {
        (Ok(p), Ok(h)) if p.is_higher_than(&h) => Winner::Player,
        (Ok(_), Ok(_)) => Winner::House,
        (Err(e), _) | (_, Err(e)) => {
            // validate_action guarantees a full deal, so both sides hold two hole cards
            tracing::error!(error = %e, "tie-break without two hole cards");
            Winner::House
        }
    }
}

fn reset(mut state: RoundState, fresh_deck: bool) -> RoundState {
    let community = std::mem::take(&mut state.community_cards);
    let house = std::mem::take(&mut state.house_cards);
    let player = std::mem::take(&mut state.player_cards);
    if fresh_deck {
        state.deck.shuffle();
        state.used_cards.clear();
    } else {
        state.used_cards.extend(community);
        state.used_cards.extend(house);
        state.used_cards.extend(player);
    }
    state.step = 0;
    state.round += 1;
    state.can_double_bet = false;
    state.game_over = false;
    state.results = Results::default();
    state
}
