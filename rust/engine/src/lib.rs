//! # betcha-engine: Draw-Poker Round Engine
//!
//! A single-table poker round engine played against the house. Provides the card and
//! deck model, a ten-category hand classifier, and a pure round state machine that
//! sequences bets, reveals community cards, pays out, and detects game over.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Value, Card) and tie-break ordering
//! - [`deck`] - Seedable, cursor-based deck with the 8-pass swap shuffle
//! - [`hand`] - Hand categories and classification of 5–7 cards
//! - [`game`] - Round state, actions, results and the read-only snapshot
//! - [`rules`] - Action validation, double-bet gates and the bonus table
//! - [`engine`] - The `(state, action) -> state` transition function
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use betcha_engine::cards::{Card, Suit, Value};
//! use betcha_engine::hand::{Category, Hand};
//!
//! let hand = Hand::new(vec![
//!     Card::new(Suit::Hearts, Value::Ten),
//!     Card::new(Suit::Clubs, Value::Jack),
//!     Card::new(Suit::Hearts, Value::Queen),
//!     Card::new(Suit::Spades, Value::King),
//!     Card::new(Suit::Diamonds, Value::Ace),
//! ]);
//! assert_eq!(hand.evaluate(), Category::Straight);
//! ```
//!
//! ## Playing a Round
//!
//! Every action consumes the previous state and returns the next one:
//!
//! ```rust
//! use betcha_engine::engine::reduce;
//! use betcha_engine::game::{Action, RoundState, Winner};
//!
//! let mut state = RoundState::new(100, Some(42));
//! for _ in 0..4 {
//!     state = reduce(state, &Action::small_bet());
//! }
//! assert!(state.is_round_complete());
//! assert_ne!(state.results().winner, Winner::None);
//! assert_eq!(state.purse(), 0);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod rules;
