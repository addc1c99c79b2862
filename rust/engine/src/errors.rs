use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Not enough cards to determine highest: {found} given, at least 2 required")]
    InsufficientCards { found: usize },
    #[error("Invalid index ({index}) for {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Unknown action")]
    UnknownAction,
    #[error("Invalid bet amount: {amount}")]
    InvalidBetAmount { amount: u32 },
    #[error("Insufficient money: bet {amount}, balance {balance}")]
    InsufficientMoney { amount: u32, balance: u32 },
    #[error("Balance {balance} cannot cover the rest of the round ({needed} needed)")]
    RoundNotCovered { needed: u32, balance: u32 },
    #[error("Round already complete")]
    RoundComplete,
    #[error("Round still in progress (step {step})")]
    RoundInProgress { step: u8 },
    #[error("Game over: a fresh deck is required")]
    GameOver,
    #[error("Deck exhausted: {needed} cards needed, {remaining} remaining")]
    DeckExhausted { needed: usize, remaining: usize },
}
