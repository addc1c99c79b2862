//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "betcha",
    version,
    about = "Betcha: draw poker against the house"
)]
pub struct BetchaCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds against the house, reading commands from stdin
    Play {
        /// Stop after this many showdowns (auto mode defaults to 1)
        #[arg(long)]
        rounds: Option<u32>,
        /// Seed for a reproducible deck; overrides BETCHA_SEED
        #[arg(long)]
        seed: Option<u64>,
        /// Starting balance; overrides BETCHA_STARTING_MONEY
        #[arg(long)]
        money: Option<u32>,
        /// Place small bets automatically instead of prompting
        #[arg(long)]
        auto: bool,
    },
    /// Shuffle a deck and deal cards from the top
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 5)]
        count: usize,
        /// Add the two jokers before shuffling
        #[arg(long)]
        jokers: bool,
    },
    /// Classify 5 to 7 cards, e.g. `betcha eval AS KS QS JS 10S`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
