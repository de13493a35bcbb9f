//! Monte Carlo comparison of stopping strategies for a five-dice Farkle
//! variant: how many turns does each strategy need to reach a winning total?

pub mod decide;
pub mod dice;
pub mod error;
pub mod likelihood;
pub mod report;
pub mod scoring;
pub mod simulate;
pub mod stats;
pub mod strategy;

pub use decide::{decide, play_turn};
pub use dice::{DiceSet, Die, DieRoller};
pub use error::{Error, Result};
pub use scoring::{Combination, roll_and_score, score_roll};
pub use simulate::{GameOutcome, SimulationConfig, evaluate, play_game, play_games, sweep};
pub use stats::{StrategyResult, summarize};
pub use strategy::Strategy;
