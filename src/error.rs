use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("target score must be positive")]
    InvalidTargetScore,
    #[error("min_dice out of range (got={got}, max={max})")]
    MinDiceOutOfRange { got: u8, max: u8 },
    #[error("des_dice out of range (got={got}, max={max})")]
    DesDiceOutOfRange { got: u8, max: u8 },
    #[error("malformed strategy `{0}`, expected TARGET:MIN_DICE:DES_DICE")]
    MalformedStrategy(String),
    #[error("game count must be positive")]
    NoGames,
    #[error("win threshold must be positive")]
    InvalidWinThreshold,
    #[error("round limit must be positive when set")]
    InvalidRoundLimit,
    #[error("turn count must be positive")]
    NoTurns,
    #[error("no strategy to evaluate")]
    NoStrategies,
}
