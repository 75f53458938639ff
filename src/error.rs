use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("Invalid suit: {0}")]
    InvalidSuit(String),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),

    #[error("Invalid hand notation: {0}")]
    InvalidHandNotation(String),

    #[error("Hand must be exactly 2 cards")]
    InvalidHandSize,

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Cannot deal {requested} cards, only {available} remaining")]
    NotEnoughDeck { requested: usize, available: usize },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("No valid villain combos after removing dead cards")]
    NoValidCombos,
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
