use thiserror::Error;

/// Configuration errors rejected when a game is set up
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("a session needs at least one round")]
    NoRounds,

    #[error("points per correct guess must be positive")]
    NoScoreIncrease,

    #[error("{max_rounds} rounds of {score_increase} points overflow the score")]
    ScoreOverflow {
        max_rounds: usize,
        score_increase: u32,
    },

    #[error("word list is empty")]
    EmptyWordList,

    #[error("{max_rounds} rounds requested but the word list only holds {available} distinct words")]
    NotEnoughWords { max_rounds: usize, available: usize },
}
