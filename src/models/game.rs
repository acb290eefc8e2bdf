use serde::{Deserialize, Serialize};

use crate::game::GameError;

/// Default number of rounds in a session
pub const DEFAULT_MAX_ROUNDS: usize = 10;
/// Default points awarded for a correct guess
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Immutable snapshot of a session, produced after every command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Scrambled form of the word currently in play
    pub current_scrambled_word: String,
    /// 1-based round index within the session
    pub current_word_count: usize,
    pub score: u32,
    /// Set only by a rejected guess, cleared by the next round transition
    pub is_guessed_word_wrong: bool,
    pub is_game_over: bool,
}

impl GameState {
    /// Snapshot for the first round of a fresh session
    pub fn first_round(scrambled_word: String) -> Self {
        Self {
            current_scrambled_word: scrambled_word,
            current_word_count: 1,
            score: 0,
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }
}

/// Per-session rules, validated against the word source at engine construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub max_rounds: usize,
    pub score_increase: u32,
}

impl GameSettings {
    pub fn new(max_rounds: usize, score_increase: u32) -> Result<Self, GameError> {
        if max_rounds == 0 {
            return Err(GameError::NoRounds);
        }
        if score_increase == 0 {
            return Err(GameError::NoScoreIncrease);
        }
        let settings = Self {
            max_rounds,
            score_increase,
        };
        settings.check_score_bound()?;
        Ok(settings)
    }

    /// Highest score a session can reach, if it fits in a `u32`
    pub fn max_score(&self) -> Option<u32> {
        u32::try_from(self.max_rounds)
            .ok()?
            .checked_mul(self.score_increase)
    }

    /// Reject rules whose best possible total would not fit in the score
    pub fn check_score_bound(&self) -> Result<(), GameError> {
        match self.max_score() {
            Some(_) => Ok(()),
            None => Err(GameError::ScoreOverflow {
                max_rounds: self.max_rounds,
                score_increase: self.score_increase,
            }),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            score_increase: DEFAULT_SCORE_INCREASE,
        }
    }
}
