use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::models::{GameSettings, DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub words: WordsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub max_rounds: usize,
    pub score_increase: u32,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordsConfig {
    /// Word list file; the builtin catalogue is used when unset
    pub path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            max_rounds: env::var("MAX_ROUNDS")
                .unwrap_or_else(|_| DEFAULT_MAX_ROUNDS.to_string())
                .parse()
                .context("MAX_ROUNDS must be a number")?,
            score_increase: env::var("SCORE_INCREASE")
                .unwrap_or_else(|_| DEFAULT_SCORE_INCREASE.to_string())
                .parse()
                .context("SCORE_INCREASE must be a number")?,
            seed: env::var("GAME_SEED")
                .ok()
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("GAME_SEED must be a number")?,
        };

        let words = WordsConfig {
            path: env::var("WORD_LIST_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty()),
        };

        Ok(Config { game, words })
    }

    /// Validated game rules
    pub fn game_settings(&self) -> Result<GameSettings> {
        GameSettings::new(self.game.max_rounds, self.game.score_increase)
            .context("Invalid game settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_settings_validation() {
        let mut config = Config {
            game: GameConfig {
                max_rounds: 10,
                score_increase: 20,
                seed: None,
            },
            words: WordsConfig { path: None },
        };
        assert_eq!(config.game_settings().unwrap(), GameSettings::default());

        config.game.max_rounds = 0;
        assert!(config.game_settings().is_err());
    }
}
