pub mod game;

pub use game::{GameSettings, GameState, DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE};
