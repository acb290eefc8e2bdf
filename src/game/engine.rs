use std::collections::HashSet;

use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use uuid::Uuid;

use crate::{
    dictionary::WordList,
    game::{scramble::scramble, GameError, GuessValidator, Scorer},
    models::{GameSettings, GameState},
};

/// Commands accepted from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reset,
    UpdateGuess(String),
    SubmitGuess,
    SkipRound,
}

/// Engine-private state of the running session
#[derive(Debug)]
struct Session {
    id: Uuid,
    /// Unscrambled answer for the active round
    current_word: String,
    /// Words already presented; one entry per round played
    used_words: HashSet<String>,
    /// In-flight user input, kept outside the committed snapshot
    pending_guess: String,
}

impl Session {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            current_word: String::new(),
            used_words: HashSet::new(),
            pending_guess: String::new(),
        }
    }
}

/// Single-player unscramble game.
///
/// Every mutating command runs to completion and returns the new snapshot.
/// The engine takes `&mut self` for all mutations, so callers hosting it
/// behind an async front end must serialize access themselves.
pub struct GameEngine {
    words: WordList,
    settings: GameSettings,
    scorer: Scorer,
    rng: StdRng,
    session: Session,
    state: GameState,
}

impl GameEngine {
    /// Create an engine seeded from the operating system and start a session
    pub fn new(words: WordList, settings: GameSettings) -> Result<Self, GameError> {
        Self::with_rng(words, settings, StdRng::from_os_rng())
    }

    /// Create an engine with a deterministic seed
    pub fn with_seed(words: WordList, settings: GameSettings, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(words, settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: WordList, settings: GameSettings, rng: StdRng) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        settings.check_score_bound()?;
        // Word selection can never run out of unused words within a session
        if settings.max_rounds > words.len() {
            return Err(GameError::NotEnoughWords {
                max_rounds: settings.max_rounds,
                available: words.len(),
            });
        }

        let mut engine = Self {
            words,
            settings,
            scorer: Scorer::new(settings.score_increase),
            rng,
            session: Session::new(),
            state: GameState::first_round(String::new()),
        };
        engine.reset();
        Ok(engine)
    }

    /// Latest snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current contents of the guess buffer
    pub fn pending_guess(&self) -> &str {
        &self.session.pending_guess
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    /// Dispatch a presentation-layer command
    pub fn apply(&mut self, command: Command) -> GameState {
        match command {
            Command::Reset => self.reset(),
            Command::UpdateGuess(text) => {
                self.update_guess(text);
                self.state.clone()
            }
            Command::SubmitGuess => self.submit_guess(),
            Command::SkipRound => self.skip_round(),
        }
    }

    /// Start a new session from round one
    pub fn reset(&mut self) -> GameState {
        self.session = Session::new();
        self.state = match self.pick_word() {
            Some(scrambled) => GameState::first_round(scrambled),
            None => {
                tracing::error!("Session {}: word list exhausted", self.session.id);
                GameState {
                    is_game_over: true,
                    ..GameState::first_round(String::new())
                }
            }
        };

        tracing::info!(
            "Session {} started ({} rounds, {} words available)",
            self.session.id,
            self.settings.max_rounds,
            self.words.len()
        );

        self.state.clone()
    }

    /// Replace the guess buffer
    pub fn update_guess(&mut self, text: impl Into<String>) {
        self.session.pending_guess = text.into();
    }

    /// Check the guess buffer against the current word
    pub fn submit_guess(&mut self) -> GameState {
        if self.state.is_game_over {
            tracing::warn!("Session {}: guess submitted after game over", self.session.id);
            return self.state.clone();
        }

        if GuessValidator::is_correct(&self.session.pending_guess, &self.session.current_word) {
            tracing::debug!(
                "Session {}: round {} guessed correctly",
                self.session.id,
                self.state.current_word_count
            );
            let updated_score = self.scorer.award(self.state.score);
            self.advance_round(updated_score);
        } else {
            tracing::debug!(
                "Session {}: wrong guess '{}' in round {}",
                self.session.id,
                self.session.pending_guess,
                self.state.current_word_count
            );
            self.state = GameState {
                is_guessed_word_wrong: true,
                ..self.state.clone()
            };
        }

        self.session.pending_guess.clear();
        self.state.clone()
    }

    /// Give up on the current word without scoring
    pub fn skip_round(&mut self) -> GameState {
        if self.state.is_game_over {
            tracing::warn!("Session {}: round skipped after game over", self.session.id);
            return self.state.clone();
        }

        tracing::debug!(
            "Session {}: round {} skipped",
            self.session.id,
            self.state.current_word_count
        );
        self.advance_round(self.state.score);
        self.session.pending_guess.clear();
        self.state.clone()
    }

    /// Move to the next round, or end the session after the last one
    fn advance_round(&mut self, updated_score: u32) {
        if self.session.used_words.len() >= self.settings.max_rounds {
            self.finish(updated_score);
            return;
        }

        match self.pick_word() {
            Some(scrambled) => {
                self.state = GameState {
                    current_scrambled_word: scrambled,
                    current_word_count: self.state.current_word_count + 1,
                    score: updated_score,
                    is_guessed_word_wrong: false,
                    is_game_over: false,
                };
            }
            None => {
                tracing::error!("Session {}: word list exhausted", self.session.id);
                self.finish(updated_score);
            }
        }
    }

    fn finish(&mut self, final_score: u32) {
        self.state = GameState {
            score: final_score,
            is_guessed_word_wrong: false,
            is_game_over: true,
            ..self.state.clone()
        };

        tracing::info!(
            "Session {} over with score {}",
            self.session.id,
            final_score
        );
    }

    /// Draw an unused word, record it, and return its scrambled form
    fn pick_word(&mut self) -> Option<String> {
        let unused: Vec<&str> = self
            .words
            .iter()
            .filter(|word| !self.session.used_words.contains(*word))
            .collect();
        let word = unused.choose(&mut self.rng)?.to_string();

        let scrambled = scramble(&word, &mut self.rng);
        self.session.used_words.insert(word.clone());
        self.session.current_word = word;
        Some(scrambled)
    }
}
