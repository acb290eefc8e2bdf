// Game engine modules

pub mod engine;
pub mod error;
pub mod scorer;
pub mod scramble;
pub mod validator;

pub use engine::{Command, GameEngine};
pub use error::GameError;
pub use scorer::Scorer;
pub use validator::GuessValidator;
