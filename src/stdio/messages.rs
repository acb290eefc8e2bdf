use serde::{Deserialize, Serialize};

use crate::{game::Command, models::GameState};

/// Messages read from the presentation layer, one JSON object per line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Reset,
    UpdateGuess {
        text: String,
    },
    SubmitGuess,
    SkipRound,
    GetState,
}

impl ClientMessage {
    /// The engine command behind this message, if it is one
    pub fn into_command(self) -> Option<Command> {
        match self {
            ClientMessage::Reset => Some(Command::Reset),
            ClientMessage::UpdateGuess { text } => Some(Command::UpdateGuess(text)),
            ClientMessage::SubmitGuess => Some(Command::SubmitGuess),
            ClientMessage::SkipRound => Some(Command::SkipRound),
            ClientMessage::GetState => None,
        }
    }
}

/// Messages written back, one JSON object per line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    State {
        #[serde(flatten)]
        state: GameState,
        pending_guess: String,
    },
    Error {
        message: String,
    },
}
