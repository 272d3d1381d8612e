//! Error types for the game.

use std::io;

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that end a game.
///
/// Mistyped class names and commands are not errors; the game reprompts for
/// those.
#[derive(Debug, Error)]
pub enum GameError {
    /// The input stream ended before the game did.
    #[error("input stream closed")]
    InputClosed,

    /// Reading from the input stream failed.
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    /// The player entered an empty name.
    #[error("name cannot be empty")]
    EmptyName,

    /// Character creation was aborted.
    #[error("character creation failed: {0}")]
    Creation(#[source] Box<GameError>),
}

impl GameError {
    /// Wrap an error raised while creating the character.
    pub fn creation(err: GameError) -> Self {
        Self::Creation(Box::new(err))
    }
}
