use crate::board::Board;
use crate::colors::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The feedback for a single complete guess.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Score {
    /// The number of positions where the guess has the same color as the secret.
    pub exact: usize,
    /// The number of further colors that are in the secret, but at a different position.
    pub inexact: usize,
}

impl Score {
    pub fn new(exact: usize, inexact: usize) -> Score {
        Score { exact, inexact }
    }

    /// Returns `true` iff every one of the `sequence_length` positions matched exactly.
    pub fn is_win(&self, sequence_length: usize) -> bool {
        self.exact == sequence_length
    }
}

/// Where the game currently stands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The player is filling in the row at this 1-based index.
    InProgress(usize),
    /// A submitted row matched the secret exactly.
    Won,
    /// The last row was submitted without matching the secret.
    Lost,
}

impl GameStatus {
    /// Returns `true` for [`GameStatus::Won`] and [`GameStatus::Lost`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Everything a front end needs to draw the end screen. Only produced once the game is over, so
/// the secret is safe to reveal.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GameSummary {
    pub board: Board,
    pub secret: Vec<Color>,
    /// The score of each submitted row, oldest first.
    pub history: Vec<Score>,
}

/// The result of asking the game to submit the active row.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Outcome {
    /// The row was scored and the player moves on to the next row.
    Continue(Score),
    /// The row matched the secret.
    Won(GameSummary),
    /// The row was the player's last, and it did not match the secret.
    Lost(GameSummary),
    /// Nothing happened: either the active row is incomplete or the game is already over.
    Ignored,
}

/// Indicates that an error occurred while setting up or addressing a game.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum MastermindError {
    /// Indicates that the game could not be created with the given settings.
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
    /// Indicates that two sequences that must be compared position by position differ in length.
    #[error("sequence lengths differ: guess has {guess} colors, secret has {secret}")]
    LengthMismatch { guess: usize, secret: usize },
    /// Indicates a 1-based row, column or palette index outside of `1..=len`.
    #[error("index {index} is out of range 1..={len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Indicates that a secret without repeated colors can't be drawn from so few colors.
    #[error("cannot draw {needed} distinct colors from a palette of {available}")]
    InsufficientPalette { needed: usize, available: usize },
    /// Indicates that a color name or hex code could not be parsed.
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    /// Indicates that a color appears twice where every color must be distinct.
    #[error("color {0} appears more than once")]
    DuplicateColor(Color),
    /// Indicates a restored game whose parts don't fit together.
    #[error("invalid game state: {0}")]
    InvalidState(String),
}
