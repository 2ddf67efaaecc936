//! Error types for board and game operations

use thiserror::Error;

use crate::board::Stone;

/// Errors raised when a move cannot be applied.
///
/// Search never produces these: a full board yields `None` from the
/// engine instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Coordinates fall outside the 15x15 grid
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Target cell already holds a stone
    #[error("position ({row}, {col}) is already occupied by {occupant}")]
    Occupied { row: u8, col: u8, occupant: Stone },

    /// Attempted to place `Stone::Empty`
    #[error("cannot place an empty stone")]
    EmptyStone,

    /// The game already ended with a win or a draw
    #[error("the game is already over")]
    GameOver,
}
