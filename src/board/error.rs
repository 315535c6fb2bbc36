//! Error types for board and game operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for square coordinate failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected moves.
///
/// A rejected move leaves the board and the turn state unchanged; the error
/// is reported only to the caller that requested the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended
    GameOver,
    /// The piece does not belong to the side whose turn it is, or a move
    /// was already committed this turn
    NotYourTurn { color: Color },
    /// The piece is captured or otherwise out of play
    PieceUnavailable,
    /// The destination is not among the piece's legal moves
    IllegalDestination { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::NotYourTurn { color } => {
                write!(f, "It is not {color}'s turn to move")
            }
            MoveError::PieceUnavailable => write!(f, "Piece is not in play"),
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal move from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for game construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// One of the sides has no king on the board
    NoKing { color: Color },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoKing { color } => {
                write!(f, "No {color} king on the board")
            }
        }
    }
}

impl std::error::Error for SetupError {}
