//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_game::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, BoardEvent, Color, MoveError, Piece, PieceId, PieceKind, SetupError,
    Square, SquareError, TargetList, Tile,
};
