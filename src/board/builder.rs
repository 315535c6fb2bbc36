//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece for tests and custom games.
//!
//! # Example
//! ```
//! use chess_game::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::Light, PieceKind::King)
//!     .piece(Square(7, 4), Color::Dark, PieceKind::King)
//!     .piece(Square(1, 0), Color::Light, PieceKind::Pawn)
//!     .build();
//! ```

use super::state::Board;
use super::types::{Color, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            builder
                .pieces
                .push((Square(0, file), Color::Light, kind));
            builder.pieces.push((Square(7, file), Color::Dark, kind));
        }
        for file in 0..8 {
            builder
                .pieces
                .push((Square(1, file), Color::Light, PieceKind::Pawn));
            builder
                .pieces
                .push((Square(6, file), Color::Dark, PieceKind::Pawn));
        }
        builder
    }

    /// Place a piece on the board, replacing any previous piece there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, color, kind) in self.pieces {
            board.add_piece(square, color, kind);
        }
        board
    }
}
