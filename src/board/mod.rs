//! Chess board representation: tiles, pieces, and move generation.
//!
//! The board owns 64 tiles and a piece table; pieces are addressed through
//! stable [`PieceId`] handles. Move generation applies blocking and capture
//! rules per piece kind, then filters through the check-safety test.
//!
//! # Example
//! ```
//! use chess_game::board::Board;
//!
//! let mut board = Board::new();
//! let knight = board.tile_named("g1").unwrap().occupant().unwrap();
//! assert_eq!(board.legal_moves(knight).len(), 2);
//! ```

mod builder;
mod debug;
mod error;
mod movegen;
mod observe;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, SetupError, SquareError};
pub use observe::{BoardEvent, BoardObserver};
pub use state::{Board, Piece, Tile};
pub use types::{Color, PieceId, PieceKind, Square, TargetList};

pub(crate) use state::EnPassantTarget;
