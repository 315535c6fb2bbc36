//! Two-player turn-based chess engine: board model, move generation and
//! legality, special-move resolution (en passant, promotion), check and
//! checkmate detection, and a turn orchestrator that sequences play until
//! a terminal state.
//!
//! Rendering, dialogs, and opponents live outside the crate and talk to it
//! through [`game::GameController`], the [`game::PromotionPicker`] seam,
//! and board change subscriptions.
//!
//! # Example
//! ```
//! use chess_game::game::Game;
//!
//! let mut game = Game::headless().unwrap();
//! let pawn = game.board().tile_named("e2").unwrap().occupant().unwrap();
//! let e4 = "e4".parse().unwrap();
//! game.apply_move(pawn, e4).unwrap();
//! game.resolve_turn();
//! ```

pub mod board;
pub mod game;
pub mod sync;

pub use board::{Board, BoardBuilder, Color, PieceId, PieceKind, Square};
pub use game::{Game, GameController, TurnOutcome, TurnState};
