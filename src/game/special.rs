//! Special-move resolution: rules evaluated once per completed turn.
//!
//! Each rule is a per-game value handed an explicit [`TurnContext`]; there
//! is no shared state between games and no initialization ordering to get
//! wrong. The orchestrator runs the rules in registration order after the
//! terminal test passes.

use log::debug;

use crate::board::{Board, Color, EnPassantTarget, PieceKind};

use super::game::MoveRecord;
use super::interface::PromotionPicker;

/// Context handed to each rule after a completed move.
pub struct TurnContext<'a> {
    pub(crate) board: &'a mut Board,
    pub(crate) moved: MoveRecord,
    pub(crate) picker: &'a mut dyn PromotionPicker,
}

impl TurnContext<'_> {
    /// The board after the committed move.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.board
    }

    /// The move committed this turn.
    #[must_use]
    pub fn moved(&self) -> MoveRecord {
        self.moved
    }
}

/// A rule checked once after every completed move.
pub trait SpecialRule: Send {
    fn check(&mut self, ctx: &mut TurnContext<'_>);
}

/// Two-square pawn advance capture.
///
/// A pawn that advances two ranks is capturable, for exactly the next
/// opposing move, on the tile it skipped. The working state (which pawn,
/// which tile) lives on the board and is cleared by any move that is not
/// the capture itself.
#[derive(Debug, Default)]
pub struct EnPassant;

impl SpecialRule for EnPassant {
    fn check(&mut self, ctx: &mut TurnContext<'_>) {
        let moved = ctx.moved;
        let mover = ctx.board.piece(moved.piece);
        let color = mover.color();

        if mover.kind() != PieceKind::Pawn {
            ctx.board.clear_en_passant();
            return;
        }

        if moved.from.rank().abs_diff(moved.to.rank()) == 2 {
            // The capture tile sits one rank behind the pawn, from the
            // mover's perspective.
            let behind = match color {
                Color::Light => -1,
                Color::Dark => 1,
            };
            let square = moved
                .to
                .offset(behind, 0)
                .expect("double-step pawn has a tile behind it");
            ctx.board.set_en_passant(EnPassantTarget {
                pawn: moved.piece,
                square,
            });
            debug!("en passant window opened on {square}");
            return;
        }

        if let Some(ep) = ctx.board.en_passant {
            if ep.square == moved.to && ctx.board.piece(ep.pawn).color() != color {
                let victim_square = ctx.board.piece(ep.pawn).square();
                ctx.board.capture(ep.pawn);
                debug!("pawn on {victim_square} captured en passant");
            }
        }
        ctx.board.clear_en_passant();
    }
}

/// Pawn promotion on the farthest rank.
///
/// Asks the promotion picker until it supplies a promotable kind, then
/// swaps the pawn in place with its move count reset.
#[derive(Debug, Default)]
pub struct PawnPromotion;

impl SpecialRule for PawnPromotion {
    fn check(&mut self, ctx: &mut TurnContext<'_>) {
        let moved = ctx.moved;
        let pawn = ctx.board.piece(moved.piece);
        if pawn.kind() != PieceKind::Pawn || !pawn.is_active() {
            return;
        }

        let color = pawn.color();
        let square = pawn.square();
        let far_rank = match color {
            Color::Light => 7,
            Color::Dark => 0,
        };
        if square.rank() != far_rank {
            return;
        }

        let kind = loop {
            let choice = ctx.picker.pick(color, square);
            if PieceKind::PROMOTABLE.contains(&choice) {
                break choice;
            }
            debug!("promotion choice {choice} rejected, asking again");
        };

        ctx.board.promote(moved.piece, kind);
        debug!("{color} pawn on {square} promoted to {kind}");
    }
}
