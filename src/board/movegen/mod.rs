//! Move generation and legality filtering.
//!
//! Each piece kind contributes its pseudo-legal targets (blocking and
//! capture rules, no king-safety); [`Board::legal_moves`] filters those
//! through the check-safety test by silently playing each candidate and
//! rejecting any that leaves the mover's own king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;
mod tables;

use super::state::Board;
use super::types::{Color, PieceId, PieceKind, Square, TargetList};

impl Board {
    /// Movement-pattern targets for a piece: blocking and capture rules
    /// applied, king safety not yet. Never contains the piece's own
    /// square. Empty for a piece that is out of play.
    pub(crate) fn pseudo_targets(&self, id: PieceId) -> TargetList {
        let piece = self.piece(id);
        if !piece.is_active() {
            return TargetList::new();
        }
        let from = piece.square();
        let color = piece.color();

        match piece.kind() {
            PieceKind::Pawn => self.pawn_targets(id, from),
            PieceKind::Knight => self.knight_targets(from, color),
            PieceKind::Bishop => self.sliding_targets(from, color, &sliders::DIAGONAL),
            PieceKind::Rook => self.sliding_targets(from, color, &sliders::ORTHOGONAL),
            PieceKind::Queen => {
                let mut targets = self.sliding_targets(from, color, &sliders::ORTHOGONAL);
                for &sq in &self.sliding_targets(from, color, &sliders::DIAGONAL) {
                    targets.push(sq);
                }
                targets
            }
            PieceKind::King => self.king_targets(from, color),
        }
    }

    /// The squares a piece may legally move to.
    ///
    /// Pseudo-legal targets filtered through the check-safety test: each
    /// candidate is played silently, rejected if the mover's king ends up
    /// attacked, then reverted.
    #[must_use]
    pub fn legal_moves(&mut self, id: PieceId) -> TargetList {
        let color = self.piece(id).color();
        let pseudo = self.pseudo_targets(id);
        let mut legal = TargetList::new();

        for &to in &pseudo {
            let undo = self.apply_hypothetical(id, to);
            if !self.is_in_check(color) {
                legal.push(to);
            }
            self.undo(undo);
        }

        legal
    }

    /// Union of legal destinations across all of a color's in-play
    /// pieces. Duplicates are kept; callers only care about emptiness or
    /// membership.
    #[must_use]
    pub fn player_moves(&mut self, color: Color) -> Vec<Square> {
        let ids: Vec<PieceId> = self.pieces_of(color).collect();
        let mut moves = Vec::new();
        for id in ids {
            moves.extend_from_slice(self.legal_moves(id).as_slice());
        }
        moves
    }

    /// Whether the color has any legal move at all. Early-exits on the
    /// first piece with a non-empty move set.
    #[must_use]
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let ids: Vec<PieceId> = self.pieces_of(color).collect();
        ids.into_iter().any(|id| !self.legal_moves(id).is_empty())
    }
}
