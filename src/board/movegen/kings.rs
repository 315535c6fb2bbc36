use super::super::state::Board;
use super::super::types::{Color, PieceKind, Square, TargetList};
use super::sliders::{DIAGONAL, ORTHOGONAL};
use super::tables::{KING_TARGETS, KNIGHT_TARGETS};

impl Board {
    /// One step in any direction. Stepping into attack is rejected later
    /// by the legality filter.
    pub(crate) fn king_targets(&self, from: Square, color: Color) -> TargetList {
        let mut targets = TargetList::new();
        for &to in &KING_TARGETS[from.as_index()] {
            match self.active_piece_at(to) {
                Some(blocker) if self.piece(blocker).color() == color => {}
                _ => targets.push(to),
            }
        }
        targets
    }

    /// True iff any in-play piece of `by` pseudo-legally reaches `square`.
    ///
    /// Pawns count only their diagonal capture offsets here, never their
    /// forward pushes. Implemented as a reverse lookup from the target
    /// square.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // Pawn sources sit one rank toward the attacker's home side.
        let toward_home = match by {
            Color::Light => -1,
            Color::Dark => 1,
        };
        for df in [-1, 1] {
            if let Some(source) = square.offset(toward_home, df) {
                if let Some(id) = self.active_piece_at(source) {
                    let piece = self.piece(id);
                    if piece.color() == by && piece.kind() == PieceKind::Pawn {
                        return true;
                    }
                }
            }
        }

        for &source in &KNIGHT_TARGETS[square.as_index()] {
            if let Some(id) = self.active_piece_at(source) {
                let piece = self.piece(id);
                if piece.color() == by && piece.kind() == PieceKind::Knight {
                    return true;
                }
            }
        }

        for &source in &KING_TARGETS[square.as_index()] {
            if let Some(id) = self.active_piece_at(source) {
                let piece = self.piece(id);
                if piece.color() == by && piece.kind() == PieceKind::King {
                    return true;
                }
            }
        }

        if self.ray_hits(square, by, &ORTHOGONAL, PieceKind::Rook) {
            return true;
        }
        if self.ray_hits(square, by, &DIAGONAL, PieceKind::Bishop) {
            return true;
        }

        false
    }

    /// Walk rays outward from `square`; true if the first in-play blocker
    /// on any ray is a hostile `slider` or queen.
    fn ray_hits(
        &self,
        square: Square,
        by: Color,
        rays: &[(isize, isize)],
        slider: PieceKind,
    ) -> bool {
        for &(dr, df) in rays {
            let mut current = square;
            while let Some(next) = current.offset(dr, df) {
                if let Some(id) = self.active_piece_at(next) {
                    let piece = self.piece(id);
                    if piece.color() == by
                        && (piece.kind() == slider || piece.kind() == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }

    /// Whether the color's king stands on an attacked square.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_of(color) {
            Some(king) => self.is_square_attacked(self.piece(king).square(), color.opponent()),
            None => false,
        }
    }
}
