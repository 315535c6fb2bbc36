use super::super::state::Board;
use super::super::types::{Color, PieceId, Square, TargetList};

impl Board {
    pub(crate) fn pawn_targets(&self, id: PieceId, from: Square) -> TargetList {
        let color = self.piece(id).color();
        let mut targets = TargetList::new();
        let (dir, start_rank): (isize, usize) = match color {
            Color::Light => (1, 1),
            Color::Dark => (-1, 6),
        };

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_free(forward) {
                targets.push(forward);
                // Double step: only off the start rank, only through two
                // empty tiles.
                if from.rank() == start_rank {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_free(double) {
                            targets.push(double);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(diagonal) = from.offset(dir, df) else {
                continue;
            };
            if let Some(victim) = self.active_piece_at(diagonal) {
                if self.piece(victim).color() != color {
                    targets.push(diagonal);
                }
            } else if self.is_en_passant_capture(diagonal, color) {
                targets.push(diagonal);
            }
        }

        targets
    }

    /// Whether `square` is the recorded en-passant landing tile and the
    /// recorded pawn belongs to the enemy of `mover`.
    fn is_en_passant_capture(&self, square: Square, mover: Color) -> bool {
        self.en_passant
            .is_some_and(|ep| ep.square == square && self.piece(ep.pawn).color() != mover)
    }
}
