use super::super::state::Board;
use super::super::types::{Color, Square, TargetList};

/// Orthogonal ray directions (rook, queen).
pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions (bishop, queen).
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Walk each ray until blocked. The first in-play occupant ends the
    /// ray and is a target only when hostile; ignored pieces are
    /// transparent.
    pub(crate) fn sliding_targets(
        &self,
        from: Square,
        color: Color,
        rays: &[(isize, isize)],
    ) -> TargetList {
        let mut targets = TargetList::new();

        for &(dr, df) in rays {
            let mut current = from;
            while let Some(next) = current.offset(dr, df) {
                match self.active_piece_at(next) {
                    None => targets.push(next),
                    Some(blocker) => {
                        if self.piece(blocker).color() != color {
                            targets.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }

        targets
    }
}
