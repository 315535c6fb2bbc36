use super::super::state::Board;
use super::super::types::{Color, Square, TargetList};
use super::tables::KNIGHT_TARGETS;

impl Board {
    pub(crate) fn knight_targets(&self, from: Square, color: Color) -> TargetList {
        let mut targets = TargetList::new();
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            match self.active_piece_at(to) {
                Some(blocker) if self.piece(blocker).color() == color => {}
                _ => targets.push(to),
            }
        }
        targets
    }
}
