//! Change notifications for board state.
//!
//! Rendering collaborators register observers on the board; the board emits
//! an event for every committed occupancy change and for king check-state
//! transitions. Hypothetical moves made by the legality filter are silent.

use std::sync::Arc;

use super::state::Board;
use super::types::{Color, PieceId, Square};

/// A change on the board worth redrawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    /// A tile's occupant changed (`None` when the tile was cleared).
    OccupancyChanged {
        square: Square,
        occupant: Option<PieceId>,
    },
    /// A king entered or left check.
    CheckChanged { color: Color, in_check: bool },
}

/// Callback invoked on every committed board change.
pub type BoardObserver = Arc<dyn Fn(&BoardEvent) + Send + Sync>;

impl Board {
    /// Register an observer for committed board changes.
    pub fn subscribe(&mut self, observer: BoardObserver) {
        self.observers.push(observer);
    }

    pub(crate) fn emit(&self, event: &BoardEvent) {
        for observer in &self.observers {
            observer(event);
        }
    }
}
