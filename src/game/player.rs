use crate::board::{Color, PieceId};

/// One of the two sides of a game.
///
/// Pieces are owned by the board's rosters; the player tracks the flow
/// bookkeeping: whether a move was committed this round, and which piece an
/// input collaborator currently has selected.
#[derive(Clone, Debug)]
pub struct Player {
    color: Color,
    king: PieceId,
    did_move: bool,
    active_piece: Option<PieceId>,
}

impl Player {
    pub(crate) fn new(color: Color, king: PieceId) -> Self {
        Player {
            color,
            king,
            did_move: false,
            active_piece: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// This player's king.
    #[inline]
    #[must_use]
    pub const fn king(&self) -> PieceId {
        self.king
    }

    /// Whether a move was committed this round. Cleared when the player's
    /// next turn begins.
    #[inline]
    #[must_use]
    pub const fn did_move(&self) -> bool {
        self.did_move
    }

    pub(crate) fn set_did_move(&mut self, did_move: bool) {
        self.did_move = did_move;
    }

    /// The piece the player currently has picked up, if any.
    #[inline]
    #[must_use]
    pub const fn active_piece(&self) -> Option<PieceId> {
        self.active_piece
    }

    pub(crate) fn set_active_piece(&mut self, piece: Option<PieceId>) {
        self.active_piece = piece;
    }
}
