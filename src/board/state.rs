use super::observe::{BoardEvent, BoardObserver};
use super::types::{Color, PieceId, PieceKind, Square};

/// One cell of the board: a fixed square, a fixed shade, and at most one
/// occupant.
#[derive(Clone, Debug)]
pub struct Tile {
    square: Square,
    shade: Color,
    occupant: Option<PieceId>,
}

impl Tile {
    fn new(square: Square) -> Self {
        // a1 is a dark tile; shades alternate from there.
        let shade = if (square.rank() + square.file()) % 2 == 0 {
            Color::Dark
        } else {
            Color::Light
        };
        Tile {
            square,
            shade,
            occupant: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn shade(&self) -> Color {
        self.shade
    }

    #[inline]
    #[must_use]
    pub const fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Data for one piece instance.
///
/// Captured pieces stay in the table with their `captured` flag set; they
/// are excluded from every move and attack query. The `ignored` flag marks
/// a piece that is out of active play without being finally removed yet (a
/// pawn consumed by en-passant awaiting resolution).
#[derive(Clone, Debug)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    move_count: u32,
    captured: bool,
    ignored: bool,
    in_check: bool,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The square this piece currently stands on. Meaningless once the
    /// piece is captured.
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// In play: neither captured nor ignored.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.captured && !self.ignored
    }

    /// Whether this king is currently in check. Always false for other
    /// kinds.
    #[inline]
    #[must_use]
    pub const fn in_check(&self) -> bool {
        self.in_check
    }

    pub(crate) fn bump_move_count(&mut self) {
        self.move_count += 1;
    }
}

/// The pawn currently capturable en passant and the square a capturing
/// enemy pawn lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EnPassantTarget {
    pub(crate) pawn: PieceId,
    pub(crate) square: Square,
}

/// Restore information for a silent what-if move, used by the legality
/// filter.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Undo {
    piece: PieceId,
    from: Square,
    to: Square,
    displaced: Option<PieceId>,
}

/// An 8x8 chess board: 64 tiles, a piece table, and per-color rosters.
///
/// Occupancy is mutated only through the committed mutators (which notify
/// observers) and the silent hypothetical pair used for legality checks.
#[derive(Clone)]
pub struct Board {
    tiles: Vec<Tile>,
    pieces: Vec<Piece>,
    rosters: [Vec<PieceId>; 2],
    pub(crate) en_passant: Option<EnPassantTarget>,
    pub(crate) observers: Vec<BoardObserver>,
}

impl Board {
    /// An empty board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            tiles: (0..64).map(|i| Tile::new(Square::from_index(i))).collect(),
            pieces: Vec::new(),
            rosters: [Vec::new(), Vec::new()],
            en_passant: None,
            observers: Vec::new(),
        }
    }

    /// The standard starting position: back ranks on 1/8, pawns on 2/7,
    /// Light on the low ranks.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.iter().enumerate() {
            board.add_piece(Square(0, file), Color::Light, *kind);
            board.add_piece(Square(7, file), Color::Dark, *kind);
            board.add_piece(Square(1, file), Color::Light, PieceKind::Pawn);
            board.add_piece(Square(6, file), Color::Dark, PieceKind::Pawn);
        }
        board
    }

    /// Spawn a piece onto an empty tile.
    ///
    /// The tile must be empty; placement notifies observers like any other
    /// committed change.
    pub(crate) fn add_piece(&mut self, square: Square, color: Color, kind: PieceKind) -> PieceId {
        debug_assert!(
            !self.tile(square).is_occupied(),
            "tile {square} already occupied"
        );
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Piece {
            kind,
            color,
            square,
            move_count: 0,
            captured: false,
            ignored: false,
            in_check: false,
        });
        self.rosters[color.index()].push(id);
        self.set_occupant(square, Some(id));
        id
    }

    /// The tile at a square.
    #[inline]
    #[must_use]
    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square.as_index()]
    }

    /// Look a tile up by its algebraic name, case-insensitively.
    /// Malformed or out-of-range names yield `None`.
    #[must_use]
    pub fn tile_named(&self, name: &str) -> Option<&Tile> {
        Square::parse(name).map(|sq| self.tile(sq))
    }

    /// All 64 tiles in index order (a1, b1, ..., h8).
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// The piece behind an id.
    #[inline]
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.as_usize()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.as_usize()]
    }

    /// The raw occupant of a square, including a piece that is out of play
    /// but not yet removed.
    #[inline]
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        self.tile(square).occupant
    }

    /// The in-play occupant of a square. Ignored pieces are transparent.
    #[must_use]
    pub fn active_piece_at(&self, square: Square) -> Option<PieceId> {
        self.tile(square)
            .occupant
            .filter(|id| self.piece(*id).is_active())
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_free(&self, square: Square) -> bool {
        self.active_piece_at(square).is_none()
    }

    /// Every piece ever spawned for a color, captured ones included.
    #[must_use]
    pub fn roster(&self, color: Color) -> &[PieceId] {
        &self.rosters[color.index()]
    }

    /// The ids of a color's in-play pieces.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.rosters[color.index()]
            .iter()
            .copied()
            .filter(|id| self.piece(*id).is_active())
    }

    /// The color's king, if one is on the board.
    #[must_use]
    pub fn king_of(&self, color: Color) -> Option<PieceId> {
        self.rosters[color.index()]
            .iter()
            .copied()
            .find(|id| self.piece(*id).kind() == PieceKind::King && !self.piece(*id).is_captured())
    }

    fn set_occupant(&mut self, square: Square, occupant: Option<PieceId>) {
        self.tiles[square.as_index()].occupant = occupant;
        if let Some(id) = occupant {
            self.pieces[id.as_usize()].square = square;
        }
        self.emit(&BoardEvent::OccupancyChanged { square, occupant });
    }

    /// Remove occupancy from a square, notifying observers.
    pub(crate) fn clear_square(&mut self, square: Square) {
        if self.tiles[square.as_index()].occupant.is_some() {
            self.set_occupant(square, None);
        }
    }

    /// Move a piece to an empty destination tile. Captures are flagged
    /// separately, before relocation.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) {
        let from = self.piece(id).square();
        debug_assert!(
            self.tiles[to.as_index()].occupant.is_none(),
            "relocate onto occupied tile {to}"
        );
        self.set_occupant(from, None);
        self.set_occupant(to, Some(id));
    }

    /// Flag a piece captured and lift it off its tile.
    pub(crate) fn capture(&mut self, id: PieceId) {
        let square = self.piece(id).square();
        if self.tiles[square.as_index()].occupant == Some(id) {
            self.clear_square(square);
        }
        self.piece_mut(id).captured = true;
    }

    /// Take a piece out of active play without removing it from its tile.
    pub(crate) fn mark_ignored(&mut self, id: PieceId) {
        self.piece_mut(id).ignored = true;
    }

    /// Swap a pawn's kind in place, resetting its move count. Emits an
    /// occupancy event so renderers redraw the tile.
    pub(crate) fn promote(&mut self, id: PieceId, kind: PieceKind) {
        let square = {
            let piece = self.piece_mut(id);
            piece.kind = kind;
            piece.move_count = 0;
            piece.square
        };
        let occupant = self.tiles[square.as_index()].occupant;
        self.emit(&BoardEvent::OccupancyChanged { square, occupant });
    }

    /// Update a king's check flag, notifying observers on a transition.
    pub(crate) fn set_king_check(&mut self, id: PieceId, in_check: bool) {
        let piece = self.piece_mut(id);
        if piece.in_check != in_check {
            piece.in_check = in_check;
            let color = piece.color;
            self.emit(&BoardEvent::CheckChanged { color, in_check });
        }
    }

    pub(crate) fn set_en_passant(&mut self, target: EnPassantTarget) {
        self.en_passant = Some(target);
    }

    pub(crate) fn clear_en_passant(&mut self) {
        self.en_passant = None;
    }

    /// Silently play a what-if move for the check-safety filter. A piece on
    /// the destination is lifted out of play until [`Board::undo`].
    ///
    /// No observer runs and no flags other than the displaced piece's
    /// `captured` are touched.
    pub(crate) fn apply_hypothetical(&mut self, id: PieceId, to: Square) -> Undo {
        let from = self.piece(id).square();
        let displaced = self.tiles[to.as_index()].occupant;
        if let Some(victim) = displaced {
            self.pieces[victim.as_usize()].captured = true;
        }
        self.tiles[from.as_index()].occupant = None;
        self.tiles[to.as_index()].occupant = Some(id);
        self.pieces[id.as_usize()].square = to;
        Undo {
            piece: id,
            from,
            to,
            displaced,
        }
    }

    /// Revert a what-if move.
    pub(crate) fn undo(&mut self, undo: Undo) {
        self.tiles[undo.to.as_index()].occupant = undo.displaced;
        if let Some(victim) = undo.displaced {
            self.pieces[victim.as_usize()].captured = false;
        }
        self.tiles[undo.from.as_index()].occupant = Some(undo.piece);
        self.pieces[undo.piece.as_usize()].square = undo.from;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
