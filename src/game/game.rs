use log::{debug, info, warn};

use crate::board::{Board, Color, MoveError, PieceId, PieceKind, SetupError, Square, TargetList};

use super::interface::{AlwaysQueen, GameOverObserver, PromotionPicker};
use super::player::Player;
use super::special::{EnPassant, PawnPromotion, SpecialRule, TurnContext};

/// Where the turn state machine currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the given color to commit a move.
    AwaitingMove(Color),
    /// A move is committed; the turn has not been resolved yet.
    Resolving,
    /// Terminal. No further move is accepted.
    GameOver,
}

/// Result of resolving a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play continues with the other side.
    Continued,
    /// The upcoming player had no legal move; the game ended.
    GameOver,
}

/// The move committed this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    /// The piece captured on the destination tile, if any. En-passant
    /// captures are finalized by the resolver and not recorded here.
    pub capture: Option<PieceId>,
}

/// A single game of chess: board, two players, and the turn state machine.
///
/// `Game` is the synchronous core. [`Game::apply_move`] commits a move for
/// the active player and [`Game::resolve_turn`] runs the resolution
/// transition (terminal test, special rules, check refresh, advancement).
/// [`GameController`](super::GameController) wraps both in the waiting
/// loop described in the crate docs.
///
/// Constructed once per game; never rebuilt mid-play.
pub struct Game {
    board: Board,
    players: [Player; 2],
    active: Color,
    rules: Vec<Box<dyn SpecialRule>>,
    picker: Box<dyn PromotionPicker>,
    state: TurnState,
    last_move: Option<MoveRecord>,
    game_over_observers: Vec<GameOverObserver>,
}

impl Game {
    /// A standard game from the starting position, promoting through the
    /// given picker. Light moves first.
    pub fn new(picker: Box<dyn PromotionPicker>) -> Result<Self, SetupError> {
        Self::with_board(Board::new(), picker)
    }

    /// A standard game with a headless auto-queen promotion picker.
    pub fn headless() -> Result<Self, SetupError> {
        Self::new(Box::new(AlwaysQueen))
    }

    /// A game over a custom position, e.g. from
    /// [`BoardBuilder`](crate::board::BoardBuilder).
    ///
    /// Fails with [`SetupError::NoKing`] when either side lacks a king.
    pub fn with_board(board: Board, picker: Box<dyn PromotionPicker>) -> Result<Self, SetupError> {
        let light_king = board
            .king_of(Color::Light)
            .ok_or(SetupError::NoKing {
                color: Color::Light,
            })?;
        let dark_king = board
            .king_of(Color::Dark)
            .ok_or(SetupError::NoKing { color: Color::Dark })?;

        let players = [
            Player::new(Color::Light, light_king),
            Player::new(Color::Dark, dark_king),
        ];

        let mut game = Game {
            board,
            players,
            active: Color::Light,
            rules: vec![Box::new(EnPassant), Box::new(PawnPromotion)],
            picker,
            state: TurnState::AwaitingMove(Color::Light),
            last_move: None,
            game_over_observers: Vec::new(),
        };
        game.refresh_check_flags();
        Ok(game)
    }

    /// The board, read-only. Occupancy is mutated only through the game's
    /// own transitions.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Register an observer for committed board changes (occupancy and
    /// king check-state).
    pub fn subscribe(&mut self, observer: crate::board::BoardObserver) {
        self.board.subscribe(observer);
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// Current state of the turn machine.
    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state == TurnState::GameOver
    }

    /// The most recently committed move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    /// Register a fire-and-forget notice for the end of the game.
    pub fn on_game_over(&mut self, observer: GameOverObserver) {
        self.game_over_observers.push(observer);
    }

    /// Append a rule to the per-turn resolution pass. The en-passant and
    /// promotion rules are registered by construction and run first.
    pub fn register_rule(&mut self, rule: Box<dyn SpecialRule>) {
        self.rules.push(rule);
    }

    /// Pick a piece up for the active player (input-collaborator
    /// bookkeeping; does not move anything). Rejected for pieces the
    /// active player does not own.
    pub fn select_piece(&mut self, id: PieceId) -> Result<(), MoveError> {
        let piece = self.board.piece(id);
        if !piece.is_active() {
            return Err(MoveError::PieceUnavailable);
        }
        if piece.color() != self.active {
            return Err(MoveError::NotYourTurn { color: piece.color() });
        }
        self.players[self.active.index()].set_active_piece(Some(id));
        Ok(())
    }

    /// Legal destinations for a piece. Empty for captured or otherwise
    /// out-of-play pieces.
    #[must_use]
    pub fn legal_moves(&mut self, id: PieceId) -> TargetList {
        self.board.legal_moves(id)
    }

    /// Union of legal destinations across all of a color's pieces.
    #[must_use]
    pub fn player_moves(&mut self, color: Color) -> Vec<Square> {
        self.board.player_moves(color)
    }

    /// The color's in-play pieces.
    #[must_use]
    pub fn player_pieces(&self, color: Color) -> Vec<PieceId> {
        self.board.pieces_of(color).collect()
    }

    /// Whether the color's king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// Whether the color has no legal move at all.
    ///
    /// Note: this does not additionally require the king to be in check,
    /// so a stalemated player is reported as checkmated too.
    #[must_use]
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        !self.board.has_legal_move(color)
    }

    /// Commit a move for the active player.
    ///
    /// Validates turn ownership and the destination against
    /// [`Game::legal_moves`]; on success performs the capture, relocates
    /// the piece, and parks the machine in [`TurnState::Resolving`] until
    /// [`Game::resolve_turn`] runs. A rejected move changes nothing.
    pub fn apply_move(&mut self, id: PieceId, to: Square) -> Result<(), MoveError> {
        match self.state {
            TurnState::GameOver => return Err(MoveError::GameOver),
            TurnState::Resolving => {
                return Err(MoveError::NotYourTurn { color: self.active })
            }
            TurnState::AwaitingMove(_) => {}
        }

        let piece = self.board.piece(id);
        if !piece.is_active() {
            return Err(MoveError::PieceUnavailable);
        }
        let color = piece.color();
        let from = piece.square();
        if color != self.active {
            return Err(MoveError::NotYourTurn { color });
        }

        if !self.board.legal_moves(id).contains(to) {
            warn!("{color} attempted illegal move {from} -> {to}");
            return Err(MoveError::IllegalDestination { from, to });
        }

        let capture = self.board.active_piece_at(to);
        if let Some(victim) = capture {
            debug!(
                "{color} {} on {from} captures {} on {to}",
                self.board.piece(id).kind(),
                self.board.piece(victim).kind()
            );
            self.board.capture(victim);
        }

        self.board.relocate(id, to);
        self.board.piece_mut(id).bump_move_count();

        // A pawn landing on the en-passant tile consumes the recorded
        // pawn; it stays on its tile, out of play, until the resolver
        // finalizes the capture.
        if let Some(ep) = self.board.en_passant {
            if ep.square == to
                && self.board.piece(id).kind() == PieceKind::Pawn
                && self.board.piece(ep.pawn).color() != color
            {
                self.board.mark_ignored(ep.pawn);
            }
        }

        self.last_move = Some(MoveRecord {
            piece: id,
            from,
            to,
            capture,
        });
        self.players[color.index()].set_did_move(true);
        self.state = TurnState::Resolving;

        debug!("{color} moved {from} -> {to}");
        debug_assert!(self.board.is_consistent());
        Ok(())
    }

    /// Run the resolution transition for a committed move.
    ///
    /// Order: terminal test on the player about to move (no legal move
    /// anywhere ends the game without running the special rules), then the
    /// special rules in registration order, then a check-flag refresh,
    /// then advancement to the other side.
    ///
    /// Normally driven by [`GameController::play`](super::GameController);
    /// call it directly when embedding the game single-threaded. Without a
    /// committed move this is a no-op.
    pub fn resolve_turn(&mut self) -> TurnOutcome {
        if self.state != TurnState::Resolving {
            return match self.state {
                TurnState::GameOver => TurnOutcome::GameOver,
                _ => TurnOutcome::Continued,
            };
        }

        let next = self.active.opponent();
        if !self.board.has_legal_move(next) {
            self.refresh_check_flags();
            self.enter_game_over(next);
            return TurnOutcome::GameOver;
        }

        let moved = self
            .last_move
            .expect("resolving state implies a committed move");
        let mut ctx = TurnContext {
            board: &mut self.board,
            moved,
            picker: self.picker.as_mut(),
        };
        for rule in &mut self.rules {
            rule.check(&mut ctx);
        }

        self.refresh_check_flags();
        debug_assert!(self.board.is_consistent());

        self.players[next.index()].set_did_move(false);
        self.players[next.index()].set_active_piece(None);
        self.active = next;
        self.state = TurnState::AwaitingMove(next);
        debug!("turn passes to {next}");
        TurnOutcome::Continued
    }

    /// Terminal transition: flag the game over and notify observers that
    /// `stuck` has no move left.
    pub(crate) fn enter_game_over(&mut self, stuck: Color) {
        self.state = TurnState::GameOver;
        info!("game over: {stuck} has no legal move");
        for observer in &self.game_over_observers {
            observer(stuck);
        }
    }

    /// Evaluate both kings' check flags, notifying board observers on
    /// transitions.
    fn refresh_check_flags(&mut self) {
        for color in [Color::Light, Color::Dark] {
            let in_check = self.board.is_in_check(color);
            let king = self.players[color.index()].king();
            self.board.set_king_check(king, in_check);
        }
    }
}
