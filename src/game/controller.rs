//! Threaded turn orchestration.
//!
//! Wraps a [`Game`] in a shared lock plus a wake-on-commit signal. Input
//! collaborators (human UI, a scripted opponent) call
//! [`GameController::submit_move`]; the turn loop blocks in
//! [`GameController::play`] until a commit arrives, resolves the turn, and
//! goes back to waiting, until the game is over.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;
use parking_lot::Mutex;

use crate::board::{MoveError, PieceId, Square};
use crate::sync::MoveSignal;

use super::game::{Game, TurnOutcome};

/// Shared handle on a running game.
///
/// Cheap to clone; all clones drive the same game. The board and players
/// are read through [`GameController::with_game`] under the lock; the only
/// way to mutate occupancy from outside is [`GameController::submit_move`].
#[derive(Clone)]
pub struct GameController {
    game: Arc<Mutex<Game>>,
    moved: MoveSignal,
}

impl GameController {
    #[must_use]
    pub fn new(game: Game) -> Self {
        GameController {
            game: Arc::new(Mutex::new(game)),
            moved: MoveSignal::new(),
        }
    }

    /// Run a closure against the locked game. Collaborators use this for
    /// queries (legal moves, board reads, turn state).
    pub fn with_game<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.game.lock();
        f(&mut game)
    }

    /// Commit a move for the active player and wake the turn loop.
    ///
    /// A rejection is returned to this caller only; the game is untouched
    /// and the loop is not woken.
    pub fn submit_move(&self, piece: PieceId, to: Square) -> Result<(), MoveError> {
        {
            let mut game = self.game.lock();
            game.apply_move(piece, to)?;
        }
        self.moved.notify();
        Ok(())
    }

    /// Drive the game until it is over, blocking the current thread.
    ///
    /// Suspends between turns until [`GameController::submit_move`]
    /// signals a commit; each wake runs one resolution transition. A
    /// position with no opening move terminates immediately.
    pub fn play(&self) {
        {
            let mut game = self.game.lock();
            if game.is_game_over() {
                return;
            }
            let stuck = game.active_player().color();
            if game.is_checkmate(stuck) {
                game.enter_game_over(stuck);
                return;
            }
        }

        loop {
            self.moved.wait();
            let mut game = self.game.lock();
            match game.resolve_turn() {
                TurnOutcome::Continued => {}
                TurnOutcome::GameOver => break,
            }
        }
        debug!("turn loop finished");
    }

    /// Run the turn loop on a background thread.
    #[must_use]
    pub fn spawn(&self) -> JoinHandle<()> {
        let controller = self.clone();
        thread::Builder::new()
            .name("turn-loop".to_string())
            .spawn(move || controller.play())
            .expect("failed to spawn turn loop thread")
    }
}
