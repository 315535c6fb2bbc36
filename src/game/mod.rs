//! Game orchestration: players, special rules, and the turn state machine.

mod controller;
mod game;
mod interface;
mod player;
mod special;


pub use controller::GameController;
pub use game::{Game, MoveRecord, TurnOutcome, TurnState};
pub use interface::{AlwaysQueen, GameOverObserver, PromotionPicker};
pub use player::Player;
pub use special::{EnPassant, PawnPromotion, SpecialRule, TurnContext};
