//! Rules engines for checkers, chess and fantasy chess on an 8x8 board:
//! move validation, move application with undo, and threat detection.
#[macro_use]
extern crate impl_ops;

pub mod attacks;
pub mod boards;
pub mod checkers;
pub mod console;
pub mod game_errors;
pub mod game_state;
pub mod layouts;
pub mod moves;
pub mod pieces;
pub mod positions;
pub mod rules;

pub use boards::Board;
pub use game_errors::{GameError, GameResult};
pub use game_state::{rules_for, CheckersRules, ChessRules, GameSession, Rules};
pub use layouts::Variant;
pub use moves::{MoveRecord, Verdict};
pub use pieces::{Kind, Piece, Side};
pub use positions::Square;
