use crate::positions::Square;
use thiserror::Error;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------

/// Everything that can go wrong while playing. All of these are recoverable:
/// the caller reports them and asks for new input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("square ({file}, {rank}) is outside the board")]
    OutOfBounds { file: i16, rank: i16 },

    #[error("illegal move {start} -> {end}")]
    IllegalMove { start: Square, end: Square },

    #[error("no moves to undo")]
    NoHistory,

    #[error("no legal moves left")]
    NoLegalMoves,

    #[error("invalid square `{0}`, expected something like `e2`")]
    InvalidSquare(String),

    #[error("unknown command `{0}`, type `help` for a list")]
    InvalidCommand(String),
}

pub type GameResult<T> = std::result::Result<T, GameError>;
