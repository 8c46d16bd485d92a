//! Describing the moves that have been played on a board.
use crate::pieces::*;
use crate::positions::*;
use std::fmt;

/// Everything needed to take back one applied move. Produced by
/// [`Board::apply`](crate::boards::Board::apply) and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub start: Square,
    pub end: Square,
    pub piece: Piece,
    /// `Piece::Empty` if nothing was captured.
    pub captured: Piece,
    /// Set only when the captured piece did not stand on `end` (checkers jumps).
    pub captured_square: Option<Square>,
}

/// Answer of a move validator for one proposed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Illegal,
    Legal,
    /// Legal, and the piece on this square (not the end square) is captured.
    Jump(Square),
}

impl Verdict {
    pub fn is_legal(self) -> bool {
        self != Verdict::Illegal
    }

    pub fn captured_square(self) -> Option<Square> {
        match self {
            Verdict::Jump(sq) => Some(sq),
            _ => None,
        }
    }
}

impl From<bool> for Verdict {
    fn from(legal: bool) -> Self {
        if legal {
            Verdict::Legal
        } else {
            Verdict::Illegal
        }
    }
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.piece,
            self.start,
            if self.is_capture() { "x" } else { "-" },
            self.end
        )
    }
}
