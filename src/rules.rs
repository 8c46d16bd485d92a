//! Move rules for the chess variants.
//!
//! Only ownership and self-capture are checked for the standard pieces; they
//! have no movement pattern of their own. The fantasy pieces each have a
//! predicate, picked by [`legality_of`].
use crate::boards::Board;
use crate::pieces::*;
use crate::positions::*;

/// Movement predicate for one kind. Called only once ownership and
/// self-capture have been checked.
pub type MovePredicate = fn(&Board, Square, Square) -> bool;

/// Decides whether the piece on `start` may move to `end` for `side`.
pub fn is_legal(board: &Board, start: Square, end: Square, side: Side) -> bool {
    let kind = match board.get(start) {
        Piece::Occupied(s, kind) if s == side => kind,
        _ => return false,
    };
    if board.get(end).belongs_to(side) {
        return false;
    }
    legality_of(kind)(board, start, end)
}

pub fn legality_of(kind: Kind) -> MovePredicate {
    use Kind::*;
    match kind {
        Wizard => wizard_move as MovePredicate,
        Hunter => hunter_move,
        Archer => archer_move,
        Pawn | Knight | Bishop | Rook | Queen | King => unrestricted_move,
        // Men never stand on a chess board.
        Man => no_move,
    }
}

/// Any adjacent square, or any empty square anywhere on the board.
fn wizard_move(board: &Board, start: Square, end: Square) -> bool {
    (end - start).chebyshev() <= 1 || board.get(end).is_empty()
}

/// Exactly two squares along a file or a rank. Jumps over anything.
fn hunter_move(_board: &Board, start: Square, end: Square) -> bool {
    matches!((end - start).abs(), (2, 0) | (0, 2))
}

/// Shoots exactly three squares along a file or a rank, and only at an enemy.
fn archer_move(board: &Board, start: Square, end: Square) -> bool {
    let in_range = matches!((end - start).abs(), (3, 0) | (0, 3));
    // Self-capture was already ruled out, so anything standing there is an enemy.
    in_range && !board.get(end).is_empty()
}

fn unrestricted_move(_board: &Board, start: Square, end: Square) -> bool {
    start != end
}

fn no_move(_board: &Board, _start: Square, _end: Square) -> bool {
    false
}
