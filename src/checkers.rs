//! Move rules for checkers. Men only ever move forward, one diagonal step or a
//! single jump over an enemy man. There are no kings, no chained jumps and
//! capturing is never forced.
use crate::boards::Board;
use crate::moves::Verdict;
use crate::pieces::*;
use crate::positions::*;

/// Decides whether the man on `start` may move to `end` for `side`. A jump
/// reports the square of the man it captures.
pub fn is_legal(board: &Board, start: Square, end: Square, side: Side) -> Verdict {
    let piece = board.get(start);
    if !piece.belongs_to(side) {
        return Verdict::Illegal;
    }
    if !board.get(end).is_empty() {
        return Verdict::Illegal;
    }

    let delta = end - start;
    let (dx, dy) = delta.abs();
    if dx != dy {
        return Verdict::Illegal;
    }

    // White plays up the board (towards rank index 0), Black down.
    let forward = match side {
        Side::White => end.rank() < start.rank(),
        Side::Black => end.rank() > start.rank(),
    };
    if !forward {
        return Verdict::Illegal;
    }

    match dx {
        1 => Verdict::Legal,
        2 => {
            let jumped = start.midpoint(end);
            if board.get(jumped).is_enemy_of(side) {
                Verdict::Jump(jumped)
            } else {
                Verdict::Illegal
            }
        }
        _ => Verdict::Illegal,
    }
}

/// Candidate moves for every man of `side`: a step onto an empty diagonal
/// neighbour, or a jump over an enemy neighbour onto the empty square behind
/// it. All four diagonals are considered, so backward candidates show up here
/// and are only rejected by [`is_legal`].
pub fn generate_moves(board: &Board, side: Side) -> Vec<(Square, Square)> {
    let mut res = Vec::new();

    for (start, _) in board.pieces_of(side) {
        for dir in DIAGONALS {
            let neighbour = match start + dir {
                Some(sq) => sq,
                None => continue,
            };
            let occupant = board.get(neighbour);
            if occupant.is_empty() {
                res.push((start, neighbour));
            } else if occupant.is_enemy_of(side) {
                if let Some(landing) = neighbour + dir {
                    if board.get(landing).is_empty() {
                        res.push((start, landing));
                    }
                }
            }
        }
    }
    res
}
