//! Threat detection for the chess variants, built on the move rules: a square
//! is attacked when some enemy piece could legally move onto it right now.
use crate::boards::Board;
use crate::pieces::*;
use crate::positions::*;
use crate::rules;

/// True iff a piece of the opponent of `defender` has a legal move ending on
/// `square`.
pub fn square_under_attack(board: &Board, square: Square, defender: Side) -> bool {
    let attacker = defender.opposite();
    board
        .pieces_of(attacker)
        .any(|(start, _)| rules::is_legal(board, start, square, attacker))
}

/// Squares of all pieces of `side` that are currently attacked, in square order.
pub fn threatened_pieces(board: &Board, side: Side) -> Vec<Square> {
    board
        .pieces_of(side)
        .map(|(sq, _)| sq)
        .filter(|&sq| square_under_attack(board, sq, side))
        .collect()
}

/// Whether the king of `side` is attacked. A side without a king is never in
/// check.
pub fn in_check(board: &Board, side: Side) -> bool {
    board
        .find(Piece::new(side, Kind::King))
        .map_or(false, |king| square_under_attack(board, king, side))
}

/// Every square the piece on `start` may legally move to. Moves that leave the
/// own king attacked are included.
pub fn available_moves(board: &Board, start: Square, side: Side) -> Vec<Square> {
    Square::all()
        .filter(|&end| rules::is_legal(board, start, end, side))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::Variant;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn board(rows: [&str; 8]) -> Board {
        Board::from_rows(Variant::Fantasy, &rows)
    }

    #[test]
    fn test_rook_on_open_file_gives_check() {
        let b = board([
            "....r...", "........", "........", "........", "........", "........",
            "........", "....K...",
        ]);
        assert!(in_check(&b, Side::White));
        assert!(!in_check(&b, Side::Black));
        assert_eq!(threatened_pieces(&b, Side::White), vec![sq("e1")]);
    }

    #[test]
    fn test_standard_pieces_attack_everything() {
        // Standard pieces have no movement pattern, so the initial chess
        // position already has every piece attacked.
        let b = Variant::Chess.initial_board();
        assert!(in_check(&b, Side::White));
        assert!(in_check(&b, Side::Black));
        assert_eq!(threatened_pieces(&b, Side::White).len(), 16);
    }

    #[test]
    fn test_fantasy_attackers_respect_their_range() {
        // Hunter two files from the king, archer three ranks from the rook.
        let b = board([
            "R.......", "........", "........", "a.......", "........", "........",
            "........", "..h.K...",
        ]);
        assert!(in_check(&b, Side::White));
        assert_eq!(threatened_pieces(&b, Side::White), vec![sq("a8"), sq("e1")]);

        let far = board([
            "........", "........", "a.......", "........", "........", "........",
            "........", ".h..K..R",
        ]);
        assert!(!in_check(&far, Side::White));
        assert!(threatened_pieces(&far, Side::White).is_empty());
    }

    #[test]
    fn test_wizard_attacks_every_empty_square() {
        let b = board([
            "w.......", "........", "........", "........", "........", "........",
            "........", "......K.",
        ]);
        assert!(square_under_attack(&b, sq("d4"), Side::White));
        // The king itself is far away and not adjacent.
        assert!(!in_check(&b, Side::White));
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let b = board([
            "q.......", "........", "........", "........", "........", "........",
            "........", "P.......",
        ]);
        assert!(!in_check(&b, Side::White));
        assert_eq!(threatened_pieces(&b, Side::White), vec![sq("a1")]);
    }

    #[test]
    fn test_available_moves() {
        let b = Variant::Fantasy.initial_board();
        // Hunter on g1: g3 is the only empty square two steps away.
        assert_eq!(available_moves(&b, sq("g1"), Side::White), vec![sq("g3")]);
        // Archers have nothing in range at the start.
        assert!(available_moves(&b, sq("c1"), Side::White).is_empty());
        // Wizard: the 32 empty squares, adjacent squares are all own pieces.
        assert_eq!(available_moves(&b, sq("b1"), Side::White).len(), 32);
        // Not White's piece.
        assert!(available_moves(&b, sq("b8"), Side::White).is_empty());
    }
}
