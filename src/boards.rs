use crate::game_errors::*;
use crate::layouts::Variant;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;
use array_init::array_init;
use std::fmt::{self, Display};
use std::ops;

// ---------------------------------------------
// Board Types
// ---------------------------------------------

// Displays the first 64 items from an iterator in a chessboard style:
//
//   a b c d e f g h
// 8 i1 i2 i3 ...   8
// 7 ....
//
// Where i1,...i64 are the items of the iterator.
fn display_chessboard_style<I, C>(it: &mut I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    I: Iterator<Item = C>,
    C: Display,
{
    write!(f, " ")?;
    for c in 'a'..'i' {
        write!(f, " {}", c)?;
    }
    for row in 0..BOARD_SIZE {
        write!(f, "\n{} ", BOARD_SIZE - row)?;
        for _col in 0..BOARD_SIZE {
            match it.next() {
                Some(i) => write!(f, "{} ", i)?,
                None => return Err(fmt::Error),
            }
        }
        write!(f, "{}", BOARD_SIZE - row)?;
    }
    write!(f, "\n ")?;
    for c in 'a'..'i' {
        write!(f, " {}", c)?;
    }
    Ok(())
}

/// Mailbox representation: one `Piece` per square, `Piece::Empty` included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pieces: [Piece; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    pub fn empty() -> Board {
        Board {
            pieces: array_init(|_| Piece::Empty),
        }
    }

    /// Builds a board from eight text rows, top row (eighth rank) first.
    /// Letters are read with the piece table of `variant`; `.` and ` ` are empty.
    ///
    /// Panics on rows that do not describe a board. Only meant for layouts
    /// known at compile time and for tests.
    pub fn from_rows(variant: Variant, rows: &[&str; 8]) -> Board {
        let mut board = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), 8, "row {} must be 8 wide: {:?}", rank, row);
            for (file, c) in row.chars().enumerate() {
                let piece = variant
                    .piece_from_char(c)
                    .unwrap_or_else(|| panic!("unknown piece letter {:?} for {:?}", c, variant));
                board.pieces[rank * BOARD_SIZE as usize + file] = piece;
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> Piece {
        self.pieces[square.index()]
    }

    /// Like [`Board::get`] but for raw coordinates, which may be off the board.
    pub fn piece_at(&self, file: i16, rank: i16) -> GameResult<Piece> {
        Square::new(file, rank).map(|sq| self.get(sq))
    }

    /// Puts `piece` on `square`, replacing whatever was there.
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.pieces[square.index()] = piece;
    }

    /// Moves the piece on `start` to `end` without any legality checks.
    ///
    /// Whatever stood on `end` is recorded as captured. If `captured_square` is
    /// given and differs from `end` (a checkers jump), that square is cleared
    /// instead and its occupant recorded as captured.
    pub fn apply(&mut self, start: Square, end: Square, captured_square: Option<Square>) -> MoveRecord {
        debug_assert!(start != end, "apply called with start == end ({})", start);

        let captured_square = captured_square.filter(|&sq| sq != end);
        let piece = self.get(start);
        let captured = match captured_square {
            Some(sq) => self.get(sq),
            None => self.get(end),
        };

        self.set(end, piece);
        self.set(start, Piece::Empty);
        if let Some(sq) = captured_square {
            self.set(sq, Piece::Empty);
        }

        MoveRecord {
            start,
            end,
            piece,
            captured,
            captured_square,
        }
    }

    /// Exact inverse of the `apply` call that produced `record`. Records must
    /// be undone in reverse order of application.
    pub fn undo(&mut self, record: &MoveRecord) {
        self.set(record.start, record.piece);
        match record.captured_square {
            Some(sq) => {
                self.set(record.end, Piece::Empty);
                self.set(sq, record.captured);
            }
            None => self.set(record.end, record.captured),
        }
    }

    /// All occupied squares of `side`, in square order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.get(sq)))
            .filter(move |(_, p)| p.belongs_to(side))
    }

    /// First square holding exactly `piece`, if any.
    pub fn find(&self, piece: Piece) -> Option<Square> {
        Square::all().find(|&sq| self.get(sq) == piece)
    }
}

impl ops::Index<Square> for Board {
    type Output = Piece;

    fn index(&self, index: Square) -> &Piece {
        &self.pieces[index.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_chessboard_style(&mut self.pieces.iter(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_apply_and_undo_quiet_move() {
        let mut b = Variant::Chess.initial_board();
        let prev = b.clone();
        let rec = b.apply(sq("e2"), sq("e4"), None);

        assert_eq!(rec.piece, Piece::new(Side::White, Kind::Pawn));
        assert_eq!(rec.captured, Piece::Empty);
        assert_eq!(b.get(sq("e2")), Piece::Empty);
        assert_eq!(b.get(sq("e4")), Piece::new(Side::White, Kind::Pawn));

        b.undo(&rec);
        assert_eq!(b, prev);
    }

    #[test]
    fn test_apply_and_undo_capture_on_end() {
        let mut b = Variant::Chess.initial_board();
        let prev = b.clone();
        let rec = b.apply(sq("d1"), sq("d7"), None);

        assert!(rec.is_capture());
        assert_eq!(rec.captured, Piece::new(Side::Black, Kind::Pawn));
        assert_eq!(rec.captured_square, None);
        assert_eq!(b.get(sq("d7")), Piece::new(Side::White, Kind::Queen));

        b.undo(&rec);
        assert_eq!(b, prev);
    }

    #[test]
    fn test_apply_and_undo_jump() {
        let mut b = Board::from_rows(
            Variant::Checkers,
            &[
                "........", "........", "........", "........", "...b....", "....w...",
                "........", "........",
            ],
        );
        let prev = b.clone();
        let rec = b.apply(sq("e3"), sq("c5"), Some(sq("d4")));

        assert_eq!(rec.captured, Piece::new(Side::Black, Kind::Man));
        assert_eq!(rec.captured_square, Some(sq("d4")));
        assert_eq!(b.get(sq("d4")), Piece::Empty);
        assert_eq!(b.get(sq("c5")), Piece::new(Side::White, Kind::Man));

        b.undo(&rec);
        assert_eq!(b, prev);
    }

    #[test]
    fn test_captured_square_equal_to_end_is_ignored() {
        let mut b = Variant::Chess.initial_board();
        let rec = b.apply(sq("a1"), sq("a7"), Some(sq("a7")));
        assert_eq!(rec.captured_square, None);
        assert_eq!(rec.captured, Piece::new(Side::Black, Kind::Pawn));
    }

    #[test]
    fn test_piece_at_bounds() {
        let b = Variant::Chess.initial_board();
        assert_eq!(b.piece_at(4, 7), Ok(Piece::new(Side::White, Kind::King)));
        assert_eq!(
            b.piece_at(8, 7),
            Err(GameError::OutOfBounds { file: 8, rank: 7 })
        );
    }

    #[test]
    fn test_display() {
        let b = Variant::Chess.initial_board();
        let text = b.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
    }
}
