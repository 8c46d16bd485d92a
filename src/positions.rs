use crate::game_errors::*;
use std::fmt::{self, Display};
use std::str::FromStr;

// Board squares on an 8x8 board.
//
// Numbered as follows (index = rank * 8 + file):
//
//     a  b  c  d  e  f  g  h
//   ---------------------------
// 8 | 0  1  2  3  4  5  6  7  | 8
// 7 | 8  9  10 11 12 13 14 15 | 7
// 6 | 16 17 18 19 20 21 22 23 | 6
// 5 | 24 25 26 27 28 29 30 31 | 5
// 4 | 32 33 34 35 36 37 38 39 | 4
// 3 | 40 41 42 43 44 45 46 47 | 3
// 2 | 48 49 50 51 52 53 54 55 | 2
// 1 | 56 57 58 59 60 61 62 63 | 1
//   ---------------------------
//    a  b  c  d  e  f  g  h
//
// So rank index 0 is the eighth rank, the top row as printed. White sits on
// the high rank indices and moves "up" towards rank index 0.
//
// ---------------------------------------------
// Squares
// ---------------------------------------------

pub const BOARD_SIZE: u8 = 8;
pub const NUM_SQUARES: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// A square on the board. Always in bounds: the only ways to get one are the
/// checked constructors and the offset arithmetic, which returns `None` when
/// leaving the board.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

/// A displacement between two squares, in files and rank indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Offset {
    pub files: i8,
    pub ranks: i8,
}

impl Offset {
    pub const fn new(files: i8, ranks: i8) -> Offset {
        Offset { files, ranks }
    }

    /// Absolute displacement along each axis.
    pub fn abs(self) -> (u8, u8) {
        (self.files.unsigned_abs(), self.ranks.unsigned_abs())
    }

    /// Number of king steps needed to cover the displacement.
    pub fn chebyshev(self) -> u8 {
        let (df, dr) = self.abs();
        df.max(dr)
    }
}

/// The four diagonal directions, as used for checkers.
pub const DIAGONALS: [Offset; 4] = [
    Offset::new(-1, -1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(1, 1),
];

impl Square {
    /// Checked constructor. Takes signed values so callers can pass the result
    /// of arithmetic without casting first.
    pub fn new(file: i16, rank: i16) -> GameResult<Square> {
        if Square::in_board(file, rank) {
            Ok(Square((rank * BOARD_SIZE as i16 + file) as u8))
        } else {
            Err(GameError::OutOfBounds { file, rank })
        }
    }

    /// Checks if file and rank belong to a legal board square.
    pub const fn in_board(file: i16, rank: i16) -> bool {
        file >= 0 && rank >= 0 && file < BOARD_SIZE as i16 && rank < BOARD_SIZE as i16
    }

    pub fn from_index(index: usize) -> GameResult<Square> {
        if index < NUM_SQUARES {
            Ok(Square(index as u8))
        } else {
            Err(GameError::OutOfBounds {
                file: (index % 8) as i16,
                rank: (index / 8) as i16,
            })
        }
    }

    pub const fn file(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    pub const fn rank(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Square reached by moving by `offset`, if it is still on the board.
    pub fn offset(self, offset: Offset) -> Option<Square> {
        let file = self.file() as i16 + offset.files as i16;
        let rank = self.rank() as i16 + offset.ranks as i16;
        Square::new(file, rank).ok()
    }

    /// The square halfway between `self` and `other`. Only meaningful when the
    /// displacement is even on both axes.
    pub fn midpoint(self, other: Square) -> Square {
        let file = (self.file() + other.file()) / 2;
        let rank = (self.rank() + other.rank()) / 2;
        Square(rank * BOARD_SIZE + file)
    }

    /// Allows to iterate over all squares on the board
    pub fn all() -> SquareIterator {
        SquareIterator(0)
    }
}

pub struct SquareIterator(u8);

impl Iterator for SquareIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 as usize >= NUM_SQUARES {
            None
        } else {
            self.0 += 1;
            Some(Square(self.0 - 1))
        }
    }
}

impl_op_ex!(+ |a: &Square, b: &Offset| -> Option<Square> { a.offset(*b) });
impl_op_ex!(- |a: &Square, b: &Square| -> Offset {
    Offset::new(
        a.file() as i8 - b.file() as i8,
        a.rank() as i8 - b.rank() as i8,
    )
});

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GameError::InvalidSquare(s.to_string());
        let mut chars = s.trim().chars();

        let col = chars.next().ok_or_else(err)?.to_ascii_lowercase();
        let row = chars.next().and_then(|r| r.to_digit(10)).ok_or_else(err)?;

        if chars.next().is_some() || !('a'..='h').contains(&col) || !(1..=8).contains(&row) {
            return Err(err());
        }

        let file = col as i16 - 'a' as i16;
        let rank = BOARD_SIZE as i16 - row as i16;
        Square::new(file, rank)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file()) as char,
            BOARD_SIZE - self.rank(),
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_corners() {
        assert_eq!(sq("a8").index(), 0);
        assert_eq!(sq("h8").index(), 7);
        assert_eq!(sq("a1").index(), 56);
        assert_eq!(sq("h1").index(), 63);
        assert_eq!(sq("e2"), Square::new(4, 6).unwrap());
        assert_eq!(sq("E2"), sq("e2"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for s in ["", "e", "e9", "e0", "i1", "e22", "22", "ee"] {
            assert_eq!(
                s.parse::<Square>(),
                Err(GameError::InvalidSquare(s.to_string())),
                "{:?} should not parse",
                s
            );
        }
    }

    #[test]
    fn test_display_roundtrips_every_square() {
        for s in Square::all() {
            assert_eq!(sq(&s.to_string()), s);
        }
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(
            Square::new(8, 0),
            Err(GameError::OutOfBounds { file: 8, rank: 0 })
        );
        assert!(Square::new(-1, 3).is_err());
        assert!(Square::from_index(64).is_err());
    }

    #[test]
    fn test_offset_arithmetic() {
        let e2 = sq("e2");
        assert_eq!(e2 + Offset::new(0, -2), Some(sq("e4")));
        assert_eq!(sq("a1") + Offset::new(-1, 0), None);
        assert_eq!(sq("h8") + Offset::new(0, -1), None);
        assert_eq!(sq("e4") - e2, Offset::new(0, -2));
        assert_eq!((sq("h8") - sq("a1")).chebyshev(), 7);
        assert_eq!(sq("c3").midpoint(sq("e5")), sq("d4"));
    }
}
