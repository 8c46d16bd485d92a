use crate::boards::Board;
use crate::pieces::*;
use lazy_static::lazy_static;
use std::fmt;

/// The games this crate knows how to set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Variant {
    Checkers,
    Chess,
    /// Chess with a Wizard, a Hunter and two Archers in the back rank.
    Fantasy,
}

lazy_static! {
    static ref CHECKERS_START: Board = Board::from_rows(
        Variant::Checkers,
        &[
            ".b.b.b.b",
            "b.b.b.b.",
            ".b.b.b.b",
            "........",
            "........",
            "w.w.w.w.",
            ".w.w.w.w",
            "w.w.w.w.",
        ],
    );
    static ref CHESS_START: Board = Board::from_rows(
        Variant::Chess,
        &[
            "rnbqkbnr",
            "pppppppp",
            "........",
            "........",
            "........",
            "........",
            "PPPPPPPP",
            "RNBQKBNR",
        ],
    );
    static ref FANTASY_START: Board = Board::from_rows(
        Variant::Fantasy,
        &[
            "rwaqkahr",
            "pppppppp",
            "........",
            "........",
            "........",
            "........",
            "PPPPPPPP",
            "RWAQKAHR",
        ],
    );
}

impl Variant {
    /// Standard starting placement. White always moves first.
    pub fn initial_board(self) -> Board {
        match self {
            Variant::Checkers => CHECKERS_START.clone(),
            Variant::Chess => CHESS_START.clone(),
            Variant::Fantasy => FANTASY_START.clone(),
        }
    }

    /// Reads one square of a text layout. Checkers uses `w`/`b` for the men of
    /// each side, the chess variants use upper case for White.
    pub fn piece_from_char(self, c: char) -> Option<Piece> {
        if c == '.' || c == ' ' {
            return Some(Piece::Empty);
        }
        match self {
            Variant::Checkers => match c {
                'w' => Some(Piece::new(Side::White, Kind::Man)),
                'b' => Some(Piece::new(Side::Black, Kind::Man)),
                _ => None,
            },
            Variant::Chess | Variant::Fantasy => {
                let kind = Kind::from_letter(c)?;
                if self == Variant::Chess && matches!(kind, Kind::Wizard | Kind::Hunter | Kind::Archer) {
                    return None;
                }
                let side = if c.is_ascii_uppercase() {
                    Side::White
                } else {
                    Side::Black
                };
                Some(Piece::new(side, kind))
            }
        }
    }

    /// Whether threat and check reporting make sense for this variant.
    pub fn has_kings(self) -> bool {
        !matches!(self, Variant::Checkers)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Checkers => "checkers",
            Variant::Chess => "chess",
            Variant::Fantasy => "fantasy chess",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::Square;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_checkers_setup() {
        let b = Variant::Checkers.initial_board();
        assert_eq!(b.pieces_of(Side::White).count(), 12);
        assert_eq!(b.pieces_of(Side::Black).count(), 12);
        assert_eq!(b.get(sq("a1")), Piece::new(Side::White, Kind::Man));
        assert_eq!(b.get(sq("b8")), Piece::new(Side::Black, Kind::Man));
        assert_eq!(b.get(sq("a8")), Piece::Empty);
    }

    #[test]
    fn test_fantasy_setup_keeps_kings_home() {
        let b = Variant::Fantasy.initial_board();
        assert_eq!(b.get(sq("e1")), Piece::new(Side::White, Kind::King));
        assert_eq!(b.get(sq("e8")), Piece::new(Side::Black, Kind::King));
        assert_eq!(b.get(sq("b1")), Piece::new(Side::White, Kind::Wizard));
        assert_eq!(b.get(sq("g8")), Piece::new(Side::Black, Kind::Hunter));
        assert_eq!(b.get(sq("c1")), Piece::new(Side::White, Kind::Archer));
        assert_eq!(b.get(sq("f8")), Piece::new(Side::Black, Kind::Archer));
    }

    #[test]
    fn test_letters_are_variant_specific() {
        assert_eq!(Variant::Chess.piece_from_char('W'), None);
        assert_eq!(
            Variant::Fantasy.piece_from_char('W'),
            Some(Piece::new(Side::White, Kind::Wizard))
        );
        assert_eq!(
            Variant::Checkers.piece_from_char('b'),
            Some(Piece::new(Side::Black, Kind::Man))
        );
        assert_eq!(
            Variant::Chess.piece_from_char('b'),
            Some(Piece::new(Side::Black, Kind::Bishop))
        );
        assert_eq!(Variant::Checkers.piece_from_char('k'), None);
    }
}
