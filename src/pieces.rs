use std::fmt::{self, Display};

// ---------------------------------------------
// Pieces
// ---------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

/// Every kind of piece any of the variants knows about. Checkers only uses
/// `Man`; the chess variants use the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Man,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Wizard,
    Hunter,
    Archer,
}

/// Contents of a single square. `Empty` has no side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    Occupied(Side, Kind),
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

impl Kind {
    /// Letter used for this kind. White uses the uppercase form in the chess
    /// variants.
    pub fn letter(self) -> char {
        use Kind::*;
        match self {
            Man => 'm',
            Pawn => 'p',
            Knight => 'n',
            Bishop => 'b',
            Rook => 'r',
            Queen => 'q',
            King => 'k',
            Wizard => 'w',
            Hunter => 'h',
            Archer => 'a',
        }
    }

    /// Inverse of [`Kind::letter`] for the chess kinds.
    pub fn from_letter(c: char) -> Option<Kind> {
        use Kind::*;
        let kind = match c.to_ascii_lowercase() {
            'p' => Pawn,
            'n' => Knight,
            'b' => Bishop,
            'r' => Rook,
            'q' => Queen,
            'k' => King,
            'w' => Wizard,
            'h' => Hunter,
            'a' => Archer,
            _ => return None,
        };
        Some(kind)
    }
}

impl Piece {
    pub const fn new(side: Side, kind: Kind) -> Piece {
        Piece::Occupied(side, kind)
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Piece::Occupied(side, _) => Some(side),
            Piece::Empty => None,
        }
    }

    pub fn kind(self) -> Option<Kind> {
        match self {
            Piece::Occupied(_, kind) => Some(kind),
            Piece::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// True for a piece of the other side. Empty squares are nobody's enemy.
    pub fn is_enemy_of(self, side: Side) -> bool {
        self.side() == Some(side.opposite())
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match *self {
            Piece::Empty => '.',
            // Checkers men are drawn as the initial of their colour.
            Piece::Occupied(Side::White, Kind::Man) => 'w',
            Piece::Occupied(Side::Black, Kind::Man) => 'b',
            Piece::Occupied(Side::White, kind) => kind.letter().to_ascii_uppercase(),
            Piece::Occupied(Side::Black, kind) => kind.letter(),
        };
        write!(f, "{}", symbol)
    }
}
