use crate::attacks;
use crate::boards::*;
use crate::checkers;
use crate::game_errors::*;
use crate::layouts::Variant;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;
use crate::rules;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::{self, Display};

/// A rule set: decides which transitions are legal and where a game starts.
pub trait Rules {
    fn variant(&self) -> Variant;

    fn validate(&self, board: &Board, start: Square, end: Square, side: Side) -> Verdict;

    /// All `(start, end)` pairs `validate` accepts for `side`.
    fn legal_moves(&self, board: &Board, side: Side) -> Vec<(Square, Square)>;

    fn initial_board(&self) -> Board {
        self.variant().initial_board()
    }
}

impl<R: Rules + ?Sized> Rules for Box<R> {
    fn variant(&self) -> Variant {
        (**self).variant()
    }

    fn validate(&self, board: &Board, start: Square, end: Square, side: Side) -> Verdict {
        (**self).validate(board, start, end, side)
    }

    fn legal_moves(&self, board: &Board, side: Side) -> Vec<(Square, Square)> {
        (**self).legal_moves(board, side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckersRules;

impl Rules for CheckersRules {
    fn variant(&self) -> Variant {
        Variant::Checkers
    }

    fn validate(&self, board: &Board, start: Square, end: Square, side: Side) -> Verdict {
        checkers::is_legal(board, start, end, side)
    }

    fn legal_moves(&self, board: &Board, side: Side) -> Vec<(Square, Square)> {
        checkers::generate_moves(board, side)
            .into_iter()
            .filter(|&(start, end)| checkers::is_legal(board, start, end, side).is_legal())
            .collect()
    }
}

/// Rules shared by plain chess and fantasy chess; they differ only in the
/// starting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessRules {
    variant: Variant,
}

impl ChessRules {
    pub fn standard() -> Self {
        ChessRules {
            variant: Variant::Chess,
        }
    }

    pub fn fantasy() -> Self {
        ChessRules {
            variant: Variant::Fantasy,
        }
    }
}

impl Rules for ChessRules {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn validate(&self, board: &Board, start: Square, end: Square, side: Side) -> Verdict {
        rules::is_legal(board, start, end, side).into()
    }

    fn legal_moves(&self, board: &Board, side: Side) -> Vec<(Square, Square)> {
        board
            .pieces_of(side)
            .flat_map(|(start, _)| {
                attacks::available_moves(board, start, side)
                    .into_iter()
                    .map(move |end| (start, end))
            })
            .collect()
    }
}

/// Picks the rule set for `variant`.
pub fn rules_for(variant: Variant) -> Box<dyn Rules> {
    match variant {
        Variant::Checkers => Box::new(CheckersRules),
        Variant::Chess => Box::new(ChessRules::standard()),
        Variant::Fantasy => Box::new(ChessRules::fantasy()),
    }
}

// -------------------------------------
// GameSession
// ------------------------------------

/// One running game: the board, whose turn it is and the moves played so far.
/// Every move is validated before it touches the board, and undo takes back
/// moves strictly in reverse order.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession<R: Rules> {
    rules: R,
    board: Board,
    side_to_move: Side,
    history: Vec<MoveRecord>,
}

impl<R: Rules> GameSession<R> {
    /// A game in the standard starting position, White to move.
    pub fn new(rules: R) -> Self {
        let board = rules.initial_board();
        GameSession::from_board(rules, board, Side::White)
    }

    /// A game starting from an arbitrary position.
    pub fn from_board(rules: R, board: Board, side_to_move: Side) -> Self {
        GameSession {
            rules,
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Plays `start -> end` for the side to move. Nothing changes if the move
    /// is rejected.
    pub fn submit(&mut self, start: Square, end: Square) -> GameResult<MoveRecord> {
        let verdict = self
            .rules
            .validate(&self.board, start, end, self.side_to_move);
        trace!("{} {} -> {}: {:?}", self.side_to_move, start, end, verdict);

        if !verdict.is_legal() {
            debug!("rejected {} -> {} for {}", start, end, self.side_to_move);
            return Err(GameError::IllegalMove { start, end });
        }

        let record = self.board.apply(start, end, verdict.captured_square());
        debug!("{} played {}", self.side_to_move, record);
        self.history.push(record);
        self.flip_side();
        Ok(record)
    }

    /// Takes back the last move and hands the turn back.
    pub fn undo(&mut self) -> GameResult<MoveRecord> {
        let record = self.history.pop().ok_or(GameError::NoHistory)?;
        self.board.undo(&record);
        self.flip_side();
        debug!("{} took back {}", self.side_to_move, record);
        Ok(record)
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        self.rules.legal_moves(&self.board, self.side_to_move)
    }

    /// Plays a uniformly chosen legal move.
    pub fn play_random_turn<G: Rng + ?Sized>(&mut self, rng: &mut G) -> GameResult<MoveRecord> {
        let moves = self.legal_moves();
        let &(start, end) = moves.choose(rng).ok_or(GameError::NoLegalMoves)?;
        self.submit(start, end)
    }

    fn flip_side(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }
}

impl<R: Rules> Display for GameSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move: {}  Player: {}\n{}",
            self.history.len() + 1,
            self.side_to_move,
            self.board
        )
    }
}
