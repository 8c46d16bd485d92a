//! Text front end: turns typed lines into session calls and session results
//! into messages. Reading and printing happen only in [`Console::run`].
use crate::attacks;
use crate::game_errors::*;
use crate::game_state::*;
use crate::positions::Square;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt::Write as _;
use std::io::{stdout, Write};
use std::str::FromStr;
use text_io::try_read;

const HELP: &str = "\
commands:
  <from> <to>   play a move, e.g. `e2 e4`
  undo          take back the last move
  hint <square> list where the piece on <square> may go
  threat        list your attacked pieces and whether you are in check
  moves         list every legal move
  random        play a random legal move
  help          show this text
  quit          leave the game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Square, Square),
    Undo,
    Hint(Square),
    Threat,
    Moves,
    Random,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let cmd = match words.as_slice() {
            ["undo"] => Command::Undo,
            ["hint", square] => Command::Hint(square.parse()?),
            ["threat"] => Command::Threat,
            ["moves"] => Command::Moves,
            ["random"] => Command::Random,
            ["help"] | ["?"] => Command::Help,
            ["quit"] | ["exit"] => Command::Quit,
            [from, to] => Command::Move(from.parse()?, to.parse()?),
            _ => return Err(GameError::InvalidCommand(s.trim().to_string())),
        };
        Ok(cmd)
    }
}

pub struct Console<R: Rules> {
    session: GameSession<R>,
    rng: SmallRng,
}

impl<R: Rules> Console<R> {
    /// `seed` makes the `random` command reproducible.
    pub fn new(session: GameSession<R>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Console { session, rng }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// Carries out one command and describes the outcome. `Quit` is left to
    /// the caller.
    pub fn execute(&mut self, cmd: Command) -> GameResult<String> {
        let mover = self.session.side_to_move();
        let msg = match cmd {
            Command::Move(start, end) => {
                let rec = self.session.submit(start, end)?;
                format!("{} played {}{}", mover, rec, self.check_note())
            }
            Command::Random => {
                let rec = self.session.play_random_turn(&mut self.rng)?;
                format!("{} played {}{}", mover, rec, self.check_note())
            }
            Command::Undo => {
                let rec = self.session.undo()?;
                format!("took back {}", rec)
            }
            Command::Hint(start) => {
                let targets = self.targets_of(start);
                if targets.is_empty() {
                    format!("no moves from {}", start)
                } else {
                    format!("{} -> {}", start, join(&targets))
                }
            }
            Command::Threat => self.threat_report(),
            Command::Moves => {
                let mut out = String::new();
                for (start, end) in self.session.legal_moves() {
                    let _ = write!(out, "{}-{} ", start, end);
                }
                if out.is_empty() {
                    "no legal moves".to_string()
                } else {
                    out.trim_end().to_string()
                }
            }
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        };
        Ok(msg)
    }

    /// Interactive loop on stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) {
        info!("starting {}", self.session.rules().variant());
        println!("{}", HELP);
        loop {
            println!("\n{}", self.session);
            print!("> ");
            let _ = stdout().flush();

            let line: String = match try_read!("{}\n") {
                Ok(line) => line,
                Err(_) => break,
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(cmd) => match self.execute(cmd) {
                    Ok(msg) => println!("{}", msg),
                    Err(e) => {
                        debug!("command failed: {}", e);
                        println!("{}, try again.", e);
                    }
                },
                Err(e) => println!("{}", e),
            }
        }
    }

    fn targets_of(&self, start: Square) -> Vec<Square> {
        let board = self.session.board();
        let side = self.session.side_to_move();
        if self.session.rules().variant().has_kings() {
            attacks::available_moves(board, start, side)
        } else {
            self.session
                .legal_moves()
                .into_iter()
                .filter(|&(s, _)| s == start)
                .map(|(_, end)| end)
                .collect()
        }
    }

    fn threat_report(&self) -> String {
        if !self.session.rules().variant().has_kings() {
            return "no threat tracking in checkers".to_string();
        }
        let board = self.session.board();
        let side = self.session.side_to_move();
        let threatened = attacks::threatened_pieces(board, side);
        let mut out = if threatened.is_empty() {
            format!("no {} piece is attacked", side)
        } else {
            format!("attacked: {}", join(&threatened))
        };
        if attacks::in_check(board, side) {
            let _ = write!(out, "\n{} is in check", side);
        }
        out
    }

    fn check_note(&self) -> String {
        let side = self.session.side_to_move();
        if self.session.rules().variant().has_kings()
            && attacks::in_check(self.session.board(), side)
        {
            format!(" ({} is in check)", side)
        } else {
            String::new()
        }
    }
}

fn join(squares: &[Square]) -> String {
    squares
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
