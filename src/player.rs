//! Move sources for either side of a game.

use std::fmt;
use std::io::{self, BufRead};

use crate::board::{Board, Stone};
use crate::search::SearchEngine;

/// Errors surfaced while playing a game.
#[derive(Debug)]
pub enum GameError {
    /// A player could not find any move to make
    NoMove,
    /// Interactive input ended before a legal move was entered
    InputClosed,
    /// Reading input or writing the transcript failed
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoMove => write!(f, "Error: player produced no move"),
            GameError::InputClosed => write!(f, "Error: input closed before a legal move"),
            GameError::Io(e) => write!(f, "Error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}

/// One side of a game. Every successful `play` places exactly one stone.
pub enum Player {
    /// Fills the first empty cell in row-major order.
    Naive,
    /// Plays the move chosen by a minimax search.
    Search(SearchEngine),
    /// Reads `row col` lines until a legal move is entered.
    Interactive(Box<dyn BufRead>),
}

impl Player {
    pub fn naive() -> Self {
        Player::Naive
    }

    pub fn search(engine: SearchEngine) -> Self {
        Player::Search(engine)
    }

    /// Human player reading moves from stdin.
    pub fn console() -> Self {
        Player::Interactive(Box::new(io::BufReader::new(io::stdin())))
    }

    /// Short label for transcripts.
    pub fn name(&self) -> String {
        match self {
            Player::Naive => "naive".to_string(),
            Player::Search(engine) => {
                format!("minimax(depth {}, {})", engine.max_depth(), engine.evaluator())
            }
            Player::Interactive(_) => "human".to_string(),
        }
    }

    /// Place one stone of color `side` on `board`.
    pub fn play(&mut self, board: &mut Board, side: Stone, verbose: bool) -> Result<(), GameError> {
        match self {
            Player::Naive => play_first_empty(board, side),
            Player::Search(engine) => {
                let before = board.stones();
                let score = engine.search(board, side);
                if verbose {
                    eprintln!(
                        "search: score={score} move={:?} nodes={}",
                        engine.last_move(),
                        engine.nodes()
                    );
                }
                if board.stones() == before {
                    return Err(GameError::NoMove);
                }
                Ok(())
            }
            Player::Interactive(input) => play_from_input(input.as_mut(), board, side),
        }
    }
}

fn play_first_empty(board: &mut Board, side: Stone) -> Result<(), GameError> {
    let n = board.size() as i32;
    for row in 0..n {
        for col in 0..n {
            if board.place(row, col, side) {
                return Ok(());
            }
        }
    }
    Err(GameError::NoMove)
}

/// Parse a "row col" line into coordinates.
fn parse_move(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some((row, col))
}

fn play_from_input(input: &mut dyn BufRead, board: &mut Board, side: Stone) -> Result<(), GameError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        match parse_move(&line) {
            Some((row, col)) if board.place(row, col, side) => return Ok(()),
            Some((row, col)) => eprintln!("illegal move: ({row}, {col})"),
            None if line.trim().is_empty() => {}
            None => eprintln!("expected \"row col\", got {:?}", line.trim()),
        }
    }
}
