//! Turn loop: alternate players until the board reports a result.

use std::io::Write;

use crate::board::{Board, Status, Stone};
use crate::player::{GameError, Player};

/// A game between two players on one board. Black moves first.
pub struct Game {
    board: Board,
    black: Player,
    white: Player,
    verbose: bool,
}

impl Game {
    pub fn new(size: usize, black: Player, white: Player) -> Self {
        Self {
            board: Board::new(size),
            black,
            white,
            verbose: false,
        }
    }

    /// Report search statistics on stderr after each engine move.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play a game from an empty board, writing the board and the side to
    /// move before every ply, then the final board and terminal code.
    pub fn run(&mut self, out: &mut impl Write) -> Result<Status, GameError> {
        self.board.reset();
        let mut side = Stone::Black;
        let mut status = self.board.check();
        while !status.is_terminal() {
            write!(out, "{}", self.board)?;
            writeln!(out, "{}", side_label(side))?;
            out.flush()?;

            let player = match side {
                Stone::White => &mut self.white,
                _ => &mut self.black,
            };
            player.play(&mut self.board, side, self.verbose)?;
            side = side.opponent();
            status = self.board.check();
        }
        write!(out, "{}", self.board)?;
        writeln!(out, "{}", status.code())?;
        Ok(status)
    }
}

fn side_label(side: Stone) -> char {
    match side {
        Stone::White => 'W',
        _ => 'B',
    }
}
