//! Board state with placement and five-in-a-row detection.

use std::fmt;

use crate::constants::{
    BLACK_WIN_CODE, CONTINUE_CODE, DIRECTIONS, DRAW_CODE, WHITE_WIN_CODE, WIN_LENGTH,
};

/// Cell marks. `Black` and `White` double as the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Sign of this side in black-relative scores: +1 for Black, -1 for White.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Stone::Black => 1.0,
            Stone::White => -1.0,
            Stone::Empty => 0.0,
        }
    }
}

/// Outcome of [`Board::check`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// No five in a row and empty cells remain.
    Continue,
    /// The given color has five in a row.
    Win(Stone),
    /// Every cell is filled and nobody has five in a row.
    Draw,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Status::Continue
    }

    /// Integer terminal code: 0 continue, +1 black wins, -1 white wins,
    /// `i32::MAX` draw.
    pub fn code(self) -> i32 {
        match self {
            Status::Continue => CONTINUE_CODE,
            Status::Win(Stone::Black) => BLACK_WIN_CODE,
            Status::Win(Stone::White) => WHITE_WIN_CODE,
            Status::Win(Stone::Empty) => CONTINUE_CODE,
            Status::Draw => DRAW_CODE,
        }
    }
}

/// Square N×N board.
///
/// Coordinates are signed so that callers can probe past the edges;
/// anything outside `0..size` is simply off the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    stones: usize,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stones on the board.
    #[inline]
    pub fn stones(&self) -> usize {
        self.stones
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    #[inline]
    fn idx(&self, row: i32, col: i32) -> usize {
        row as usize * self.size + col as usize
    }

    /// True if (row, col) is on the board.
    #[inline]
    pub fn valid(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    /// Mark at (row, col), or `None` if the coordinate is off the board.
    #[inline]
    pub fn stone(&self, row: i32, col: i32) -> Option<Stone> {
        if !self.valid(row, col) {
            return None;
        }
        Some(self.cells[self.idx(row, col)])
    }

    /// Place a stone. Returns false, leaving the board untouched, if the
    /// point is off the board, already occupied, or `stone` is `Empty`.
    pub fn place(&mut self, row: i32, col: i32, stone: Stone) -> bool {
        if stone == Stone::Empty || self.stone(row, col) != Some(Stone::Empty) {
            return false;
        }
        let i = self.idx(row, col);
        self.cells[i] = stone;
        self.stones += 1;
        true
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.stones = 0;
    }

    /// Scan the whole board for five in a row.
    ///
    /// Cells are visited row-major and each stone tries the directions in
    /// [`DIRECTIONS`] order; the first run found decides the winner.
    pub fn check(&self) -> Status {
        let n = self.size as i32;
        for row in 0..n {
            for col in 0..n {
                let color = self.cells[self.idx(row, col)];
                if color == Stone::Empty {
                    continue;
                }
                for (dr, dc) in DIRECTIONS {
                    if self.run_from(row, col, dr, dc, color) {
                        return Status::Win(color);
                    }
                }
            }
        }
        if self.is_full() {
            Status::Draw
        } else {
            Status::Continue
        }
    }

    fn run_from(&self, row: i32, col: i32, dr: i32, dc: i32, color: Stone) -> bool {
        (0..WIN_LENGTH as i32).all(|k| self.stone(row + k * dr, col + k * dc) == Some(color))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:>2} ", col)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>2} ", row)?;
            for col in 0..self.size {
                let ch = match self.cells[row * self.size + col] {
                    Stone::Black => 'B',
                    Stone::White => 'W',
                    Stone::Empty => '.',
                };
                write!(f, " {ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
