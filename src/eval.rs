//! Static position evaluation.
//!
//! Both evaluators scan every length-5 window that fits on the board, in all
//! four line directions. A window holding only black stones (or none) adds
//! `f(black)` to black's tally; a window holding only white stones (or none)
//! adds `f(white)` to white's tally. The score is black's tally minus white's.
//!
//! Since `f(0) = 1` for both weightings, an all-empty window counts once for
//! each side. The two contributions cancel in the score, so the empty board
//! evaluates to exactly `0.0`, while each tally on its own equals the number
//! of windows on the board.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Stone};
use crate::constants::{DIRECTIONS, WIN_LENGTH};

/// Per-count window weighting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Evaluator {
    /// `f(k) = 2^k`
    Exponential,
    /// `f(k) = k!`
    Factorial,
}

impl Evaluator {
    /// Weight of a window holding `k` stones of a single color.
    #[inline]
    pub fn weight(self, k: u32) -> f64 {
        match self {
            Evaluator::Exponential => f64::from(1u32 << k),
            Evaluator::Factorial => f64::from((1..=k).product::<u32>()),
        }
    }

    /// Black's net advantage. Negate for White's point of view.
    #[must_use]
    pub fn evaluate(self, board: &Board) -> f64 {
        let (black, white) = self.tally(board);
        black - white
    }

    /// Black-favouring and white-favouring window sums, before subtraction.
    pub fn tally(self, board: &Board) -> (f64, f64) {
        let mut black_sum = 0.0;
        let mut white_sum = 0.0;
        for_each_window(board, |black, white| {
            if white == 0 {
                black_sum += self.weight(black);
            }
            if black == 0 {
                white_sum += self.weight(white);
            }
        });
        (black_sum, white_sum)
    }
}

/// Call `f(black_count, white_count)` for every window fully on the board.
fn for_each_window(board: &Board, mut f: impl FnMut(u32, u32)) {
    let n = board.size() as i32;
    let span = WIN_LENGTH as i32 - 1;
    for row in 0..n {
        for col in 0..n {
            for (dr, dc) in DIRECTIONS {
                if !board.valid(row + span * dr, col + span * dc) {
                    continue;
                }
                let mut black = 0;
                let mut white = 0;
                for k in 0..WIN_LENGTH as i32 {
                    match board.stone(row + k * dr, col + k * dc) {
                        Some(Stone::Black) => black += 1,
                        Some(Stone::White) => white += 1,
                        _ => {}
                    }
                }
                f(black, white);
            }
        }
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluator::Exponential => write!(f, "exp"),
            Evaluator::Factorial => write!(f, "fact"),
        }
    }
}

impl FromStr for Evaluator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exp" | "exponential" => Ok(Evaluator::Exponential),
            "fact" | "factorial" => Ok(Evaluator::Factorial),
            other => Err(format!("unknown evaluator: {other} (expected exp or fact)")),
        }
    }
}
