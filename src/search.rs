//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search works on copies: every candidate move is tried on a clone of
//! the node's board, and each node commits the best move it found to the board
//! it was handed. At the root that board is the caller's, so running a search
//! is also playing the move.
//!
//! Candidates are visited in a square spiral around the center, which tends
//! to reach strong moves first and narrows the alpha-beta window early.

use crate::board::{Board, Status, Stone};
use crate::constants::MAX_SCORE;
use crate::eval::Evaluator;

/// A board coordinate as (row, col).
pub type Move = (i32, i32);

/// Enumerates (row, col) cells outward from the center in square rings.
///
/// The center is `(m, m)` with `m = (size - 1) / 2`. Ring `r` starts just
/// left of its top-left corner's lower neighbour and winds around clockwise
/// in (row, col) terms, ending on the corner `(m - r, m - r)`. Off-board
/// cells of partial rings are skipped, so every cell is produced exactly once.
pub struct Spiral {
    size: i32,
    center: i32,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    remaining: usize,
}

impl Spiral {
    pub fn new(size: usize) -> Self {
        let center = (size as i32 - 1) / 2;
        // Rings needed to reach the far edge (the center sits low on even boards).
        let rings = (size as i32 - 1 - center).max(center).max(0) as usize;
        let side = 2 * rings + 1;
        Self {
            size: size as i32,
            center,
            x: 0,
            y: 0,
            dx: 0,
            dy: -1,
            remaining: if size == 0 { 0 } else { side * side },
        }
    }

    fn step(&mut self) {
        if self.x == self.y && self.x <= 0 {
            self.x -= 1;
            self.y -= 1;
        }
        if self.x == self.y || self.x == -self.y {
            let t = self.dx;
            self.dx = -self.dy;
            self.dy = t;
        }
        self.x += self.dx;
        self.y += self.dy;
    }
}

impl Iterator for Spiral {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while self.remaining > 0 {
            self.remaining -= 1;
            let (row, col) = (self.center + self.x, self.center + self.y);
            self.step();
            if row >= 0 && row < self.size && col >= 0 && col < self.size {
                return Some((row, col));
            }
        }
        None
    }
}

/// Minimax player configuration plus per-search statistics.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    max_depth: u32,
    evaluator: Evaluator,
    nodes: u64,
    last_move: Option<Move>,
}

impl SearchEngine {
    pub fn new(max_depth: u32, evaluator: Evaluator) -> Self {
        Self {
            max_depth,
            evaluator,
            nodes: 0,
            last_move: None,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline]
    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }

    /// Nodes visited by the last search.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Move committed to the root board by the last search, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Search for `side` and play the best move found on `board`.
    ///
    /// Returns the root score from `side`'s point of view. No move is played
    /// when the position is already decided or `max_depth` is zero.
    pub fn search(&mut self, board: &mut Board, side: Stone) -> f64 {
        self.nodes = 0;
        let order: Vec<Move> = Spiral::new(board.size()).collect();
        let (score, best) =
            self.negamax(board, side, 0, f64::NEG_INFINITY, f64::INFINITY, &order);
        self.last_move = best;
        score
    }

    /// Score a leaf from the point of view of `side`, the side to move.
    fn evaluate(&self, board: &Board, side: Stone, status: Status, depth: u32) -> f64 {
        match status {
            Status::Win(winner) if winner == side => MAX_SCORE - f64::from(depth),
            Status::Win(_) => -MAX_SCORE + f64::from(depth),
            Status::Draw => 0.0,
            Status::Continue => side.sign() * self.evaluator.evaluate(board),
        }
    }

    fn negamax(
        &mut self,
        board: &mut Board,
        side: Stone,
        depth: u32,
        mut alpha: f64,
        beta: f64,
        order: &[Move],
    ) -> (f64, Option<Move>) {
        self.nodes += 1;

        let status = board.check();
        if status.is_terminal() || depth >= self.max_depth {
            return (self.evaluate(board, side, status, depth), None);
        }

        let mut best_score = f64::NEG_INFINITY;
        let mut best = None;
        for &(row, col) in order {
            let mut child = board.clone();
            if !child.place(row, col, side) {
                continue;
            }
            let (score, _) =
                self.negamax(&mut child, side.opponent(), depth + 1, -beta, -alpha, order);
            let score = -score;
            if score > best_score {
                best_score = score;
                best = Some((row, col));
            }
            alpha = alpha.max(best_score);
            if alpha >= beta {
                break;
            }
        }

        if let Some((row, col)) = best {
            let placed = board.place(row, col, side);
            debug_assert!(placed, "best move ({row}, {col}) was legal on the copy");
        }
        (best_score, best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain minimax without pruning, same ordering and scoring.
    fn minimax(engine: &SearchEngine, board: &mut Board, side: Stone, depth: u32) -> f64 {
        let status = board.check();
        if status.is_terminal() || depth >= engine.max_depth {
            return engine.evaluate(board, side, status, depth);
        }
        let mut best_score = f64::NEG_INFINITY;
        let mut best = None;
        for (row, col) in Spiral::new(board.size()) {
            let mut child = board.clone();
            if !child.place(row, col, side) {
                continue;
            }
            let score = -minimax(engine, &mut child, side.opponent(), depth + 1);
            if score > best_score {
                best_score = score;
                best = Some((row, col));
            }
        }
        if let Some((row, col)) = best {
            board.place(row, col, side);
        }
        best_score
    }

    fn random_board(rng: &mut fastrand::Rng, size: usize, stones: usize) -> Board {
        let mut board = Board::new(size);
        let mut side = Stone::Black;
        while board.stones() < stones {
            let row = rng.i32(0..size as i32);
            let col = rng.i32(0..size as i32);
            if board.place(row, col, side) {
                side = side.opponent();
            }
        }
        board
    }

    #[test]
    fn test_spiral_start() {
        let cells: Vec<Move> = Spiral::new(5).take(9).collect();
        assert_eq!(
            cells,
            vec![
                (2, 2),
                (2, 1),
                (3, 1),
                (3, 2),
                (3, 3),
                (2, 3),
                (1, 3),
                (1, 2),
                (1, 1),
            ]
        );
    }

    #[test]
    fn test_spiral_covers_every_cell_once() {
        for size in 1..=13 {
            let mut cells: Vec<Move> = Spiral::new(size).collect();
            assert_eq!(cells.len(), size * size, "size {size}");
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), size * size, "size {size} has duplicates");
        }
    }

    #[test]
    fn test_spiral_rings_grow() {
        let center = 6;
        let ring = |(r, c): Move| (r - center).abs().max((c - center).abs());
        let rings: Vec<i32> = Spiral::new(13).map(ring).collect();
        assert!(rings.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_spiral_even_board_reaches_last_row() {
        let cells: Vec<Move> = Spiral::new(8).collect();
        assert!(cells.contains(&(7, 7)));
        assert!(cells.contains(&(7, 0)));
        assert_eq!(cells[0], (3, 3));
    }

    #[test]
    fn test_empty_board_plays_center() {
        let mut board = Board::new(7);
        let mut engine = SearchEngine::new(1, Evaluator::Exponential);
        engine.search(&mut board, Stone::Black);
        assert_eq!(board.stones(), 1);
        assert_eq!(engine.last_move(), Some((3, 3)));
        assert_eq!(board.stone(3, 3), Some(Stone::Black));
    }

    #[test]
    fn test_completes_four() {
        let mut board = Board::new(8);
        for c in 0..4 {
            board.place(3, c, Stone::Black);
        }
        board.place(6, 6, Stone::White);
        board.place(0, 7, Stone::White);

        let mut engine = SearchEngine::new(1, Evaluator::Exponential);
        let score = engine.search(&mut board, Stone::Black);
        assert_eq!(score, MAX_SCORE - 1.0);
        assert_eq!(board.stone(3, 4), Some(Stone::Black));
        assert_eq!(board.check(), Status::Win(Stone::Black));
    }

    #[test]
    fn test_blocks_opponent_four() {
        // White threatens (2, 4); any other black move loses at depth 2.
        let mut board = Board::new(8);
        for c in 0..4 {
            board.place(2, c, Stone::White);
        }
        board.place(5, 5, Stone::Black);
        board.place(6, 1, Stone::Black);
        board.place(7, 6, Stone::Black);

        let mut engine = SearchEngine::new(2, Evaluator::Factorial);
        let score = engine.search(&mut board, Stone::Black);
        assert_eq!(engine.last_move(), Some((2, 4)));
        assert!(score > -MAX_SCORE + 2.0);
    }

    #[test]
    fn test_terminal_root_plays_nothing() {
        let mut board = Board::new(6);
        for c in 0..5 {
            board.place(0, c, Stone::White);
        }
        let before = board.clone();
        let mut engine = SearchEngine::new(3, Evaluator::Exponential);
        let score = engine.search(&mut board, Stone::Black);
        assert_eq!(score, -MAX_SCORE);
        assert_eq!(board, before);
        assert_eq!(engine.last_move(), None);
    }

    #[test]
    fn test_zero_depth_plays_nothing() {
        let mut board = Board::new(6);
        board.place(2, 2, Stone::Black);
        let mut engine = SearchEngine::new(0, Evaluator::Exponential);
        let score = engine.search(&mut board, Stone::White);
        assert_eq!(score, -Evaluator::Exponential.evaluate(&board));
        assert_eq!(board.stones(), 1);
        assert_eq!(engine.nodes(), 1);
    }

    #[test]
    fn test_prefers_faster_win() {
        // Black can win now at (1, 4) or build elsewhere; depth 3 must still
        // take the immediate win.
        let mut board = Board::new(7);
        for c in 0..4 {
            board.place(1, c, Stone::Black);
        }
        for c in 0..3 {
            board.place(5, c, Stone::White);
        }
        let mut engine = SearchEngine::new(3, Evaluator::Exponential);
        let score = engine.search(&mut board, Stone::Black);
        assert_eq!(score, MAX_SCORE - 1.0);
        assert_eq!(engine.last_move(), Some((1, 4)));
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for case in 0..40 {
            let size = rng.usize(5..=6);
            let stones = rng.usize(0..=8);
            let depth = rng.u32(1..=2);
            let eval = if rng.bool() {
                Evaluator::Exponential
            } else {
                Evaluator::Factorial
            };
            let board = random_board(&mut rng, size, stones);
            let side = if stones % 2 == 0 { Stone::Black } else { Stone::White };

            let mut engine = SearchEngine::new(depth, eval);
            let mut pruned = board.clone();
            let pruned_score = engine.search(&mut pruned, side);

            let mut plain = board.clone();
            let plain_score = minimax(&engine, &mut plain, side, 0);

            assert_eq!(pruned_score, plain_score, "case {case}: scores differ");
            assert_eq!(pruned, plain, "case {case}: chosen moves differ");
        }
    }

    #[test]
    fn test_alpha_beta_matches_minimax_depth_three() {
        let mut rng = fastrand::Rng::with_seed(42);
        for case in 0..6 {
            let stones = rng.usize(4..=10);
            let board = random_board(&mut rng, 5, stones);
            let side = if stones % 2 == 0 { Stone::Black } else { Stone::White };

            let mut engine = SearchEngine::new(3, Evaluator::Exponential);
            let mut pruned = board.clone();
            let pruned_score = engine.search(&mut pruned, side);

            let mut plain = board.clone();
            let plain_score = minimax(&engine, &mut plain, side, 0);

            assert_eq!(pruned_score, plain_score, "case {case}: scores differ");
            assert_eq!(pruned, plain, "case {case}: chosen moves differ");
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let mut board = Board::new(6);
        board.place(2, 2, Stone::Black);
        board.place(3, 3, Stone::White);
        let mut engine = SearchEngine::new(3, Evaluator::Exponential);
        engine.search(&mut board.clone(), Stone::Black);
        // Full tree: 1 + 34 + 34*33 + 34*33*32 nodes.
        let full = 1 + 34 + 34 * 33 + 34 * 33 * 32;
        assert!(engine.nodes() < full, "{} >= {full}", engine.nodes());
    }
}
