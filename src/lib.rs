//! Gomoku-Minimax: a five-in-a-row engine built on fixed-depth negamax.
//!
//! ## Modules
//!
//! - [`constants`] - Board defaults, terminal codes and search parameters
//! - [`board`] - Board state, placement and win/draw detection
//! - [`eval`] - Window-counting position evaluators
//! - [`search`] - Alpha-beta search with spiral move ordering
//! - [`player`] - Naive, search-driven and interactive players
//! - [`game`] - Turn loop alternating two players
//!
//! ## Example
//!
//! ```
//! use gomoku_minimax::board::{Board, Status, Stone};
//! use gomoku_minimax::eval::Evaluator;
//! use gomoku_minimax::search::SearchEngine;
//!
//! let mut board = Board::new(8);
//! for col in 0..4 {
//!     board.place(3, col, Stone::Black);
//! }
//!
//! // The search plays its move on the board it is given.
//! let mut engine = SearchEngine::new(1, Evaluator::Exponential);
//! engine.search(&mut board, Stone::Black);
//! assert_eq!(board.check(), Status::Win(Stone::Black));
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod player;
pub mod search;
