//! Board geometry, terminal codes and search defaults.
//!
//! # Board Size Configuration
//!
//! The default board size used by the command line is controlled by Cargo
//! features. `Board` itself takes its size at construction, so the library
//! can play on any size regardless of the feature selected.
//! - `board13x13` (default): 13x13 board
//! - `board8x8`: 8x8 board
//!
//! ```sh
//! cargo build                                              # 13x13 (default)
//! cargo build --no-default-features --features board8x8    # 8x8
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) for new games.
#[cfg(feature = "board13x13")]
pub const DEFAULT_SIZE: usize = 13;

#[cfg(feature = "board8x8")]
pub const DEFAULT_SIZE: usize = 8;

#[cfg(all(feature = "board8x8", feature = "board13x13"))]
compile_error!("Cannot enable both 'board8x8' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board8x8", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board8x8' or 'board13x13'");

/// Number of consecutive stones needed to win.
pub const WIN_LENGTH: usize = 5;

/// Line directions as (row step, col step), in the order wins are tested:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

// =============================================================================
// Terminal Codes
// =============================================================================

/// Game still in progress.
pub const CONTINUE_CODE: i32 = 0;

/// Black has five in a row.
pub const BLACK_WIN_CODE: i32 = 1;

/// White has five in a row.
pub const WHITE_WIN_CODE: i32 = -1;

/// Board full with no winner.
pub const DRAW_CODE: i32 = i32::MAX;

// =============================================================================
// Search Parameters
// =============================================================================

/// Magnitude of a won position. Wins are scored `MAX_SCORE - depth` so that
/// faster wins and slower losses rank higher.
pub const MAX_SCORE: f64 = i32::MAX as f64;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 4;
