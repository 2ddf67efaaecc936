//! Gomoku engine with minimax and alpha-beta search
//!
//! Standard Gomoku on a 15x15 board:
//! - Black moves first
//! - 5 or more in a row wins
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and the line scanner
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Pattern-table position evaluation
//! - [`search`]: Candidate moves, immediate tactics, minimax and alpha-beta
//! - [`engine`]: Main AI engine integrating all components
//! - [`strategy`]: Per-side algorithm selection for engine matches
//! - [`game`]: Turn loop for front ends and self-play
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Algorithm, Stone};
//!
//! let mut board = gomoku::create_board();
//! gomoku::apply_move(&mut board, 7, 7, Stone::Black).unwrap();
//!
//! // AI responds as White
//! if let Some(pos) = gomoku::best_move(&mut board, Stone::White, Algorithm::AlphaBeta, 1) {
//!     gomoku::apply_move(&mut board, pos.row.into(), pos.col.into(), Stone::White).unwrap();
//!     println!("AI plays at {pos}");
//! }
//! ```
//!
//! # Search Priority
//!
//! The AI engine follows this search priority:
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Minimax or alpha-beta search over the danger zone

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod strategy;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, EngineConfig, MoveResult, SearchType, DEFAULT_DEPTH};
pub use error::GameError;
pub use game::{run_selfplay, Game, GameRecord, PlayedMove};
pub use rules::GameStatus;
pub use search::{Algorithm, WIN_SCORE};
pub use strategy::{AgentConfig, Matchup};

/// An empty 15x15 board.
#[must_use]
pub fn create_board() -> Board {
    Board::new()
}

/// Whether `(row, col)` is on the board and empty.
#[must_use]
pub fn is_valid_move(board: &Board, row: i32, col: i32) -> bool {
    board.is_valid_move(row, col)
}

/// Place `player` at `(row, col)`, refusing occupied or off-board cells.
pub fn apply_move(board: &mut Board, row: i32, col: i32, player: Stone) -> Result<Pos, GameError> {
    board.apply_move(row, col, player)
}

#[must_use]
pub fn has_five_in_a_row(board: &Board, player: Stone) -> bool {
    rules::has_five_in_row(board, player)
}

#[must_use]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Best move for `player`, or `None` on a full board.
///
/// The board is restored before returning; the caller commits the move.
/// Ties are broken with a freshly seeded RNG.
#[must_use]
pub fn best_move(board: &mut Board, player: Stone, algorithm: Algorithm, depth: u8) -> Option<Pos> {
    AIEngine::with_config(EngineConfig {
        depth,
        algorithm,
        seed: None,
    })
    .get_move(board, player)
}
