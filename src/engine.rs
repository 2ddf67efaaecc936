//! Main AI Engine integrating all search components
//!
//! This module provides the AI engine that picks a move in any position.
//! The search follows a priority system:
//!
//! 1. **Immediate win**: any cell that completes five for the mover
//! 2. **Defense**: any cell where the opponent would complete five
//! 3. **Tree search**: minimax or alpha-beta over the candidate moves
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Algorithm, Board, EngineConfig, Pos, Stone};
//!
//! let config = EngineConfig { depth: 1, algorithm: Algorithm::AlphaBeta, seed: Some(1) };
//! let mut engine = AIEngine::with_config(config);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&mut board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::search::{find_block, find_immediate_win, Algorithm, SearchResult, Searcher, WIN_SCORE};

/// Default search depth below the root move
pub const DEFAULT_DEPTH: u8 = 2;

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found immediate winning move (5-in-a-row)
    ImmediateWin,
    /// Blocked the opponent's immediate five
    Defense,
    /// Plain minimax search result
    Minimax,
    /// Alpha-beta search result
    AlphaBeta,
}

impl From<Algorithm> for SearchType {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Minimax => SearchType::Minimax,
            Algorithm::AlphaBeta => SearchType::AlphaBeta,
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Utility of the move for the side that searched
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: WIN_SCORE,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn defense(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Defense,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, algorithm: Algorithm, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: algorithm.into(),
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched below each root move
    pub depth: u8,
    /// Tree search variant
    pub algorithm: Algorithm,
    /// Seed for top-level tie-breaking; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            algorithm: Algorithm::AlphaBeta,
            seed: None,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Stateless between moves apart from its tie-breaking RNG. The board is
/// borrowed mutably during a search and restored before returning; the
/// caller commits the chosen move.
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
    rng: StdRng,
}

impl AIEngine {
    /// Create a new AI engine with default settings (alpha-beta, depth 2).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an AI engine with custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            searcher: Searcher::new(),
            config,
            rng,
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` if no valid moves exist.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with detailed search statistics, using the
    /// configured algorithm and depth.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &mut Board, color: Stone) -> MoveResult {
        self.search_with(board, color, self.config.algorithm, self.config.depth)
    }

    /// Search with an explicit algorithm and depth for this move only.
    ///
    /// # Search Priority
    ///
    /// 1. Immediate winning move
    /// 2. Block the opponent's immediate win
    /// 3. Tree search with the requested algorithm
    #[must_use]
    pub fn search_with(
        &mut self,
        board: &mut Board,
        color: Stone,
        algorithm: Algorithm,
        depth: u8,
    ) -> MoveResult {
        let start = Instant::now();
        #[cfg(debug_assertions)]
        let snapshot = board.clone();

        let result = self.search_inner(board, color, algorithm, depth, start);

        #[cfg(debug_assertions)]
        debug_assert_eq!(*board, snapshot, "search left the board modified");

        debug!(
            ?color,
            %algorithm,
            depth,
            best_move = ?result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "search finished"
        );
        result
    }

    fn search_inner(
        &mut self,
        board: &mut Board,
        color: Stone,
        algorithm: Algorithm,
        depth: u8,
        start: Instant,
    ) -> MoveResult {
        let elapsed = |start: Instant| start.elapsed().as_millis() as u64;

        // 1. Win now
        if let Some(win_move) = find_immediate_win(board, color) {
            trace!(%win_move, "immediate win");
            return MoveResult::immediate_win(win_move, elapsed(start));
        }

        // 2. Opponent wins next move unless we take this cell
        if let Some(block) = find_block(board, color) {
            trace!(%block, "blocking opponent five");
            return MoveResult::defense(block, elapsed(start));
        }

        // 3. Tree search
        let result = self.searcher.search(board, color, algorithm, depth, &mut self.rng);
        MoveResult::from_search(result, algorithm, elapsed(start))
    }

    /// Current engine settings
    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Set the search depth below the root move.
    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    /// Switch the tree search variant.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
