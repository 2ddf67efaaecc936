//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation restricted to the neighbourhood of stones
//! - Immediate win / block detection run before any tree search
//! - Plain minimax and alpha-beta searchers sharing one root driver

pub mod alphabeta;
pub mod minimax;
pub mod movegen;
pub mod threat;

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::rules::has_five_in_row;

pub use movegen::{adjacent_moves, candidate_moves, danger_zone};
pub use threat::{find_block, find_immediate_win};

/// Score of a won position.
///
/// A position without a five scores at most 900 windows x 50_000 in
/// magnitude, so this dominates every heuristic value.
pub const WIN_SCORE: i32 = 100_000_000;

/// Infinity score for search bounds
pub(crate) const INF: i32 = WIN_SCORE + 1;

/// Tree search variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => f.write_str("minimax"),
            Algorithm::AlphaBeta => f.write_str("alphabeta"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "ab" => Ok(Algorithm::AlphaBeta),
            other => Err(format!("unknown algorithm '{other}' (expected minimax or alphabeta)")),
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when no legal move exists
    pub best_move: Option<Pos>,
    /// Utility of the best move from the searching side's view
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Tree searcher. Holds only per-call statistics; the board is borrowed
/// for the duration of a call and handed back unchanged.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search the position for `color` and pick a best move.
    ///
    /// The root always expands one ply; `depth` counts the plies searched
    /// below each root move, so depth 0 scores every candidate with a
    /// single static evaluation. Moves tied for the best utility are
    /// chosen between uniformly at random.
    pub fn search<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        color: Stone,
        algorithm: Algorithm,
        depth: u8,
        rng: &mut R,
    ) -> SearchResult {
        self.nodes = 0;

        let moves = candidate_moves(board, color);
        let mut best_score = -INF;
        let mut best_moves: Vec<Pos> = Vec::new();

        for mov in moves {
            let score = board.with_stone(mov, color, |b| match algorithm {
                Algorithm::Minimax => self.minimax(b, depth, color, color.opponent()),
                // Window opens just below the best so far: ties get exact values
                Algorithm::AlphaBeta => {
                    self.alpha_beta(b, depth, best_score - 1, INF, color, color.opponent())
                }
            });

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(mov);
            } else if score == best_score {
                best_moves.push(mov);
            }
        }

        let best_move = best_moves.choose(rng).copied();
        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: self.nodes,
        }
    }
}

/// Terminal test shared by both searchers, scored for `maximizer`.
///
/// Order: maximizer already won, minimizer already won, then depth
/// exhausted or board full falls back to the evaluator.
fn terminal_score(board: &Board, depth: u8, maximizer: Stone) -> Option<i32> {
    if has_five_in_row(board, maximizer) {
        return Some(WIN_SCORE);
    }
    if has_five_in_row(board, maximizer.opponent()) {
        return Some(-WIN_SCORE);
    }
    if depth == 0 || board.is_full() {
        return Some(evaluate(board, maximizer));
    }
    None
}
