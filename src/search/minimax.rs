//! Plain minimax search
//!
//! Explores every candidate move to the requested depth. Kept alongside
//! alpha-beta as a reference: both must agree on the root utility.

use crate::board::{Board, Stone};

use super::{candidate_moves, terminal_score, Searcher, INF};

impl Searcher {
    /// Minimax value of `board` for `maximizer`, with `to_move` to play
    /// and `depth` plies left.
    pub(crate) fn minimax(&mut self, board: &mut Board, depth: u8, maximizer: Stone, to_move: Stone) -> i32 {
        self.nodes += 1;

        if let Some(score) = terminal_score(board, depth, maximizer) {
            return score;
        }

        let maximizing = to_move == maximizer;
        let mut best = if maximizing { -INF } else { INF };

        for mov in candidate_moves(board, to_move) {
            let score = board.with_stone(mov, to_move, |b| {
                self.minimax(b, depth - 1, maximizer, to_move.opponent())
            });
            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        best
    }
}
