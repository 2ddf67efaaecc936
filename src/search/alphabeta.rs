//! Alpha-beta search
//!
//! Same tree and terminal rules as minimax, pruning siblings once the
//! (alpha, beta) window closes. Fail-soft: a returned value outside the
//! window is a bound on the true value in that direction.

use crate::board::{Board, Stone};

use super::{candidate_moves, terminal_score, Searcher, INF};

impl Searcher {
    /// Alpha-beta value of `board` for `maximizer`, with `to_move` to
    /// play and `depth` plies left.
    pub(crate) fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizer: Stone,
        to_move: Stone,
    ) -> i32 {
        self.nodes += 1;

        if let Some(score) = terminal_score(board, depth, maximizer) {
            return score;
        }

        let moves = candidate_moves(board, to_move);

        if to_move == maximizer {
            let mut best = -INF;
            for mov in moves {
                let score = board.with_stone(mov, to_move, |b| {
                    self.alpha_beta(b, depth - 1, alpha, beta, maximizer, to_move.opponent())
                });
                best = best.max(score);
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mov in moves {
                let score = board.with_stone(mov, to_move, |b| {
                    self.alpha_beta(b, depth - 1, alpha, beta, maximizer, to_move.opponent())
                });
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::search::WIN_SCORE;

    fn midgame() -> Board {
        Board::from_rows(&[
            "",
            "",
            "",
            "",
            "",
            ".....O.X",
            "......XO",
            ".....XOX",
            "....O..X",
            "........O",
        ])
        .expect("valid board")
    }

    #[test]
    fn test_full_window_equals_minimax() {
        let mut board = midgame();
        for depth in 0..=2 {
            for to_move in [Stone::Black, Stone::White] {
                let mut ab = Searcher::new();
                let mut mm = Searcher::new();
                let a = ab.alpha_beta(&mut board, depth, -INF, INF, Stone::Black, to_move);
                let m = mm.minimax(&mut board, depth, Stone::Black, to_move);
                assert_eq!(a, m, "depth {depth}, {to_move} to move");
                assert!(ab.nodes() <= mm.nodes());
            }
        }
    }

    #[test]
    fn test_fail_low_is_upper_bound() {
        let mut board = midgame();
        let exact = Searcher::new().minimax(&mut board, 1, Stone::White, Stone::Black);
        let bound = Searcher::new().alpha_beta(&mut board, 1, exact + 1, INF, Stone::White, Stone::Black);
        assert!(bound <= exact + 1);
        assert!(bound >= exact);
    }

    #[test]
    fn test_prunes_after_win_found() {
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        board.place_stone(Pos::new(6, 5), Stone::White);
        let before = board.clone();
        let mut searcher = Searcher::new();
        let score = searcher.alpha_beta(&mut board, 1, -INF, INF, Stone::Black, Stone::Black);
        assert_eq!(score, WIN_SCORE);
        assert_eq!(board, before);
    }
}
