//! Immediate tactical checks run before tree search
//!
//! A move that completes five wins outright, and a cell where the opponent
//! would complete five must be taken before anything else. Both checks
//! scan every empty cell, not just the candidate set.

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
use crate::rules::has_five_at_pos;

/// First empty cell (row-major) where `color` completes five in a row.
///
/// Probes each cell with place-and-undo; the board is unchanged on return.
pub fn find_immediate_win(board: &mut Board, color: Stone) -> Option<Pos> {
    (0..TOTAL_CELLS).map(Pos::from_index).find(|&pos| {
        board.is_empty(pos) && board.with_stone(pos, color, |b| has_five_at_pos(b, pos, color))
    })
}

/// Cell `color` must occupy to stop the opponent completing five next move.
pub fn find_block(board: &mut Board, color: Stone) -> Option<Pos> {
    find_immediate_win(board, color.opponent())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_win_on_empty_board() {
        let mut board = Board::new();
        assert_eq!(find_immediate_win(&mut board, Stone::Black), None);
        assert_eq!(find_block(&mut board, Stone::Black), None);
    }

    #[test]
    fn test_finds_completing_cell() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        let before = board.clone();
        assert_eq!(find_immediate_win(&mut board, Stone::Black), Some(Pos::new(7, 4)));
        assert_eq!(find_block(&mut board, Stone::White), Some(Pos::new(7, 4)));
        assert_eq!(find_immediate_win(&mut board, Stone::White), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_finds_gap_cell() {
        let mut board = Board::new();
        for r in [2, 3, 5, 6] {
            board.place_stone(Pos::new(r, 10), Stone::White);
        }
        assert_eq!(find_immediate_win(&mut board, Stone::White), Some(Pos::new(4, 10)));
    }

    #[test]
    fn test_blocked_four_has_one_cell() {
        let mut board = Board::new();
        for i in 1..5 {
            board.place_stone(Pos::new(i, i), Stone::Black);
        }
        board.place_stone(Pos::new(0, 0), Stone::White);
        assert_eq!(find_immediate_win(&mut board, Stone::Black), Some(Pos::new(5, 5)));
    }
}
