//! Candidate move generation
//!
//! Searching every empty cell of a 225-cell board is hopeless beyond a ply
//! or two, so only cells touching an existing stone (8-connected) are
//! considered. When the opponent of the side to move has stones, only the
//! empty cells around those stones (the "danger zone") are returned.

use crate::board::{Bitboard, Board, Pos, Stone};

/// 8-connected neighbourhood
#[rustfmt::skip]
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Empty cells adjacent to any stone in `stones`
fn empty_neighbours(board: &Board, stones: &Bitboard) -> Bitboard {
    let mut found = Bitboard::new();
    for pos in stones.iter_ones() {
        for &(dr, dc) in &NEIGHBOURS {
            if let Some(n) = pos.offset(dr, dc, 1) {
                if board.is_empty(n) {
                    found.set(n);
                }
            }
        }
    }
    found
}

/// Every empty cell touching a stone of either color.
#[must_use]
pub fn adjacent_moves(board: &Board) -> Vec<Pos> {
    empty_neighbours(board, &board.occupied()).iter_ones().collect()
}

/// Empty cells touching the stones of `to_move`'s opponent.
#[must_use]
pub fn danger_zone(board: &Board, to_move: Stone) -> Vec<Pos> {
    match board.stones(to_move.opponent()) {
        Some(opp) => empty_neighbours(board, opp).iter_ones().collect(),
        None => Vec::new(),
    }
}

/// Candidate moves for `to_move`.
///
/// - Empty board: the center cell only
/// - Otherwise the danger zone if it is non-empty, else all cells adjacent
///   to any stone
/// - Full board: no moves
///
/// Moves come back in row-major order; callers must not rely on it.
#[must_use]
pub fn candidate_moves(board: &Board, to_move: Stone) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }
    let danger = danger_zone(board, to_move);
    if !danger.is_empty() {
        return danger;
    }
    adjacent_moves(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_center_only() {
        let board = Board::new();
        assert_eq!(candidate_moves(&board, Stone::Black), vec![Pos::new(7, 7)]);
        assert_eq!(candidate_moves(&board, Stone::White), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn test_single_stone_neighbourhood() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let moves = adjacent_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| (m.row as i32 - 7).abs() <= 1 && (m.col as i32 - 7).abs() <= 1));
        assert!(!moves.contains(&Pos::new(7, 7)));
    }

    #[test]
    fn test_corner_stone_clipped() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);
        let moves = adjacent_moves(&board);
        assert_eq!(moves, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
    }

    #[test]
    fn test_danger_zone_preferred() {
        let mut board = Board::new();
        board.place_stone(Pos::new(2, 2), Stone::Black);
        board.place_stone(Pos::new(10, 10), Stone::White);

        // White to move: only cells around Black's stone
        let moves = candidate_moves(&board, Stone::White);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.row <= 3 && m.col <= 3));

        // Black to move: only cells around White's stone
        let moves = candidate_moves(&board, Stone::Black);
        assert!(moves.iter().all(|m| m.row >= 9 && m.col >= 9));
    }

    #[test]
    fn test_falls_back_without_opponent_stones() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 4), Stone::Black);
        board.place_stone(Pos::new(4, 5), Stone::Black);

        assert!(danger_zone(&board, Stone::Black).is_empty());
        let moves = candidate_moves(&board, Stone::Black);
        assert_eq!(moves, adjacent_moves(&board));
        assert_eq!(moves.len(), 10);
    }

    #[test]
    fn test_moves_are_unique_and_empty() {
        let mut board = Board::new();
        for (r, c, s) in [(7, 7, Stone::Black), (7, 8, Stone::White), (8, 7, Stone::Black), (6, 8, Stone::White)] {
            board.place_stone(Pos::new(r, c), s);
        }
        let moves = adjacent_moves(&board);
        let mut dedup = moves.clone();
        dedup.dedup();
        assert_eq!(moves, dedup);
        assert!(moves.iter().all(|&m| board.is_empty(m)));
    }
}
