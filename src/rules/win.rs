//! Win and draw detection

use crate::board::{run_length, Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

/// Outcome of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
    Draw,
}

/// Check if there's 5+ in a row for the given color.
///
/// Walks forward from every stone of `color` in each direction; any run of
/// `WIN_LENGTH` starting at some origin certifies a win, including longer
/// runs.
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    let Some(stones) = board.stones(stone) else {
        return false;
    };
    stones.iter_ones().any(|pos| {
        DIRECTIONS
            .iter()
            .any(|&dir| run_length(board, pos, dir, stone) >= WIN_LENGTH)
    })
}

/// Five-in-a-row check through a specific position.
///
/// Only checks the 4 lines through `pos`, counting both ways.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if board.get(pos) != color {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, pos, (dr, dc), color);
        let backward = run_length(board, pos, (-dr, -dc), color);
        forward + backward - 1 >= WIN_LENGTH
    })
}

/// Find the positions of a 5-in-a-row if one exists.
///
/// Returns the full run (at least 5 positions, ordered along the line).
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    let stones = board.stones(stone)?;

    for pos in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            // Only start from the first stone of a run
            if pos.offset(dr, dc, -1).is_some_and(|prev| board.get(prev) == stone) {
                continue;
            }
            let len = run_length(board, pos, (dr, dc), stone);
            if len >= WIN_LENGTH {
                return Some(
                    (0..len as i32)
                        .filter_map(|k| pos.offset(dr, dc, k))
                        .collect(),
                );
            }
        }
    }
    None
}

/// Check for a winner. Black is checked first; in legal play only one
/// side can ever hold a five.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}

/// Status after `last_mover` played: a win takes priority over a draw.
pub fn game_status(board: &Board, last_mover: Stone) -> GameStatus {
    if has_five_in_row(board, last_mover) {
        GameStatus::Won(last_mover)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    /// Full board without any five: pairs `XXOO..` flipped on every row,
    /// so no line holds more than two of a color in a row.
    fn drawn_board() -> Board {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let black = (pos.col as usize / 2 + pos.row as usize) % 2 == 0;
            board.place_stone(pos, if black { Stone::Black } else { Stone::White });
        }
        board
    }

    #[test]
    fn test_empty_board_no_winner() {
        let board = Board::new();
        assert!(!has_five_in_row(&board, Stone::Black));
        assert!(!has_five_in_row(&board, Stone::White));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        assert!(has_five_in_row(&board, Stone::Black));
        assert!(!has_five_in_row(&board, Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 10..15 {
            board.place_stone(Pos::new(i, 9), Stone::Black);
        }
        assert!(has_five_in_row(&board, Stone::Black));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        assert!(has_five_in_row(&board, Stone::White));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 14 - i), Stone::White);
        }
        assert!(has_five_in_row(&board, Stone::White));
        assert!(has_five_at_pos(&board, Pos::new(6, 12), Stone::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(has_five_in_row(&board, Stone::Black));
        assert_eq!(find_five_positions(&board, Stone::Black).map(|l| l.len()), Some(6));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(!has_five_in_row(&board, Stone::Black));
        assert!(find_five_positions(&board, Stone::Black).is_none());
    }

    #[test]
    fn test_broken_line_not_win() {
        let mut board = Board::new();
        for c in [2, 3, 4, 6, 7] {
            board.place_stone(Pos::new(3, c), Stone::White);
        }
        board.place_stone(Pos::new(3, 5), Stone::Black);
        assert!(!has_five_in_row(&board, Stone::White));
    }

    #[test]
    fn test_line_wrapping_edge_not_win() {
        let mut board = Board::new();
        // Three at the end of row 0, two at the start of row 1
        for c in 12..15 {
            board.place_stone(Pos::new(0, c), Stone::Black);
        }
        for c in 0..2 {
            board.place_stone(Pos::new(1, c), Stone::Black);
        }
        assert!(!has_five_in_row(&board, Stone::Black));
    }

    #[test]
    fn test_has_five_at_middle_stone() {
        let mut board = Board::new();
        for r in 5..10 {
            board.place_stone(Pos::new(r, 3), Stone::Black);
        }
        assert!(has_five_at_pos(&board, Pos::new(7, 3), Stone::Black));
        assert!(!has_five_at_pos(&board, Pos::new(7, 4), Stone::Black));
    }

    #[test]
    fn test_drawn_board_status() {
        let board = drawn_board();
        assert!(board.is_full());
        assert!(!has_five_in_row(&board, Stone::Black));
        assert!(!has_five_in_row(&board, Stone::White));
        assert_eq!(game_status(&board, Stone::White), GameStatus::Draw);
    }

    #[test]
    fn test_win_takes_priority_over_draw() {
        let mut board = drawn_board();
        for c in 0..5 {
            board.remove_stone(Pos::new(0, c));
            board.place_stone(Pos::new(0, c), Stone::White);
        }
        assert!(board.is_full());
        assert_eq!(game_status(&board, Stone::White), GameStatus::Won(Stone::White));
    }
}
