//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores a position for the search's leaf nodes by matching 6-cell line
//! windows against the pattern table. Completed fives are normally caught
//! by the search's terminal test before this runs.

use crate::board::{window, Board, Cell, Pos, Stone, DIRECTIONS, WINDOW_LEN};

use super::patterns::PATTERNS;

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate advantage for the opponent
///
/// The opponent's shapes are weighted more heavily, so
/// `evaluate(board, Black) != -evaluate(board, White)` in general; the
/// search evaluates every leaf from the root player's side.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let mut score = 0;
    for pos in board.occupied().iter_ones() {
        let stone = board.get(pos);
        for &(dr, dc) in &DIRECTIONS {
            score += evaluate_line(board, pos, dr, dc, stone, color);
        }
    }
    score
}

/// Score of the first pattern found in `cells`, or 0.
#[must_use]
pub fn score_window(cells: &[Cell; WINDOW_LEN]) -> i32 {
    PATTERNS
        .iter()
        .find(|pattern| pattern.matches(cells))
        .map_or(0, |pattern| pattern.score)
}

/// Score the window anchored at `pos` in one direction.
///
/// Only the first stone of a run anchors a window (no same-color stone
/// in the negative direction), so each run is scored once per direction.
/// The window starts one cell before the stone to expose the run's
/// leading end.
fn evaluate_line(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone, color: Stone) -> i32 {
    let prev = (i32::from(pos.row) - dr, i32::from(pos.col) - dc);
    if board.get_at(prev.0, prev.1) == Some(stone) {
        return 0;
    }
    score_window(&window(board, prev, (dr, dc), color))
}
