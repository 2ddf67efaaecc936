//! Line scanning along the four directions
//!
//! Every line query on the board (win detection, pattern windows for the
//! evaluator) walks one of the four directions below from an origin cell.

use super::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions).
/// Each line is covered once; the opposite directions are redundant.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Length of the evaluation window
pub const WINDOW_LEN: usize = 6;

/// A window cell seen from one player's perspective.
///
/// `Wall` marks positions beyond the board edge and never equals `Empty`,
/// so an edge blocks a run the same way an opposing stone does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Mine,
    Theirs,
    Wall,
}

impl Cell {
    #[inline]
    fn from_stone(stone: Stone, me: Stone) -> Cell {
        match stone {
            Stone::Empty => Cell::Empty,
            s if s == me => Cell::Mine,
            _ => Cell::Theirs,
        }
    }
}

/// Extract the `WINDOW_LEN` cells starting at `origin` along `(dr, dc)`.
///
/// `origin` is given as raw coordinates so windows may begin off the board;
/// off-board positions become `Cell::Wall`.
pub fn window(board: &Board, origin: (i32, i32), (dr, dc): (i32, i32), me: Stone) -> [Cell; WINDOW_LEN] {
    let mut cells = [Cell::Wall; WINDOW_LEN];
    for (i, cell) in cells.iter_mut().enumerate() {
        let k = i as i32;
        if let Some(stone) = board.get_at(origin.0 + dr * k, origin.1 + dc * k) {
            *cell = Cell::from_stone(stone, me);
        }
    }
    cells
}

/// Count consecutive `color` stones starting at `origin` (inclusive) and
/// walking along `(dr, dc)`, stopping at the first other cell or the edge.
pub fn run_length(board: &Board, origin: Pos, (dr, dc): (i32, i32), color: Stone) -> usize {
    let mut count = 0;
    let mut k = 0;
    while let Some(pos) = origin.offset(dr, dc, k) {
        if board.get(pos) != color {
            break;
        }
        count += 1;
        k += 1;
    }
    count
}
