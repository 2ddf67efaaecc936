//! Board structure

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::GameError;

/// Game board: one bitboard per color.
///
/// Search mutates the board in place (place, recurse, remove), so `Board`
/// derives `Eq` to let callers verify it comes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Build a board from text rows of `X`, `O` and `.`.
    ///
    /// Whitespace inside a row is ignored; missing trailing rows and
    /// columns are empty. Returns `None` on an unknown mark or a row or
    /// column beyond the board.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        if rows.len() > BOARD_SIZE {
            return None;
        }
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            let marks = line.as_ref().chars().filter(|ch| !ch.is_whitespace());
            for (c, ch) in marks.enumerate() {
                if c >= BOARD_SIZE {
                    return None;
                }
                let stone = Stone::from_symbol(ch)?;
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        Some(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Bounds-checked lookup for raw coordinates
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::try_new(row, col).map(|pos| self.get(pos))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Check whether `(row, col)` is on the board and unoccupied
    #[inline]
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        Pos::try_new(row, col).is_some_and(|pos| self.is_empty(pos))
    }

    /// Place a stone without validation.
    /// Search uses this together with `remove_stone`; game moves go
    /// through `apply_move`.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Place `stone` at `pos`, run `f`, then clear the cell again.
    ///
    /// `pos` must be empty. Search probes moves through this so every
    /// exit path leaves the board as it was.
    #[inline]
    pub fn with_stone<T>(&mut self, pos: Pos, stone: Stone, f: impl FnOnce(&mut Board) -> T) -> T {
        debug_assert!(self.is_empty(pos));
        self.place_stone(pos, stone);
        let out = f(self);
        self.remove_stone(pos);
        out
    }

    /// Validated placement for game moves.
    pub fn apply_move(&mut self, row: i32, col: i32, stone: Stone) -> Result<Pos, GameError> {
        if stone == Stone::Empty {
            return Err(GameError::EmptyStone);
        }
        let pos = Pos::try_new(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        let occupant = self.get(pos);
        if occupant != Stone::Empty {
            return Err(GameError::Occupied {
                row: pos.row,
                col: pos.col,
                occupant,
            });
        }
        self.place_stone(pos, stone);
        Ok(pos)
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Iterate over every empty cell in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Every cell holds a stone
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{:>3}", c)?;
        }
        writeln!(f)?;

        for r in 0..BOARD_SIZE {
            write!(f, "{:>3}", r)?;
            for c in 0..BOARD_SIZE {
                let pos = Pos::new(r as u8, c as u8);
                write!(f, "{:>3}", self.get(pos).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
