//! Game rules for standard Gomoku
//!
//! Five or more stones in an unbroken line wins; a full board without a
//! winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_winner, find_five_positions, game_status, has_five_at_pos, has_five_in_row, GameStatus,
};
