//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions.
//! The evaluation considers:
//! - Line patterns (fives, fours, threes, twos, lone stones)
//! - Defensive weighting: the opponent's shapes count more than our own

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_window};
pub use patterns::{Pattern, PatternScore, PATTERNS};
