//! Per-side search settings for engine-versus-engine play

use std::fmt;

use crate::board::Stone;
use crate::engine::DEFAULT_DEPTH;
use crate::search::Algorithm;

/// Algorithm and depth one side searches with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentConfig {
    pub algorithm: Algorithm,
    pub depth: u8,
}

impl AgentConfig {
    #[must_use]
    pub const fn new(algorithm: Algorithm, depth: u8) -> Self {
        Self { algorithm, depth }
    }
}

impl fmt::Display for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (depth {})", self.algorithm, self.depth)
    }
}

/// Strategy assignment for both colors.
///
/// The default pits plain minimax (Black) against alpha-beta (White) at
/// the default depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    pub black: AgentConfig,
    pub white: AgentConfig,
}

impl Matchup {
    #[must_use]
    pub const fn new(black: AgentConfig, white: AgentConfig) -> Self {
        Self { black, white }
    }

    /// Settings for the side about to move.
    ///
    /// `Stone::Empty` never moves; it maps to White's settings.
    #[inline]
    #[must_use]
    pub fn select(&self, to_move: Stone) -> AgentConfig {
        match to_move {
            Stone::Black => self.black,
            Stone::White | Stone::Empty => self.white,
        }
    }
}

impl Default for Matchup {
    fn default() -> Self {
        Self {
            black: AgentConfig::new(Algorithm::Minimax, DEFAULT_DEPTH),
            white: AgentConfig::new(Algorithm::AlphaBeta, DEFAULT_DEPTH),
        }
    }
}
