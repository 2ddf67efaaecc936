//! Pattern table for Gomoku evaluation
//!
//! Each pattern is a short run of cells matched anywhere inside a 6-cell
//! window, in either orientation. The table is ordered by tactical severity
//! and the evaluator stops at the first match, so a live four never also
//! scores the three it contains.

use crate::board::Cell;

/// Pattern scores for evaluation.
///
/// Offensive scores apply to the evaluating side's stones, `OPP_*` scores
/// to the opponent's. Opponent shapes weigh more so the search prefers
/// blocking over building.
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    pub const OPP_OPEN_FOUR: i32 = -50_000;
    /// Closed four: OOOO_ with the other end blocked
    pub const CLOSED_FOUR: i32 = 5_000;
    pub const OPP_CLOSED_FOUR: i32 = -25_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    pub const OPP_OPEN_THREE: i32 = -5_000;
    /// Closed three: OOO_
    pub const CLOSED_THREE: i32 = 500;
    pub const OPP_CLOSED_THREE: i32 = -2_500;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    pub const OPP_OPEN_TWO: i32 = -500;
    /// Closed two: OO_
    pub const CLOSED_TWO: i32 = 50;
    pub const OPP_CLOSED_TWO: i32 = -250;

    /// Lone stone with empty neighbours: _O_
    pub const LONE: i32 = 10;
    pub const OPP_LONE: i32 = -5;
}

/// A named cell sequence with its signed weight
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Cell],
    pub score: i32,
}

impl Pattern {
    /// Does the pattern occur in `window`, forwards or reversed?
    pub fn matches(&self, window: &[Cell]) -> bool {
        let len = self.cells.len();
        if len == 0 || len > window.len() {
            return false;
        }
        window.windows(len).any(|slice| {
            slice == self.cells || slice.iter().eq(self.cells.iter().rev())
        })
    }
}

use Cell::{Empty as E, Mine as M, Theirs as T};

/// Patterns ordered by severity, opponent first within a tier (except the
/// lone-stone tier, whose opponent weight is the smaller one).
pub const PATTERNS: [Pattern; 16] = [
    Pattern { name: "five", cells: &[M, M, M, M, M], score: PatternScore::FIVE },
    Pattern { name: "opp five", cells: &[T, T, T, T, T], score: -PatternScore::FIVE },
    Pattern { name: "opp open four", cells: &[E, T, T, T, T, E], score: PatternScore::OPP_OPEN_FOUR },
    Pattern { name: "open four", cells: &[E, M, M, M, M, E], score: PatternScore::OPEN_FOUR },
    Pattern { name: "opp closed four", cells: &[T, T, T, T, E], score: PatternScore::OPP_CLOSED_FOUR },
    Pattern { name: "closed four", cells: &[M, M, M, M, E], score: PatternScore::CLOSED_FOUR },
    Pattern { name: "opp open three", cells: &[E, T, T, T, E], score: PatternScore::OPP_OPEN_THREE },
    Pattern { name: "open three", cells: &[E, M, M, M, E], score: PatternScore::OPEN_THREE },
    Pattern { name: "opp closed three", cells: &[T, T, T, E], score: PatternScore::OPP_CLOSED_THREE },
    Pattern { name: "closed three", cells: &[M, M, M, E], score: PatternScore::CLOSED_THREE },
    Pattern { name: "opp open two", cells: &[E, T, T, E], score: PatternScore::OPP_OPEN_TWO },
    Pattern { name: "open two", cells: &[E, M, M, E], score: PatternScore::OPEN_TWO },
    Pattern { name: "opp closed two", cells: &[T, T, E], score: PatternScore::OPP_CLOSED_TWO },
    Pattern { name: "closed two", cells: &[M, M, E], score: PatternScore::CLOSED_TWO },
    Pattern { name: "lone", cells: &[E, M, E], score: PatternScore::LONE },
    Pattern { name: "opp lone", cells: &[E, T, E], score: PatternScore::OPP_LONE },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::WINDOW_LEN;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
        assert!(PatternScore::CLOSED_TWO > PatternScore::LONE);
    }

    #[test]
    fn test_defense_outweighs_offense() {
        assert!(-PatternScore::OPP_OPEN_FOUR > PatternScore::OPEN_FOUR);
        assert!(-PatternScore::OPP_CLOSED_FOUR > PatternScore::CLOSED_FOUR);
        assert!(-PatternScore::OPP_OPEN_THREE > PatternScore::OPEN_THREE);
        assert!(-PatternScore::OPP_CLOSED_THREE > PatternScore::CLOSED_THREE);
        assert!(-PatternScore::OPP_OPEN_TWO > PatternScore::OPEN_TWO);
        assert!(-PatternScore::OPP_CLOSED_TWO > PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_table_ordered_by_severity() {
        // Scanning top to bottom, each side's weights only get weaker
        let mine: Vec<i32> = PATTERNS.iter().map(|p| p.score).filter(|&s| s > 0).collect();
        let theirs: Vec<i32> = PATTERNS.iter().map(|p| p.score).filter(|&s| s < 0).collect();
        assert!(mine.windows(2).all(|w| w[0] > w[1]), "{:?}", mine);
        assert!(theirs.windows(2).all(|w| w[0] < w[1]), "{:?}", theirs);
        assert_eq!(mine.len() + theirs.len(), PATTERNS.len());
    }

    #[test]
    fn test_patterns_fit_window() {
        for p in &PATTERNS {
            assert!(p.cells.len() >= 3 && p.cells.len() <= WINDOW_LEN, "{}", p.name);
        }
    }

    #[test]
    fn test_matches_reversed() {
        let closed_four = &PATTERNS[5];
        assert_eq!(closed_four.name, "closed four");
        assert!(closed_four.matches(&[Cell::Wall, E, M, M, M, M]));
        assert!(closed_four.matches(&[M, M, M, M, E, Cell::Wall]));
        assert!(!closed_four.matches(&[Cell::Wall, M, M, M, M, Cell::Wall]));
    }

    #[test]
    fn test_wall_is_not_empty() {
        let lone = &PATTERNS[14];
        assert!(!lone.matches(&[Cell::Wall, M, E, T, T, T]));
        assert!(lone.matches(&[E, M, E, Cell::Wall, Cell::Wall, Cell::Wall]));
    }
}
