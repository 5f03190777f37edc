//! Search result types

use serde::{Deserialize, Serialize};

/// Sentinel printed when no minimum could be located
pub const NOT_FOUND_SENTINEL: i64 = -1;

/// Result of a single minimum search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Index of an element holding the minimum value
    Found(usize),

    /// The input does not satisfy the rotation invariant
    InvariantViolation,
}

impl SearchOutcome {
    /// Index of the minimum, if one was found
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(*index),
            Self::InvariantViolation => None,
        }
    }

    /// Check if a minimum was found
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Collapse to the integer form: the index, or `-1`
    pub fn as_sentinel(&self) -> i64 {
        match self {
            Self::Found(index) => *index as i64,
            Self::InvariantViolation => NOT_FOUND_SENTINEL,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Loop iterations, each inspecting one midpoint
    pub probes: usize,
    /// Times the window shrank by one because of a tie with `end`
    pub tie_shrinks: usize,
    /// Whether the unrotated shortcut answered without searching
    pub fast_path: bool,
}
