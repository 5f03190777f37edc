//! Minimum search over rotated sorted sequences
//!
//! Provides the circular search itself, its result types, and an O(n)
//! checker for the rotation invariant.

pub mod finder;
pub mod invariant;
pub mod outcome;

pub use finder::{find_minimum_index, RotatedMinimumFinder, Strategy};
pub use invariant::{check_rotation, is_rotated_sorted, RotationCheck};
pub use outcome::{SearchOutcome, SearchStats, NOT_FOUND_SENTINEL};
