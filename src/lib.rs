//! rotmin - Rotated Sorted Sequence Minimum Finder
//!
//! Locates the minimum element of a non-decreasing sequence that has been
//! cyclically rotated by an unknown offset, with O(1) extra space.
//!
//! ```rust
//! use rotmin::search::{find_minimum_index, SearchOutcome};
//!
//! let outcome = find_minimum_index(&[5, 6, 7, 7, 8, 1, 1, 2, 3, 4, 4]).unwrap();
//! assert_eq!(outcome, SearchOutcome::Found(5));
//! ```

pub mod errors;
pub mod search;

// Re-export commonly used types
pub use errors::{FinderError, Result};
pub use search::{find_minimum_index, RotatedMinimumFinder, SearchOutcome, Strategy};

// Driver support: input, output, configuration
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod output;
