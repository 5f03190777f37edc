//! Rotation invariant checking
//!
//! A sequence is a rotation of a non-decreasing sequence exactly when, walked
//! circularly, it steps down at most once. Zero steps means every value is
//! equal; one step marks the pivot.

/// Shape of a sequence with respect to the rotation invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationCheck {
    /// No circular descent: all values are equal
    Uniform,
    /// Exactly one circular descent, ending at `pivot`
    Rotated { pivot: usize },
    /// More than one circular descent
    Invalid { descents: usize },
}

impl RotationCheck {
    /// Check if the invariant holds
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid { .. })
    }
}

/// Classify a sequence in O(n) time. Empty input is treated as uniform.
pub fn check_rotation<T: Ord>(sequence: &[T]) -> RotationCheck {
    let n = sequence.len();
    let mut descents = 0;
    let mut pivot = 0;

    for i in 0..n {
        let next = (i + 1) % n;
        if sequence[i] > sequence[next] {
            descents += 1;
            pivot = next;
        }
    }

    match descents {
        0 => RotationCheck::Uniform,
        1 => RotationCheck::Rotated { pivot },
        _ => RotationCheck::Invalid { descents },
    }
}

/// Shorthand for `check_rotation(sequence).is_valid()`
pub fn is_rotated_sorted<T: Ord>(sequence: &[T]) -> bool {
    check_rotation(sequence).is_valid()
}
