#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::direction::Direction;

/// How many faces a reel spins past when it enters or exits.
pub const SPIN_DISTANCE: f64 = 4.0;

/// Signed number of faces a reel turns to go from `old` to `new`.
///
/// An increasing value always turns forward and a decreasing value always
/// turns backward, wrapping around through 0/9 instead of reversing. An
/// unchanged value turns by the plain difference.
///
/// ```
/// use calligraph::{Direction, rotation_delta};
///
/// assert_eq!(rotation_delta(9, 0, Direction::Increasing), 1);
/// assert_eq!(rotation_delta(0, 9, Direction::Decreasing), -1);
/// assert_eq!(rotation_delta(0, 9, Direction::Unchanged), 9);
/// ```
#[must_use]
pub fn rotation_delta(old: u8, new: u8, direction: Direction) -> i32 {
    debug_assert!(old <= 9 && new <= 9, "Digits must be in 0..=9");

    let old = i32::from(old);
    let new = i32::from(new);

    match direction {
        Direction::Increasing => (new - old).rem_euclid(10),
        Direction::Decreasing => -(old - new).rem_euclid(10),
        Direction::Unchanged => new - old,
    }
}

/// Rotation state of a single slot-machine digit column.
///
/// The reel position is an unbounded running total: it's never wrapped or
/// reset to the displayed digit, so a fast sequence of updates keeps
/// spinning the same way instead of jumping back.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRotation {
    current_digit: u8,
    cumulative_offset: f64,
    has_animated_once: bool,
    animate_in: bool,
}

impl ColumnRotation {
    /// Create the state of a column that just appeared showing `digit`.
    /// The reel starts out at the digit's own face. With `animate_in` unset
    /// the column is rendered in place instead of spinning in.
    #[must_use]
    pub fn new(digit: u8, animate_in: bool) -> Self {
        debug_assert!(digit <= 9, "Digits must be in 0..=9");

        Self {
            current_digit: digit,
            cumulative_offset: f64::from(digit),
            has_animated_once: false,
            animate_in,
        }
    }

    #[must_use]
    pub fn current_digit(&self) -> u8 { self.current_digit }

    #[must_use]
    pub fn cumulative_offset(&self) -> f64 { self.cumulative_offset }

    #[must_use]
    pub fn has_animated_once(&self) -> bool { self.has_animated_once }

    /// Commit `digit` and return the reel position to animate towards.
    pub fn advance(&mut self, digit: u8, direction: Direction) -> f64 {
        self.cumulative_offset += f64::from(rotation_delta(self.current_digit, digit, direction));
        self.current_digit = digit;
        self.has_animated_once = true;

        self.cumulative_offset
    }

    /// Where the reel has to start from to spin into place, or `None` if it
    /// should simply appear at its current position.
    #[must_use]
    pub fn entrance_offset(&self, direction: Direction) -> Option<f64> {
        (self.animate_in && !self.has_animated_once)
            .then(|| self.cumulative_offset - SPIN_DISTANCE * direction.spin_sign())
    }

    /// Where the reel spins to while the column is leaving.
    #[must_use]
    pub fn exit_offset(&self, direction: Direction) -> f64 {
        self.cumulative_offset + SPIN_DISTANCE * direction.spin_sign()
    }
}
