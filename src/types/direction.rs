use std::{cmp::Ordering, fmt::Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::numeric::parse_magnitude;

/// Whether a displayed number went up, went down or kept its value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Increasing,
    Decreasing,
    #[default]
    Unchanged,
}

impl Direction {
    /// Compare the numeric magnitudes of two formatted strings.
    ///
    /// ```
    /// use calligraph::Direction;
    ///
    /// assert_eq!(Direction::between("$9.00", "$10.00"), Direction::Increasing);
    /// assert_eq!(Direction::between("$10.00", "$9.00"), Direction::Decreasing);
    /// assert_eq!(Direction::between("1,000", "1000"), Direction::Unchanged);
    /// ```
    #[must_use]
    pub fn between(previous: &str, next: &str) -> Self {
        Self::from_magnitudes(parse_magnitude(previous), parse_magnitude(next))
    }

    #[must_use]
    pub fn from_magnitudes(previous: f64, next: f64) -> Self {
        match next.partial_cmp(&previous) {
            Some(Ordering::Greater) => Direction::Increasing,
            Some(Ordering::Less) => Direction::Decreasing,
            Some(Ordering::Equal) | None => Direction::Unchanged,
        }
    }

    /// Sign used to orient motion: only a decrease spins downwards, an
    /// unchanged value moves the same way as an increase.
    #[must_use]
    pub fn spin_sign(self) -> f64 {
        match self {
            Direction::Decreasing => -1.0,
            Direction::Increasing | Direction::Unchanged => 1.0,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Increasing => write!(f, "increasing"),
            Direction::Decreasing => write!(f, "decreasing"),
            Direction::Unchanged => write!(f, "unchanged"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("$9.00", "$10.00", Direction::Increasing ; "dollars up")]
    #[test_case("$10.00", "$9.00", Direction::Decreasing ; "dollars down")]
    #[test_case("$10.00", "$10.00", Direction::Unchanged ; "same value")]
    #[test_case("10", "10.0", Direction::Unchanged ; "reformatted")]
    #[test_case("-5", "-3", Direction::Increasing ; "towards zero")]
    #[test_case("abc", "", Direction::Unchanged ; "no numbers at all")]
    #[test_case("", "1", Direction::Increasing ; "from empty")]
    fn test_between(previous: &str, next: &str, expected: Direction) {
        assert_eq!(Direction::between(previous, next), expected);
    }

    #[test]
    fn test_overflowing_magnitude_still_orders() {
        let huge = "9".repeat(400);

        assert_eq!(Direction::between(&huge, "5"), Direction::Decreasing);
        assert_eq!(Direction::between("5", &huge), Direction::Increasing);
        assert_eq!(Direction::between(&huge, &huge), Direction::Unchanged);
    }

    #[test]
    fn test_nan_is_unchanged() {
        assert_eq!(
            Direction::from_magnitudes(f64::NAN, 1.0),
            Direction::Unchanged
        );
    }
}
