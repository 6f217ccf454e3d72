use std::collections::BTreeMap;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{rotation::column_rotation::ColumnRotation, types::direction::Direction};

/// A reel that was removed by `ReelSet::sync`, with the position it should
/// spin to while fading out.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelExit {
    pub column: usize,
    pub target: f64,
}

/// The rotation states of all digit columns of a slot-machine number.
///
/// Columns are counted from the right (0 is the least-significant
/// character), so a column keeps its reel while the number grows or shrinks
/// on the left.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReelSet {
    reels: BTreeMap<usize, ColumnRotation>,
}

impl ReelSet {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Bring the reels in line with `characters`.
    ///
    /// Surviving digit columns turn towards their new digit, new digit
    /// columns get a reel (spinning in only if `animate_in` is set) and the
    /// reels of columns that vanished or no longer hold a digit are dropped
    /// and returned.
    pub fn sync(
        &mut self,
        characters: &[char],
        direction: Direction,
        animate_in: bool,
    ) -> Vec<ReelExit> {
        let mut synced = BTreeMap::new();

        for (index, character) in characters.iter().enumerate() {
            let Some(digit) = digit_value(*character) else {
                continue;
            };
            let column = characters.len() - 1 - index;

            let reel = match self.reels.remove(&column) {
                Some(mut reel) => {
                    reel.advance(digit, direction);
                    reel
                }
                None => {
                    debug!("Creating reel for column {column} at digit {digit}");
                    ColumnRotation::new(digit, animate_in)
                }
            };
            synced.insert(column, reel);
        }

        std::mem::replace(&mut self.reels, synced)
            .into_iter()
            .map(|(column, reel)| {
                debug!("Dropping reel of column {column}");
                ReelExit {
                    column,
                    target: reel.exit_offset(direction),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn get(&self, column: usize) -> Option<&ColumnRotation> { self.reels.get(&column) }

    #[must_use]
    pub fn len(&self) -> usize { self.reels.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.reels.is_empty() }
}

#[allow(clippy::cast_possible_truncation)]
fn digit_value(character: char) -> Option<u8> {
    character.to_digit(10).map(|digit| digit as u8)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    fn positions(reels: &ReelSet) -> Vec<(usize, f64)> {
        reels
            .reels
            .iter()
            .map(|(column, reel)| (*column, reel.cumulative_offset()))
            .collect()
    }

    #[test]
    fn test_mount() {
        let mut reels = ReelSet::new();
        let exits = reels.sync(&chars("$1,05"), Direction::Unchanged, false);

        assert!(exits.is_empty());
        assert_eq!(positions(&reels), vec![(0, 5.0), (1, 0.0), (3, 1.0)]);
        assert_eq!(reels.get(0).and_then(|reel| reel.entrance_offset(Direction::Unchanged)), None);
    }

    #[test]
    fn test_counter_rolls_over() {
        let mut reels = ReelSet::new();
        reels.sync(&chars("97"), Direction::Unchanged, false);

        for text in ["98", "99", "100"] {
            let exits = reels.sync(&chars(text), Direction::Increasing, true);
            assert!(exits.is_empty());
        }

        assert_eq!(positions(&reels), vec![(0, 10.0), (1, 10.0), (2, 1.0)]);
        assert_eq!(
            reels.get(2).and_then(|reel| reel.entrance_offset(Direction::Increasing)),
            Some(-3.0)
        );
        assert_eq!(
            reels.get(1).and_then(|reel| reel.entrance_offset(Direction::Increasing)),
            None
        );
    }

    #[test]
    fn test_shrinking_drops_reels() {
        let mut reels = ReelSet::new();
        reels.sync(&chars("100"), Direction::Unchanged, false);

        let exits = reels.sync(&chars("99"), Direction::Decreasing, true);

        assert_eq!(
            exits,
            vec![ReelExit {
                column: 2,
                target: -3.0
            }]
        );
        assert_eq!(positions(&reels), vec![(0, -1.0), (1, -1.0)]);
    }

    #[test]
    fn test_column_turning_into_a_separator_drops_its_reel() {
        let mut reels = ReelSet::new();
        reels.sync(&chars("1234"), Direction::Unchanged, false);

        let exits = reels.sync(&chars("1.234"), Direction::Decreasing, true);

        assert_eq!(
            exits,
            vec![ReelExit {
                column: 3,
                target: -3.0
            }]
        );
        assert_eq!(reels.len(), 4);
        assert_eq!(reels.get(4).map(ColumnRotation::current_digit), Some(1));
    }
}
