//! LCS alignment of two sequences.
//!
//! * time: `O(MN)`
//! * space `O(MN)`
//!
//! Unlike a diff, the result is the list of matched index pairs: the
//! reconcilers only care about which elements survive an update, not about
//! the edit script in between.

use std::ops::{Index, IndexMut};

use log::trace;

/// A matched pair of indices: `(index in previous, index in next)`.
pub type AlignedPair = (usize, usize);

/// Compute a longest common subsequence alignment of `previous` and `next`.
///
/// The returned pairs are strictly increasing on both sides and every pair
/// points at equal elements. When several alignments of maximal length
/// exist, the backtrace steps back in `previous` whenever both neighbouring
/// cells tie and `i >= j`, so repeated elements are matched as early as
/// possible in `previous`.
///
/// ```
/// use calligraph::align_sequences;
///
/// let previous: Vec<char> = "cart".chars().collect();
/// let next: Vec<char> = "card".chars().collect();
///
/// assert_eq!(align_sequences(&previous, &next), vec![(0, 0), (1, 1), (2, 2)]);
/// ```
#[must_use]
pub fn align_sequences<T>(previous: &[T], next: &[T]) -> Vec<AlignedPair>
where
    T: PartialEq,
{
    if previous.is_empty() || next.is_empty() {
        return Vec::new();
    }

    let table = make_table(previous, next);

    let mut pairs = Vec::with_capacity(table[(previous.len(), next.len())]);
    let mut i = previous.len();
    let mut j = next.len();

    while i > 0 && j > 0 {
        if previous[i - 1] == next[j - 1] {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table[(i - 1, j)] > table[(i, j - 1)]
            || (table[(i - 1, j)] == table[(i, j - 1)] && i >= j)
        {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    pairs.reverse();

    trace!(
        "Aligned {} of {} previous and {} next elements",
        pairs.len(),
        previous.len(),
        next.len()
    );

    pairs
}

/// Dense `(M + 1) x (N + 1)` table where cell `(i, j)` holds the LCS length
/// of `previous[..i]` and `next[..j]`.
#[derive(Debug)]
struct Table {
    width: usize,
    cells: Vec<usize>,
}

impl Index<(usize, usize)> for Table {
    type Output = usize;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output { &self.cells[i * self.width + j] }
}

impl IndexMut<(usize, usize)> for Table {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[i * self.width + j]
    }
}

fn make_table<T>(previous: &[T], next: &[T]) -> Table
where
    T: PartialEq,
{
    let width = next.len() + 1;
    let mut table = Table {
        width,
        cells: vec![0; (previous.len() + 1) * width],
    };

    for i in 1..=previous.len() {
        for j in 1..=next.len() {
            table[(i, j)] = if previous[i - 1] == next[j - 1] {
                table[(i - 1, j - 1)] + 1
            } else {
                table[(i - 1, j)].max(table[(i, j - 1)])
            };
        }
    }

    table
}
