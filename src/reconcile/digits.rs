use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    types::{
        direction::Direction,
        identity_key::{IdentityKey, KeyMinter},
        identity_map::IdentityMap,
    },
    utils::digit_prefix::digit_prefix_len,
};

/// Result of `reconcile_digits`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DigitReconciliation {
    /// One key per character of the new text.
    pub keys: IdentityMap,
    /// Counter to pass to the next reconciliation.
    pub next_fresh: IdentityKey,
    /// How the numeric value moved between the two strings.
    pub direction: Direction,
}

/// Carry character identities over a change of a formatted number.
///
/// Both strings are split into a prefix (the characters before the first
/// digit, e.g. a currency symbol or a sign) and a body (everything from the
/// first digit on).
///
/// - The prefix is compared position by position: a character keeps its key
///   if the previous prefix had the same character at the same index.
/// - The body is compared from its least-significant end: units against
///   units, tens against tens and so on. A character keeps its key only if
///   the previous body had the same character in the same column.
///
/// Everything else gets a freshly minted key.
///
/// ```
/// use calligraph::{Direction, IdentityKey, IdentityMap, reconcile_digits};
///
/// let (keys, next_fresh) = IdentityMap::sequential(5);
/// let result = reconcile_digits("$9.00", &keys, "$10.00", next_fresh);
///
/// assert_eq!(result.direction, Direction::Increasing);
/// assert_eq!(
///     result.keys.as_slice(),
///     [0, 5, 6, 2, 3, 4].map(IdentityKey::new).as_slice()
/// );
/// ```
#[must_use]
pub fn reconcile_digits(
    previous: &str,
    previous_keys: &IdentityMap,
    next: &str,
    next_fresh: IdentityKey,
) -> DigitReconciliation {
    let direction = Direction::between(previous, next);

    let previous_characters: Vec<char> = previous.chars().collect();
    let next_characters: Vec<char> = next.chars().collect();

    debug_assert_eq!(
        previous_characters.len(),
        previous_keys.len(),
        "The identity map must have one key per character of the previous text"
    );

    let previous_prefix_len = digit_prefix_len(&previous_characters);
    let next_prefix_len = digit_prefix_len(&next_characters);

    let mut minter = KeyMinter::new(next_fresh);
    let mut keys = Vec::with_capacity(next_characters.len());

    for (index, character) in next_characters[..next_prefix_len].iter().enumerate() {
        let inherited = (index < previous_prefix_len && previous_characters[index] == *character)
            .then(|| previous_keys.get(index))
            .flatten();
        keys.push(inherited.unwrap_or_else(|| minter.mint()));
    }

    let previous_body = &previous_characters[previous_prefix_len..];
    let next_body = &next_characters[next_prefix_len..];
    let column_count = previous_body.len().max(next_body.len());

    // Pad both bodies on the left so that their last characters line up.
    let previous_padding = column_count - previous_body.len();
    let next_padding = column_count - next_body.len();

    for (index, character) in next_body.iter().enumerate() {
        let inherited = (next_padding + index)
            .checked_sub(previous_padding)
            .filter(|&previous_index| previous_body[previous_index] == *character)
            .and_then(|previous_index| previous_keys.get(previous_prefix_len + previous_index));
        keys.push(inherited.unwrap_or_else(|| minter.mint()));
    }

    trace!(
        "Reconciled digits {previous:?} -> {next:?} ({direction}): minted {} keys",
        minter.minted()
    );

    DigitReconciliation {
        keys: IdentityMap::new(keys),
        next_fresh: minter.into_next(),
        direction,
    }
}
