use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    alignment::align_sequences,
    types::{
        identity_key::{IdentityKey, KeyMinter},
        identity_map::IdentityMap,
    },
};

/// Result of `reconcile_text`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TextReconciliation {
    /// One key per character of the new text.
    pub keys: IdentityMap,
    /// Counter to pass to the next reconciliation.
    pub next_fresh: IdentityKey,
    /// Share of `max(previous length, next length)` that entered or exited,
    /// in `[0, 1]`.
    pub change_ratio: f64,
}

/// Carry character identities over a text change.
///
/// The LCS alignment of `previous` and `next` decides which characters
/// survive: a surviving character keeps its key from `previous_keys`, every
/// other character of `next` gets a freshly minted key starting at
/// `next_fresh`. Keys of characters that didn't survive are simply absent
/// from the result.
///
/// ```
/// use calligraph::{IdentityKey, IdentityMap, reconcile_text};
///
/// let (keys, next_fresh) = IdentityMap::sequential(4);
/// let result = reconcile_text("cart", &keys, "card", next_fresh);
///
/// assert_eq!(
///     result.keys.as_slice(),
///     [0, 1, 2, 4].map(IdentityKey::new).as_slice()
/// );
/// assert_eq!(result.next_fresh, IdentityKey::new(5));
/// assert_eq!(result.change_ratio, 0.5);
/// ```
#[must_use]
pub fn reconcile_text(
    previous: &str,
    previous_keys: &IdentityMap,
    next: &str,
    next_fresh: IdentityKey,
) -> TextReconciliation {
    let previous_characters: Vec<char> = previous.chars().collect();
    let next_characters: Vec<char> = next.chars().collect();

    debug_assert_eq!(
        previous_characters.len(),
        previous_keys.len(),
        "The identity map must have one key per character of the previous text"
    );

    let mut keys: Vec<Option<IdentityKey>> = vec![None; next_characters.len()];
    let mut kept_count = 0;
    for (previous_index, next_index) in align_sequences(&previous_characters, &next_characters) {
        if let Some(key) = previous_keys.get(previous_index) {
            keys[next_index] = Some(key);
            kept_count += 1;
        }
    }

    let mut minter = KeyMinter::new(next_fresh);
    let keys: IdentityMap = keys
        .into_iter()
        .map(|key| key.unwrap_or_else(|| minter.mint()))
        .collect();

    let change_ratio = change_ratio(
        minter.minted(),
        previous_characters.len() - kept_count,
        previous_characters.len().max(next_characters.len()),
    );

    trace!(
        "Reconciled text of {} -> {} characters: {} kept, change ratio {change_ratio}",
        previous_characters.len(),
        next_characters.len(),
        kept_count
    );

    TextReconciliation {
        keys,
        next_fresh: minter.into_next(),
        change_ratio,
    }
}

#[allow(clippy::cast_precision_loss)]
fn change_ratio(entered: usize, exited: usize, longest: usize) -> f64 {
    if longest == 0 {
        return 1.0;
    }

    ((entered + exited) as f64 / longest as f64).min(1.0)
}
