use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::identity_key::IdentityKey;

/// One `IdentityKey` per character of the currently displayed text, in
/// display order.
///
/// The keys of a map are pairwise distinct and its length always matches the
/// character count of the text it was reconciled for.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentityMap(Vec<IdentityKey>);

impl IdentityMap {
    #[must_use]
    pub fn new(keys: Vec<IdentityKey>) -> Self {
        debug_assert!(
            has_unique_keys(&keys),
            "Identity keys must be unique within a map"
        );

        Self(keys)
    }

    /// The map of a freshly mounted text: keys `0..length`. Returns the map
    /// together with the first key that hasn't been handed out yet.
    #[must_use]
    pub fn sequential(length: usize) -> (Self, IdentityKey) {
        let keys = (0..length as u64).map(IdentityKey::new).collect();
        (Self(keys), IdentityKey::new(length as u64))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<IdentityKey> { self.0.get(index).copied() }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = IdentityKey> + '_ { self.0.iter().copied() }

    #[must_use]
    pub fn as_slice(&self) -> &[IdentityKey] { &self.0 }

    /// Keys of `previous` that are no longer present in `self`, in their
    /// previous display order.
    #[must_use]
    pub fn retired_since(&self, previous: &IdentityMap) -> Vec<IdentityKey> {
        let current: HashSet<IdentityKey> = self.iter().collect();
        previous.iter().filter(|key| !current.contains(key)).collect()
    }

    #[must_use]
    pub fn is_unique(&self) -> bool { has_unique_keys(&self.0) }
}

fn has_unique_keys(keys: &[IdentityKey]) -> bool {
    let mut seen = HashSet::with_capacity(keys.len());
    keys.iter().all(|key| seen.insert(*key))
}

impl From<Vec<IdentityKey>> for IdentityMap {
    fn from(keys: Vec<IdentityKey>) -> Self { Self::new(keys) }
}

impl From<IdentityMap> for Vec<IdentityKey> {
    fn from(map: IdentityMap) -> Self { map.0 }
}

impl FromIterator<IdentityKey> for IdentityMap {
    fn from_iter<I: IntoIterator<Item = IdentityKey>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a IdentityMap {
    type Item = &'a IdentityKey;
    type IntoIter = std::slice::Iter<'a, IdentityKey>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}
