use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque label attached to one character occurrence so that a renderer can
/// track it across updates as the same visual element.
///
/// Keys are minted in increasing order and never reused: once a character
/// disappears, its key is retired for good.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IdentityKey(u64);

impl IdentityKey {
    #[must_use]
    pub const fn new(value: u64) -> Self { Self(value) }

    #[must_use]
    pub const fn value(self) -> u64 { self.0 }

    /// The key minted right after this one.
    #[must_use]
    pub const fn next(self) -> Self { Self(self.0 + 1) }
}

impl From<u64> for IdentityKey {
    fn from(value: u64) -> Self { Self(value) }
}

impl From<IdentityKey> for u64 {
    fn from(key: IdentityKey) -> Self { key.0 }
}

impl Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "c{}", self.0) }
}

/// Hands out fresh keys starting from the caller's counter and remembers how
/// many it has minted.
#[derive(Debug)]
pub(crate) struct KeyMinter {
    next: IdentityKey,
    minted: usize,
}

impl KeyMinter {
    pub fn new(next: IdentityKey) -> Self { Self { next, minted: 0 } }

    pub fn mint(&mut self) -> IdentityKey {
        let key = self.next;
        self.next = key.next();
        self.minted += 1;
        key
    }

    pub fn minted(&self) -> usize { self.minted }

    /// The counter value the caller has to pass to the next reconciliation.
    pub fn into_next(self) -> IdentityKey { self.next }
}
