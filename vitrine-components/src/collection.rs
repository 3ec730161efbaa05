//! Identity of the item collection a widget pages through.
//!
//! Widgets never see the items themselves, only how many there are and
//! whether the set is still the one they were paging through. Two
//! collections with the same length but different items (e.g. a new list of
//! image sources) are a different session.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Length and identity of an ordered item collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ItemCollection {
    len: usize,
    key: u64,
}

impl ItemCollection {
    /// Builds a collection from each item's stable key, in order.
    ///
    /// ```
    /// use vitrine_components::collection::ItemCollection;
    ///
    /// let a = ItemCollection::from_keys(["/a.png", "/b.png"]);
    /// let b = ItemCollection::from_keys(["/a.png", "/c.png"]);
    /// assert_eq!(a.len(), b.len());
    /// assert!(!a.same_session(&b));
    /// ```
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Hash,
    {
        let mut hasher = FxHasher::default();
        let mut len = 0usize;
        for key in keys {
            key.hash(&mut hasher);
            len += 1;
        }
        len.hash(&mut hasher);
        Self {
            len,
            key: hasher.finish(),
        }
    }

    /// Builds an anonymous collection identified by its length only.
    pub fn with_len(len: usize) -> Self {
        let mut hasher = FxHasher::default();
        len.hash(&mut hasher);
        Self {
            len,
            key: hasher.finish(),
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for an empty collection.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Identity key derived from the item keys.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Returns `true` when `other` continues the same pagination session.
    pub fn same_session(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_keys_same_session() {
        let a = ItemCollection::from_keys(["x", "y", "z"]);
        let b = ItemCollection::from_keys(vec!["x", "y", "z"]);
        assert!(a.same_session(&b));
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn order_and_length_change_identity() {
        let a = ItemCollection::from_keys([1, 2, 3]);
        assert!(!a.same_session(&ItemCollection::from_keys([3, 2, 1])));
        assert!(!a.same_session(&ItemCollection::from_keys([1, 2])));
        assert!(!ItemCollection::with_len(3).same_session(&ItemCollection::with_len(4)));
    }
}
