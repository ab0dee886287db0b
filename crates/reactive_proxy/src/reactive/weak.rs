//! Identity-keyed maps and sets that do not keep their keys alive.
//!
//! Entries are keyed by [`ObjectId`] and hold a [`WeakObjectRef`] to the key. The weak handle
//! pins the allocation (but not the object), so an address can never be reused by another
//! object while an entry for it exists; a lookup by id is therefore always a lookup by identity.
//!
//! Entries whose key has been dropped are swept on insertion once the map has grown past its
//! sweep threshold. The threshold doubles relative to the surviving entries, which keeps
//! insertion amortised O(1).

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use super::object::{ObjectId, ObjectRef, WeakObjectRef};

const MIN_SWEEP_THRESHOLD: usize = 32;

pub struct WeakKeyMap<V> {
    entries: HashMap<ObjectId, (WeakObjectRef, V)>,
    sweep_threshold: usize,
}

impl<V> Default for WeakKeyMap<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            sweep_threshold: MIN_SWEEP_THRESHOLD,
        }
    }
}

impl<V> WeakKeyMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &ObjectRef) -> Option<&V> {
        self.entries
            .get(&key.id())
            .map(|(_, value)| value)
    }

    pub fn contains(&self, key: &ObjectRef) -> bool {
        self.entries
            .contains_key(&key.id())
    }

    /// Inserts or replaces the value for `key`, returning the previous value.
    pub fn insert(&mut self, key: &ObjectRef, value: V) -> Option<V> {
        if self.entries.len() >= self.sweep_threshold {
            self.sweep();
        }

        self.entries
            .insert(key.id(), (key.downgrade(), value))
            .map(|(_, previous)| previous)
    }

    pub fn remove(&mut self, key: &ObjectRef) -> Option<V> {
        self.entries
            .remove(&key.id())
            .map(|(_, value)| value)
    }

    /// Number of entries whose key is still alive.
    #[cfg(test)]
    pub(crate) fn live_len(&self) -> usize {
        self.entries
            .values()
            .filter(|(key, _)| key.is_alive())
            .count()
    }

    /// Live entries, in no particular order.
    fn iter(&self) -> impl Iterator<Item = (ObjectRef, &V)> {
        self.entries
            .values()
            .filter_map(|(key, value)| key.upgrade().map(|key| (key, value)))
    }

    /// Drops every entry whose key is no longer alive.
    pub(crate) fn sweep(&mut self) {
        self.entries
            .retain(|_, (key, _)| key.is_alive());
        self.sweep_threshold = (self.entries.len() * 2).max(MIN_SWEEP_THRESHOLD);
    }

    #[cfg(test)]
    pub(crate) fn raw_len(&self) -> usize {
        self.entries.len()
    }
}

impl<V: Debug> Debug for WeakKeyMap<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, value)| (key.id(), value)))
            .finish()
    }
}

/// Identity set with weak membership.
#[derive(Default)]
pub struct WeakKeySet {
    inner: WeakKeyMap<()>,
}

impl WeakKeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the value was not already present.
    pub fn insert(&mut self, key: &ObjectRef) -> bool {
        self.inner
            .insert(key, ())
            .is_none()
    }

    pub fn contains(&self, key: &ObjectRef) -> bool {
        self.inner.contains(key)
    }

    pub fn remove(&mut self, key: &ObjectRef) -> bool {
        self.inner
            .remove(key)
            .is_some()
    }

    fn iter(&self) -> impl Iterator<Item = ObjectRef> + '_ {
        self.inner
            .iter()
            .map(|(key, _)| key)
    }
}

impl Debug for WeakKeySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|key| key.id()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_by_identity() {
        let a = ObjectRef::plain();
        let b = ObjectRef::plain();
        let mut map = WeakKeyMap::new();

        map.insert(&a, 1);

        assert_eq!(map.get(&a), Some(&1));
        assert_eq!(map.get(&b), None);
        assert!(map.contains(&a.clone()));
    }

    #[test]
    fn entries_do_not_keep_keys_alive() {
        let mut map = WeakKeyMap::new();
        let key = ObjectRef::plain();
        let weak = key.downgrade();
        map.insert(&key, "value");

        drop(key);

        assert!(!weak.is_alive());
        assert_eq!(map.live_len(), 0);
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn dead_entries_are_swept_on_insert() {
        let mut map = WeakKeyMap::new();
        for _ in 0..MIN_SWEEP_THRESHOLD {
            let transient = ObjectRef::plain();
            map.insert(&transient, ());
        }
        assert_eq!(map.raw_len(), MIN_SWEEP_THRESHOLD);

        let survivor = ObjectRef::plain();
        map.insert(&survivor, ());

        assert_eq!(map.raw_len(), 1);
        assert!(map.contains(&survivor));
    }

    #[test]
    fn set_membership() {
        let mut set = WeakKeySet::new();
        let member = ObjectRef::array(vec![]);

        assert!(set.insert(&member));
        assert!(!set.insert(&member));
        assert!(set.contains(&member));
        assert!(set.remove(&member));
        assert!(!set.contains(&member));
    }
}
