use std::fmt::{Display, Formatter};

use super::object::{ObjectRef, WeakObjectRef};
use super::weak::{WeakKeyMap, WeakKeySet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Mutable,
    ReadOnly,
}

impl Display for Flavor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Flavor::Mutable => f.write_str("mutable"),
            Flavor::ReadOnly => f.write_str("read-only"),
        }
    }
}

/// raw <-> wrapper stores for one flavor, exact inverses of each other.
#[derive(Default)]
struct FlavorCache {
    raw_to_wrapper: WeakKeyMap<WeakObjectRef>,
    wrapper_to_raw: WeakKeyMap<WeakObjectRef>,
}

impl FlavorCache {
    fn wrapper_of(&self, raw: &ObjectRef) -> Option<ObjectRef> {
        self.raw_to_wrapper
            .get(raw)
            .and_then(WeakObjectRef::upgrade)
    }

    fn raw_of(&self, wrapper: &ObjectRef) -> Option<ObjectRef> {
        self.wrapper_to_raw
            .get(wrapper)
            .and_then(WeakObjectRef::upgrade)
    }

    fn register(&mut self, raw: &ObjectRef, wrapper: &ObjectRef) {
        // keep the stores inverse when a live wrapper is replaced
        if let Some(previous) = self
            .raw_to_wrapper
            .insert(raw, wrapper.downgrade())
            .and_then(|previous| previous.upgrade())
        {
            self.wrapper_to_raw.remove(&previous);
        }
        self.wrapper_to_raw
            .insert(wrapper, raw.downgrade());
    }
}

/// Raw/wrapper associations for both flavors plus the opt-out marks.
///
/// Nothing stored here keeps a raw value or a wrapper alive.
#[derive(Default)]
pub(crate) struct IdentityCache {
    mutable: FlavorCache,
    read_only: FlavorCache,
    forced_read_only: WeakKeySet,
    non_observable: WeakKeySet,
}

impl IdentityCache {
    fn flavor(&self, flavor: Flavor) -> &FlavorCache {
        match flavor {
            Flavor::Mutable => &self.mutable,
            Flavor::ReadOnly => &self.read_only,
        }
    }

    fn flavor_mut(&mut self, flavor: Flavor) -> &mut FlavorCache {
        match flavor {
            Flavor::Mutable => &mut self.mutable,
            Flavor::ReadOnly => &mut self.read_only,
        }
    }

    pub(crate) fn wrapper_of(&self, raw: &ObjectRef, flavor: Flavor) -> Option<ObjectRef> {
        self.flavor(flavor).wrapper_of(raw)
    }

    pub(crate) fn raw_of(&self, wrapper: &ObjectRef, flavor: Flavor) -> Option<ObjectRef> {
        self.flavor(flavor).raw_of(wrapper)
    }

    pub(crate) fn is_wrapper(&self, value: &ObjectRef, flavor: Flavor) -> bool {
        self.flavor(flavor)
            .wrapper_to_raw
            .contains(value)
    }

    pub(crate) fn register(&mut self, raw: &ObjectRef, wrapper: &ObjectRef, flavor: Flavor) {
        self.flavor_mut(flavor)
            .register(raw, wrapper)
    }

    pub(crate) fn mark_forced_read_only(&mut self, value: &ObjectRef) {
        self.forced_read_only.insert(value);
    }

    pub(crate) fn is_forced_read_only(&self, value: &ObjectRef) -> bool {
        self.forced_read_only.contains(value)
    }

    pub(crate) fn mark_non_observable(&mut self, value: &ObjectRef) {
        self.non_observable.insert(value);
    }

    pub(crate) fn is_non_observable(&self, value: &ObjectRef) -> bool {
        self.non_observable.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use rstest::rstest;

    use super::*;
    use crate::reactive::proxy::ForwardingHandler;

    fn wrapper_for(raw: &ObjectRef) -> ObjectRef {
        ObjectRef::proxy(raw.clone(), Rc::new(ForwardingHandler))
    }

    #[rstest]
    #[case(Flavor::Mutable)]
    #[case(Flavor::ReadOnly)]
    fn stores_are_inverses(#[case] flavor: Flavor) {
        let mut cache = IdentityCache::default();
        let raw = ObjectRef::plain();
        let wrapper = wrapper_for(&raw);

        cache.register(&raw, &wrapper, flavor);

        assert_eq!(cache.wrapper_of(&raw, flavor), Some(wrapper.clone()));
        assert_eq!(cache.raw_of(&wrapper, flavor), Some(raw.clone()));
        assert!(cache.is_wrapper(&wrapper, flavor));
        assert!(!cache.is_wrapper(&raw, flavor));
    }

    #[test]
    fn flavors_are_independent() {
        let mut cache = IdentityCache::default();
        let raw = ObjectRef::plain();
        let wrapper = wrapper_for(&raw);

        cache.register(&raw, &wrapper, Flavor::Mutable);

        assert_eq!(cache.wrapper_of(&raw, Flavor::ReadOnly), None);
        assert!(!cache.is_wrapper(&wrapper, Flavor::ReadOnly));
    }

    #[test]
    fn entries_do_not_keep_either_side_alive() {
        let mut cache = IdentityCache::default();
        let raw = ObjectRef::plain();
        let weak_raw = raw.downgrade();
        let wrapper = wrapper_for(&raw);
        let weak_wrapper = wrapper.downgrade();

        cache.register(&raw, &wrapper, Flavor::Mutable);
        drop(wrapper);

        assert!(!weak_wrapper.is_alive());
        assert_eq!(cache.wrapper_of(&raw, Flavor::Mutable), None);

        drop(raw);
        assert!(!weak_raw.is_alive());
    }

    #[test]
    fn replacing_a_dead_wrapper() {
        let mut cache = IdentityCache::default();
        let raw = ObjectRef::plain();

        cache.register(&raw, &wrapper_for(&raw), Flavor::ReadOnly);
        let replacement = wrapper_for(&raw);
        cache.register(&raw, &replacement, Flavor::ReadOnly);

        assert_eq!(cache.wrapper_of(&raw, Flavor::ReadOnly), Some(replacement.clone()));
        assert_eq!(cache.raw_of(&replacement, Flavor::ReadOnly), Some(raw));
    }

    #[test]
    fn marks() {
        let mut cache = IdentityCache::default();
        let forced = ObjectRef::plain();
        let hidden = ObjectRef::plain();

        cache.mark_forced_read_only(&forced);
        cache.mark_non_observable(&hidden);

        assert!(cache.is_forced_read_only(&forced));
        assert!(!cache.is_forced_read_only(&hidden));
        assert!(cache.is_non_observable(&hidden));
        assert!(!cache.is_non_observable(&forced));
    }
}
