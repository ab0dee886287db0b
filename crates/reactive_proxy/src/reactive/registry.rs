use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use indexmap::IndexSet;
use slotmap::new_key_type;

use super::object::{ObjectRef, WeakObjectRef};
use super::state;
use super::value::{PropertyKey, Value};
use super::weak::WeakKeyMap;

new_key_type! {
    /// Handle of a subscriber (an effect), allocated by the effect system.
    pub struct SubscriberKey;
}

/// Key under which dependencies are recorded for a raw object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DepKey {
    /// A property of a plain object or array.
    Property(PropertyKey),
    /// An entry of a map or set keyed by a primitive.
    Entry(Value),
    /// An entry of a map or set keyed by an object. The key is held weakly, recorded
    /// dependencies never keep an entry key alive.
    ObjectEntry(WeakObjectRef),
}

impl DepKey {
    /// The key for the map or set entry `key`, which must already be in raw form.
    pub fn entry(key: Value) -> Self {
        match key {
            Value::Object(object) => DepKey::ObjectEntry(object.downgrade()),
            key => DepKey::Entry(key),
        }
    }
}

impl Display for DepKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DepKey::Property(key) => write!(f, "{}", key),
            DepKey::Entry(key) => write!(f, "entry({})", key),
            DepKey::ObjectEntry(key) => write!(f, "entry({:?})", key),
        }
    }
}

impl From<PropertyKey> for DepKey {
    fn from(value: PropertyKey) -> Self {
        DepKey::Property(value)
    }
}

impl From<&str> for DepKey {
    fn from(value: &str) -> Self {
        DepKey::Property(PropertyKey::string(value))
    }
}

/// Subscribers of a single key, in subscription order.
pub type Dep = IndexSet<SubscriberKey>;

pub type KeyToDepMap = HashMap<DepKey, Dep>;

/// A shared handle to the dependencies of one raw object.
pub type KeyDeps = Rc<RefCell<KeyToDepMap>>;

/// Maps raw objects to the subscribers of each of their keys.
///
/// Entries are created by the wrapper factory the first time an object is wrapped, and are
/// otherwise owned by the effect system, which adds and removes subscribers through the shared
/// [`KeyDeps`] handle. An entry disappears with its raw object.
#[derive(Default)]
pub(crate) struct DependencyRegistry {
    targets: WeakKeyMap<KeyDeps>,
}

impl DependencyRegistry {
    /// Creates an empty entry for `target` unless one exists. Returns `true` if created.
    pub(crate) fn ensure(&mut self, target: &ObjectRef) -> bool {
        if self.targets.contains(target) {
            return false;
        }
        self.targets
            .insert(target, KeyDeps::default());
        true
    }

    pub fn get(&self, target: &ObjectRef) -> Option<KeyDeps> {
        self.targets
            .get(target)
            .cloned()
    }

    pub fn contains(&self, target: &ObjectRef) -> bool {
        self.targets.contains(target)
    }

    /// Number of raw objects that are still alive and have an entry.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.targets.live_len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The dependencies recorded for the raw object `target` on the current thread.
///
/// Present from the moment `target` is first wrapped. Looking up a wrapper finds nothing, the
/// registry is keyed by raw objects.
pub fn dependencies(target: &ObjectRef) -> Option<KeyDeps> {
    state::with_registry(|registry| registry.get(target))
}

pub fn has_dependencies(target: &ObjectRef) -> bool {
    state::with_registry(|registry| registry.contains(target))
}
