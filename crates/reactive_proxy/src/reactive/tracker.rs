use super::object::ObjectRef;
use super::registry::DepKey;
use super::value::{PropertyKey, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackOp {
    Get,
    Has,
    Iterate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerOp {
    Set,
    Add,
    Delete,
    Clear,
}

/// The effect system's view of reads and writes made through wrappers.
///
/// `target` is always the raw object, the key under which [`dependencies`] finds its entry.
///
/// [`dependencies`]: super::registry::dependencies
pub trait Tracker {
    fn track(&self, target: &ObjectRef, op: TrackOp, key: &DepKey);

    fn trigger(&self, target: &ObjectRef, op: TriggerOp, key: &DepKey);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracker;

impl Tracker for NoopTracker {
    fn track(&self, _target: &ObjectRef, _op: TrackOp, _key: &DepKey) {}

    fn trigger(&self, _target: &ObjectRef, _op: TriggerOp, _key: &DepKey) {}
}

thread_local! {
    static ITERATE_KEY: Symbol = Symbol::new("iterate");
}

/// The key that stands for "the set of keys" of an object, used for iteration and size reads
/// and for writes that add, delete or clear keys.
pub fn iterate_key() -> DepKey {
    DepKey::Property(PropertyKey::Symbol(ITERATE_KEY.with(Symbol::clone)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterate_key_is_stable() {
        assert_eq!(iterate_key(), iterate_key());
        assert_ne!(iterate_key(), DepKey::from("iterate"));
    }
}
