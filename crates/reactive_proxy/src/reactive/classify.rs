use super::object::{ObjectKind, ObjectRef};
use super::value::PropertyKey;

/// The kinds of object a wrapper can be created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    PlainObject,
    Array,
    Map,
    Set,
    WeakMap,
    WeakSet,
    Ineligible,
}

impl TargetKind {
    /// Built-in collections are intercepted by the collection strategy, everything else by the
    /// plain strategy.
    pub fn is_collection(&self) -> bool {
        matches!(self, TargetKind::Map | TargetKind::Set | TargetKind::WeakMap | TargetKind::WeakSet)
    }

    pub fn is_eligible(&self) -> bool {
        !matches!(self, TargetKind::Ineligible)
    }
}

pub fn classify(target: &ObjectRef) -> TargetKind {
    match target.kind() {
        ObjectKind::Plain => TargetKind::PlainObject,
        ObjectKind::Array => TargetKind::Array,
        ObjectKind::Map => TargetKind::Map,
        ObjectKind::Set => TargetKind::Set,
        ObjectKind::WeakMap => TargetKind::WeakMap,
        ObjectKind::WeakSet => TargetKind::WeakSet,
        ObjectKind::Opaque(_) => TargetKind::Ineligible,
    }
}

/// Decides whether an otherwise eligible object must never be wrapped, e.g. because it belongs
/// to a presentation layer that manages its own state.
pub trait ExclusionPredicate {
    fn excludes(&self, target: &ObjectRef) -> bool;
}

impl<F> ExclusionPredicate for F
where
    F: Fn(&ObjectRef) -> bool,
{
    fn excludes(&self, target: &ObjectRef) -> bool {
        self(target)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoExclusion;

impl ExclusionPredicate for NoExclusion {
    fn excludes(&self, _target: &ObjectRef) -> bool {
        false
    }
}

/// Excludes objects that carry a truthy value under any of the marker keys.
#[derive(Debug, Clone)]
pub struct MarkerExclusion {
    markers: Vec<PropertyKey>,
}

impl MarkerExclusion {
    pub fn new(markers: impl IntoIterator<Item = impl Into<PropertyKey>>) -> Self {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl ExclusionPredicate for MarkerExclusion {
    fn excludes(&self, target: &ObjectRef) -> bool {
        // objects without keyed properties (collections) cannot carry markers
        self.markers
            .iter()
            .any(|marker| {
                target
                    .get(marker)
                    .is_ok_and(|value| value.is_truthy())
            })
    }
}
