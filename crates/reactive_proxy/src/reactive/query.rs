use super::identity::Flavor;
use super::state;
use super::value::Value;

/// `true` if `value` is a wrapper of either flavor.
pub fn is_observable(value: &Value) -> bool {
    let Value::Object(object) = value else {
        return false;
    };
    state::with_cache(|cache| {
        cache.is_wrapper(object, Flavor::Mutable) || cache.is_wrapper(object, Flavor::ReadOnly)
    })
}

pub fn is_read_only_wrapper(value: &Value) -> bool {
    let Value::Object(object) = value else {
        return false;
    };
    state::with_cache(|cache| cache.is_wrapper(object, Flavor::ReadOnly))
}

/// The raw value behind a wrapper, or `value` itself if it is not a wrapper.
pub fn origin_of(value: &Value) -> Value {
    let Value::Object(object) = value else {
        return value.clone();
    };
    state::with_cache(|cache| {
        cache
            .raw_of(object, Flavor::Mutable)
            .or_else(|| cache.raw_of(object, Flavor::ReadOnly))
    })
    .map(Value::Object)
    .unwrap_or_else(|| value.clone())
}

/// Future mutable wrap requests for `value` produce its read-only wrapper instead.
///
/// Existing wrappers are unaffected. Non-objects are returned unchanged.
pub fn mark_forced_read_only(value: Value) -> Value {
    if let Value::Object(object) = &value {
        state::with_cache_mut(|cache| cache.mark_forced_read_only(object));
    }
    value
}

/// `value` will never be wrapped from now on.
///
/// Existing wrappers are unaffected. Non-objects are returned unchanged.
pub fn mark_non_observable(value: Value) -> Value {
    if let Value::Object(object) = &value {
        state::with_cache_mut(|cache| cache.mark_non_observable(object));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::factory::{mutable, read_only};
    use crate::reactive::object::ObjectRef;

    #[test]
    fn origin_of_unwrapped_values_is_identity() {
        let object = Value::from(ObjectRef::plain());

        assert_eq!(origin_of(&object), object);
        assert_eq!(origin_of(&Value::from(5)), Value::from(5));
    }

    #[test]
    fn flavor_introspection() {
        let raw = Value::from(ObjectRef::new_set());
        let observed = mutable(&raw);
        let locked = read_only(&raw);

        assert!(!is_observable(&raw));
        assert!(is_observable(&observed));
        assert!(is_observable(&locked));
        assert!(!is_read_only_wrapper(&observed));
        assert!(is_read_only_wrapper(&locked));
        assert!(!is_read_only_wrapper(&Value::from("s")));
    }

    #[test]
    fn marks_do_not_affect_existing_wrappers() {
        let raw = Value::from(ObjectRef::plain());
        let observed = mutable(&raw);

        let raw = mark_non_observable(raw);

        assert_eq!(mutable(&raw), observed);
        assert!(is_observable(&observed));
    }

    #[test]
    fn marking_non_objects_is_a_no_op() {
        assert_eq!(mark_non_observable(Value::from(1)), Value::from(1));
        assert_eq!(mark_forced_read_only(Value::Null), Value::Null);
    }
}
