use tracing::{debug, trace, warn};

use super::classify::{classify, TargetKind};
use super::handlers::Handlers;
use super::identity::Flavor;
use super::object::ObjectRef;
use super::state;
use super::value::Value;

/// Returns the `flavor` wrapper of `value`, creating it on first request.
///
/// Never fails: anything that cannot or must not be wrapped is returned unchanged, so
/// `result == *value` means nothing was wrapped.
///
/// * a read-only wrapper asked to become mutable stays the read-only wrapper.
/// * an object marked forced-read-only is wrapped read-only, with the configured read-only
///   strategies, when asked to become mutable.
/// * a mutable wrapper asked to become read-only is unwrapped first.
/// * non-objects are returned unchanged, with a warning when diagnostics are enabled.
/// * repeated requests return the same wrapper, and wrapping a wrapper of the requested flavor
///   returns it unchanged.
pub fn wrap(value: &Value, flavor: Flavor, handlers: &Handlers) -> Value {
    let Value::Object(target) = value else {
        if state::diagnostics() {
            warn!("value cannot be made reactive: {}", value);
        }
        return value.clone();
    };

    Value::Object(wrap_object(target, flavor, handlers))
}

/// [`wrap`] for a value known to be an object.
pub fn wrap_object(target: &ObjectRef, flavor: Flavor, handlers: &Handlers) -> ObjectRef {
    match flavor {
        Flavor::Mutable => {
            let (is_read_only_wrapper, is_forced_read_only) = state::with_cache(|cache| {
                (
                    cache.is_wrapper(target, Flavor::ReadOnly),
                    cache.is_forced_read_only(target),
                )
            });
            if is_read_only_wrapper {
                return target.clone();
            }
            if is_forced_read_only {
                trace!("Target is forced read-only, wrapping read-only. target: {:?}", target);
                let read_only_handlers = state::handlers(Flavor::ReadOnly);
                return wrap_object(target, Flavor::ReadOnly, &read_only_handlers);
            }
            create_wrapper(target, flavor, handlers)
        }
        Flavor::ReadOnly => {
            match state::with_cache(|cache| cache.raw_of(target, Flavor::Mutable)) {
                Some(raw) => create_wrapper(&raw, flavor, handlers),
                None => create_wrapper(target, flavor, handlers),
            }
        }
    }
}

/// Wraps `value` as a mutable observable using the configured strategies.
pub fn mutable(value: &Value) -> Value {
    wrap(value, Flavor::Mutable, &state::handlers(Flavor::Mutable))
}

/// Wraps `value` as a read-only observable using the configured strategies.
pub fn read_only(value: &Value) -> Value {
    wrap(value, Flavor::ReadOnly, &state::handlers(Flavor::ReadOnly))
}

fn create_wrapper(target: &ObjectRef, flavor: Flavor, handlers: &Handlers) -> ObjectRef {
    let (cached, is_wrapper) = state::with_cache(|cache| {
        (
            cache.wrapper_of(target, flavor),
            cache.is_wrapper(target, flavor),
        )
    });
    if let Some(wrapper) = cached {
        return wrapper;
    }
    if is_wrapper {
        return target.clone();
    }

    let kind = classify(target);
    if !can_observe(target, kind) {
        trace!("Target cannot be observed. kind: {:?}, target: {:?}", kind, target);
        return target.clone();
    }

    let wrapper = ObjectRef::proxy(target.clone(), handlers.select(kind).clone());
    state::with_cache_mut(|cache| cache.register(target, &wrapper, flavor));
    state::with_registry_mut(|registry| registry.ensure(target));

    debug!("Created wrapper. flavor: {}, kind: {:?}, target: {:?}", flavor, kind, target);
    wrapper
}

fn can_observe(target: &ObjectRef, kind: TargetKind) -> bool {
    // the predicate is user code, no state borrow may be held while it runs
    let exclusion = state::exclusion();
    if exclusion.excludes(target) {
        return false;
    }

    kind.is_eligible() && !state::with_cache(|cache| cache.is_non_observable(target))
}
