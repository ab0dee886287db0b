//! Process-wide bookkeeping.
//!
//! Objects are `Rc` based and never cross threads, so "process-wide" means one state per
//! thread. It is created on first use and lives until the thread exits.

use std::cell::RefCell;
use std::rc::Rc;

use super::classify::ExclusionPredicate;
use super::config::ReactiveConfig;
use super::handlers::Handlers;
use super::identity::{Flavor, IdentityCache};
use super::registry::DependencyRegistry;
use super::tracker::Tracker;

#[derive(Default)]
struct ReactiveState {
    cache: RefCell<IdentityCache>,
    registry: RefCell<DependencyRegistry>,
    config: RefCell<ReactiveConfig>,
}

thread_local! {
    static STATE: ReactiveState = ReactiveState::default();
}

// Borrows taken here never outlive the closure, and callers must not call into handlers,
// trackers or exclusion predicates from inside one.

pub(crate) fn with_cache<R>(f: impl FnOnce(&IdentityCache) -> R) -> R {
    STATE.with(|state| f(&state.cache.borrow()))
}

pub(crate) fn with_cache_mut<R>(f: impl FnOnce(&mut IdentityCache) -> R) -> R {
    STATE.with(|state| f(&mut state.cache.borrow_mut()))
}

pub(crate) fn with_registry<R>(f: impl FnOnce(&DependencyRegistry) -> R) -> R {
    STATE.with(|state| f(&state.registry.borrow()))
}

pub(crate) fn with_registry_mut<R>(f: impl FnOnce(&mut DependencyRegistry) -> R) -> R {
    STATE.with(|state| f(&mut state.registry.borrow_mut()))
}

pub(crate) fn config() -> ReactiveConfig {
    STATE.with(|state| state.config.borrow().clone())
}

pub(crate) fn replace_config(config: ReactiveConfig) {
    // the previous config is dropped outside of the borrow
    let _previous = STATE.with(|state| state.config.replace(config));
}

pub(crate) fn diagnostics() -> bool {
    STATE.with(|state| state.config.borrow().diagnostics())
}

pub(crate) fn tracker() -> Rc<dyn Tracker> {
    STATE.with(|state| state.config.borrow().tracker().clone())
}

pub(crate) fn exclusion() -> Rc<dyn ExclusionPredicate> {
    STATE.with(|state| state.config.borrow().exclusion().clone())
}

pub(crate) fn handlers(flavor: Flavor) -> Handlers {
    STATE.with(|state| state.config.borrow().handlers(flavor).clone())
}
