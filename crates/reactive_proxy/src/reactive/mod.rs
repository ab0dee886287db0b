//! Core wrapper system components.
//!
//! - [`Value`] / [`ObjectRef`]: identity-bearing data that can be wrapped
//! - [`ProxyHandler`]: interception strategy of a wrapper
//! - [`wrap`]: the wrapper factory, with the [`mutable`] and [`read_only`] shorthands
//! - [`is_observable`], [`is_read_only_wrapper`], [`origin_of`], [`mark_forced_read_only`] and
//!   [`mark_non_observable`]: introspection and opt-outs
//! - [`dependencies`]: the per-object dependency registry shared with an effect system
//!
//! # Example
//!
//! ```rust
//! use reactive_proxy::{mutable, origin_of, read_only, ObjectRef, Value};
//!
//! let raw = Value::from(ObjectRef::plain_from([("n", 1)]));
//!
//! let observed = mutable(&raw);
//! assert_eq!(mutable(&raw), observed);
//! assert_eq!(origin_of(&observed), raw);
//!
//! let locked = read_only(&raw);
//! assert_ne!(locked, observed);
//! assert_eq!(mutable(&locked), locked);
//! ```

mod classify;
mod config;
mod factory;
mod handlers;
mod identity;
mod object;
mod proxy;
mod query;
mod registry;
mod state;
mod tracker;
mod value;
mod weak;

pub use classify::{classify, ExclusionPredicate, MarkerExclusion, NoExclusion, TargetKind};
pub use config::{configure, current_config, ReactiveConfig};
pub use factory::{mutable, read_only, wrap, wrap_object};
pub use handlers::{CollectionHandlers, Handlers, PlainHandlers};
pub use identity::Flavor;
pub use object::{ObjectData, ObjectError, ObjectId, ObjectKind, ObjectRef, WeakObjectRef, MAX_ARRAY_LENGTH};
pub use proxy::{ForwardingHandler, ProxyHandler};
pub use query::{is_observable, is_read_only_wrapper, mark_forced_read_only, mark_non_observable, origin_of};
pub use registry::{dependencies, has_dependencies, Dep, DepKey, KeyDeps, KeyToDepMap, SubscriberKey};
pub use tracker::{iterate_key, NoopTracker, TrackOp, Tracker, TriggerOp};
pub use value::{PropertyKey, Symbol, Value};
pub use weak::{WeakKeyMap, WeakKeySet};
