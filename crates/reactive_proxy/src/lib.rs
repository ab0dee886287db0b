//! Identity-stable observable wrappers for plain data.
//!
//! Wrapping a value produces a proxy that reports every read and write made through it, so an
//! effect system can learn which subscribers depend on which keys of which objects and re-run
//! them when those keys change. This crate owns the bookkeeping around the wrappers:
//!
//! - at most one wrapper per object and flavor, and every wrapper leads back to its object
//! - mutable and read-only wrappers, where read-only wins
//! - opt-outs for objects that must stay read-only or must never be wrapped
//! - a per-object dependency registry, created when an object is first wrapped
//!
//! None of it keeps an object alive: once the rest of the program lets go of an object, its
//! wrappers and registry entry go with it.
//!
//! All state is per thread. Objects are `Rc` based and cannot be shared between threads.
//!
//! # Example
//!
//! ```rust
//! use reactive_proxy::{dependencies, is_observable, mutable, ObjectRef, Value};
//!
//! let raw = ObjectRef::map();
//! let observed = mutable(&Value::from(&raw));
//!
//! assert!(is_observable(&observed));
//!
//! // writes through the wrapper land on the raw object
//! observed
//!     .as_object()
//!     .unwrap()
//!     .entry_set(Value::from("x"), Value::from(3))
//!     .unwrap();
//! assert_eq!(raw.entry_get(&Value::from("x")).unwrap(), Value::from(3));
//!
//! // an effect system finds the object's dependencies by its raw identity
//! assert!(dependencies(&raw).is_some());
//! ```

pub mod reactive;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use reactive::*;
