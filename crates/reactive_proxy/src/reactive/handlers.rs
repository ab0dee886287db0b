//! Default interception strategies.
//!
//! Reads are reported to the configured [`Tracker`] and writes trigger it. Objects read through
//! a wrapper come back wrapped in the same flavor, values written through a wrapper are stored
//! in their raw form. Read-only wrappers refuse every write and report `false` (or nothing, for
//! `clear`) without touching the target.

use std::rc::Rc;

use tracing::warn;

use super::classify::TargetKind;
use super::factory;
use super::identity::Flavor;
use super::object::{ObjectError, ObjectRef};
use super::proxy::ProxyHandler;
use super::query::origin_of;
use super::registry::DepKey;
use super::state;
use super::tracker::{iterate_key, TrackOp, TriggerOp};
use super::value::{PropertyKey, Value};

/// The strategies a wrapper factory chooses from.
#[derive(Clone)]
pub struct Handlers {
    plain: Rc<dyn ProxyHandler>,
    collection: Rc<dyn ProxyHandler>,
}

impl Handlers {
    pub fn new(plain: Rc<dyn ProxyHandler>, collection: Rc<dyn ProxyHandler>) -> Self {
        Self {
            plain,
            collection,
        }
    }

    /// The default plain and collection strategies for `flavor`.
    pub fn for_flavor(flavor: Flavor) -> Self {
        Self::new(
            Rc::new(PlainHandlers::new(flavor)),
            Rc::new(CollectionHandlers::new(flavor)),
        )
    }

    pub fn select(&self, kind: TargetKind) -> &Rc<dyn ProxyHandler> {
        match kind.is_collection() {
            true => &self.collection,
            false => &self.plain,
        }
    }
}

fn track(target: &ObjectRef, op: TrackOp, key: DepKey) {
    state::tracker().track(target, op, &key)
}

fn trigger(target: &ObjectRef, op: TriggerOp, key: DepKey) {
    state::tracker().trigger(target, op, &key)
}

fn wrap_nested(value: Value, flavor: Flavor) -> Value {
    if !value.is_object() {
        return value;
    }
    match flavor {
        Flavor::Mutable => factory::mutable(&value),
        Flavor::ReadOnly => factory::read_only(&value),
    }
}

fn refuse(operation: &str, target: &ObjectRef, key: &dyn std::fmt::Display) {
    if state::diagnostics() {
        warn!(
            "Write refused, target is read-only. operation: {}, key: {}, target: {:?}",
            operation, key, target
        );
    }
}

/// Strategy for plain objects and arrays.
#[derive(Debug, Clone, Copy)]
pub struct PlainHandlers {
    flavor: Flavor,
}

impl PlainHandlers {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
        }
    }
}

impl ProxyHandler for PlainHandlers {
    fn get(&self, target: &ObjectRef, key: &PropertyKey) -> Result<Value, ObjectError> {
        let value = target.get(key)?;
        track(target, TrackOp::Get, DepKey::Property(key.clone()));
        Ok(wrap_nested(value, self.flavor))
    }

    fn set(&self, target: &ObjectRef, key: PropertyKey, value: Value) -> Result<bool, ObjectError> {
        if self.flavor == Flavor::ReadOnly {
            refuse("set", target, &key);
            return Ok(false);
        }

        let value = origin_of(&value);
        let had_key = target.has(&key)?;
        let old_value = target.get(&key)?;
        let result = target.set(key.clone(), value.clone())?;

        if !had_key {
            trigger(target, TriggerOp::Add, DepKey::Property(key));
        } else if !old_value.same(&value) {
            trigger(target, TriggerOp::Set, DepKey::Property(key));
        }
        Ok(result)
    }

    fn has(&self, target: &ObjectRef, key: &PropertyKey) -> Result<bool, ObjectError> {
        let result = target.has(key)?;
        track(target, TrackOp::Has, DepKey::Property(key.clone()));
        Ok(result)
    }

    fn delete(&self, target: &ObjectRef, key: &PropertyKey) -> Result<bool, ObjectError> {
        if self.flavor == Flavor::ReadOnly {
            refuse("delete", target, key);
            return Ok(false);
        }

        let had_key = target.has(key)?;
        let result = target.delete(key)?;
        if had_key && result {
            trigger(target, TriggerOp::Delete, DepKey::Property(key.clone()));
        }
        Ok(result)
    }

    fn own_keys(&self, target: &ObjectRef) -> Result<Vec<PropertyKey>, ObjectError> {
        let keys = target.own_keys()?;
        track(target, TrackOp::Iterate, iterate_key());
        Ok(keys)
    }
}

/// Strategy for maps, sets, weak maps and weak sets.
#[derive(Debug, Clone, Copy)]
pub struct CollectionHandlers {
    flavor: Flavor,
}

impl CollectionHandlers {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
        }
    }
}

impl ProxyHandler for CollectionHandlers {
    fn entry_get(&self, target: &ObjectRef, key: &Value) -> Result<Value, ObjectError> {
        let key = origin_of(key);
        let value = target.entry_get(&key)?;
        track(target, TrackOp::Get, DepKey::entry(key));
        Ok(wrap_nested(value, self.flavor))
    }

    fn entry_has(&self, target: &ObjectRef, key: &Value) -> Result<bool, ObjectError> {
        let key = origin_of(key);
        let result = target.entry_has(&key)?;
        track(target, TrackOp::Has, DepKey::entry(key));
        Ok(result)
    }

    fn entry_set(&self, target: &ObjectRef, key: Value, value: Value) -> Result<bool, ObjectError> {
        if self.flavor == Flavor::ReadOnly {
            refuse("entry_set", target, &key);
            return Ok(false);
        }

        let key = origin_of(&key);
        let value = origin_of(&value);
        let had_key = target.entry_has(&key)?;
        let old_value = match had_key {
            true => target.entry_get(&key).ok(),
            false => None,
        };
        let result = target.entry_set(key.clone(), value.clone())?;

        if !had_key {
            trigger(target, TriggerOp::Add, DepKey::entry(key));
        } else if old_value.map_or(true, |old_value| !old_value.same(&value)) {
            trigger(target, TriggerOp::Set, DepKey::entry(key));
        }
        Ok(result)
    }

    fn entry_add(&self, target: &ObjectRef, value: Value) -> Result<bool, ObjectError> {
        if self.flavor == Flavor::ReadOnly {
            refuse("entry_add", target, &value);
            return Ok(false);
        }

        let value = origin_of(&value);
        let added = target.entry_add(value.clone())?;
        if added {
            trigger(target, TriggerOp::Add, DepKey::entry(value));
        }
        Ok(added)
    }

    fn entry_delete(&self, target: &ObjectRef, key: &Value) -> Result<bool, ObjectError> {
        if self.flavor == Flavor::ReadOnly {
            refuse("entry_delete", target, key);
            return Ok(false);
        }

        let key = origin_of(key);
        let deleted = target.entry_delete(&key)?;
        if deleted {
            trigger(target, TriggerOp::Delete, DepKey::entry(key));
        }
        Ok(deleted)
    }

    fn entry_keys(&self, target: &ObjectRef) -> Result<Vec<Value>, ObjectError> {
        let keys = target.entry_keys()?;
        track(target, TrackOp::Iterate, iterate_key());
        Ok(keys
            .into_iter()
            .map(|key| wrap_nested(key, self.flavor))
            .collect())
    }

    fn size(&self, target: &ObjectRef) -> Result<usize, ObjectError> {
        let size = target.size()?;
        track(target, TrackOp::Iterate, iterate_key());
        Ok(size)
    }

    fn clear(&self, target: &ObjectRef) -> Result<(), ObjectError> {
        if self.flavor == Flavor::ReadOnly {
            refuse("clear", target, &"*");
            return Ok(());
        }

        let had_entries = target.size()? > 0;
        target.clear()?;
        if had_entries {
            trigger(target, TriggerOp::Clear, iterate_key());
        }
        Ok(())
    }
}
