use std::rc::Rc;

use super::object::{ObjectError, ObjectRef};
use super::value::{PropertyKey, Value};

/// Interception strategy for a proxy.
///
/// Each trap receives the proxied target. Every trap defaults to forwarding the operation to
/// the target unchanged, so an implementation overrides only the traps it cares about.
pub trait ProxyHandler {
    fn get(&self, target: &ObjectRef, key: &PropertyKey) -> Result<Value, ObjectError> {
        target.get(key)
    }

    fn set(&self, target: &ObjectRef, key: PropertyKey, value: Value) -> Result<bool, ObjectError> {
        target.set(key, value)
    }

    fn has(&self, target: &ObjectRef, key: &PropertyKey) -> Result<bool, ObjectError> {
        target.has(key)
    }

    fn delete(&self, target: &ObjectRef, key: &PropertyKey) -> Result<bool, ObjectError> {
        target.delete(key)
    }

    fn own_keys(&self, target: &ObjectRef) -> Result<Vec<PropertyKey>, ObjectError> {
        target.own_keys()
    }

    fn entry_get(&self, target: &ObjectRef, key: &Value) -> Result<Value, ObjectError> {
        target.entry_get(key)
    }

    fn entry_has(&self, target: &ObjectRef, key: &Value) -> Result<bool, ObjectError> {
        target.entry_has(key)
    }

    fn entry_set(&self, target: &ObjectRef, key: Value, value: Value) -> Result<bool, ObjectError> {
        target.entry_set(key, value)
    }

    fn entry_add(&self, target: &ObjectRef, value: Value) -> Result<bool, ObjectError> {
        target.entry_add(value)
    }

    fn entry_delete(&self, target: &ObjectRef, key: &Value) -> Result<bool, ObjectError> {
        target.entry_delete(key)
    }

    fn entry_keys(&self, target: &ObjectRef) -> Result<Vec<Value>, ObjectError> {
        target.entry_keys()
    }

    fn size(&self, target: &ObjectRef) -> Result<usize, ObjectError> {
        target.size()
    }

    fn clear(&self, target: &ObjectRef) -> Result<(), ObjectError> {
        target.clear()
    }
}

/// A handler that intercepts nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForwardingHandler;

impl ProxyHandler for ForwardingHandler {}

pub(crate) struct Proxy {
    target: ObjectRef,
    handler: Rc<dyn ProxyHandler>,
}

impl Proxy {
    pub(crate) fn new(target: ObjectRef, handler: Rc<dyn ProxyHandler>) -> Self {
        Self {
            target,
            handler,
        }
    }

    pub(crate) fn target(&self) -> &ObjectRef {
        &self.target
    }

    pub(crate) fn handler(&self) -> &dyn ProxyHandler {
        &*self.handler
    }
}
