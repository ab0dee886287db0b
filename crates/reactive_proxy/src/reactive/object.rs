//! Identity-bearing objects.
//!
//! An [`ObjectRef`] is a shared handle to either a data object or a proxy. Cloning the handle
//! never copies the object, and two handles are equal only when they point at the same object.
//!
//! Every operation on a proxy is routed to its [`ProxyHandler`], so code holding an
//! `ObjectRef` cannot tell a wrapper apart from the object it wraps except by identity.
//!
//! Objects are reference counted; reference cycles between objects are not reclaimed.

use std::cell::RefCell;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

use super::proxy::{Proxy, ProxyHandler};
use super::value::{PropertyKey, Value};
use super::weak::{WeakKeyMap, WeakKeySet};

const LENGTH_KEY: &str = "length";

/// Arrays are stored densely, writes that would grow one past this many elements fail.
pub const MAX_ARRAY_LENGTH: usize = 1 << 20;

pub(crate) enum Object {
    Data(RefCell<ObjectData>),
    Proxy(Proxy),
}

/// Storage of a data object.
pub enum ObjectData {
    Plain(IndexMap<PropertyKey, Value>),
    Array(Vec<Value>),
    Map(IndexMap<Value, Value>),
    Set(IndexSet<Value>),
    WeakMap(WeakKeyMap<Value>),
    WeakSet(WeakKeySet),
    /// Any other object, e.g. a date or a function. Carries only its type tag.
    Opaque(Rc<str>),
}

/// Structural kind of an object, the equivalent of its `[object Tag]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Plain,
    Array,
    Map,
    Set,
    WeakMap,
    WeakSet,
    Opaque(Rc<str>),
}

impl Display for ObjectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectKind::Plain => f.write_str("Object"),
            ObjectKind::Array => f.write_str("Array"),
            ObjectKind::Map => f.write_str("Map"),
            ObjectKind::Set => f.write_str("Set"),
            ObjectKind::WeakMap => f.write_str("WeakMap"),
            ObjectKind::WeakSet => f.write_str("WeakSet"),
            ObjectKind::Opaque(tag) => f.write_str(tag),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObjectError {
    #[error("Incompatible receiver. operation: {operation}, kind: {kind}")]
    IncompatibleReceiver { operation: &'static str, kind: ObjectKind },
    #[error("Invalid value used as weak collection key. key: {0}")]
    InvalidWeakKey(String),
    #[error("Invalid array length. value: {0}")]
    InvalidArrayLength(String),
    #[error("Unsupported array key. key: '{0}'")]
    UnsupportedArrayKey(String),
    #[error("Array too large. requested length: {0}")]
    ArrayTooLarge(usize),
}

/// Allocation identity of an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

#[derive(Clone)]
pub struct ObjectRef(Rc<Object>);

impl ObjectRef {
    pub fn new(data: ObjectData) -> Self {
        Self(Rc::new(Object::Data(RefCell::new(data))))
    }

    pub fn plain() -> Self {
        Self::new(ObjectData::Plain(IndexMap::new()))
    }

    pub fn plain_from<K, V>(properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<PropertyKey>,
        V: Into<Value>,
    {
        Self::new(ObjectData::Plain(
            properties
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Self::new(ObjectData::Array(elements))
    }

    pub fn map() -> Self {
        Self::new(ObjectData::Map(IndexMap::new()))
    }

    pub fn new_set() -> Self {
        Self::new(ObjectData::Set(IndexSet::new()))
    }

    pub fn weak_map() -> Self {
        Self::new(ObjectData::WeakMap(WeakKeyMap::new()))
    }

    pub fn weak_set() -> Self {
        Self::new(ObjectData::WeakSet(WeakKeySet::new()))
    }

    pub fn opaque(tag: &str) -> Self {
        Self::new(ObjectData::Opaque(Rc::from(tag)))
    }

    /// Creates a proxy over `target`; every operation on the result goes through `handler`.
    pub fn proxy(target: ObjectRef, handler: Rc<dyn ProxyHandler>) -> Self {
        Self(Rc::new(Object::Proxy(Proxy::new(target, handler))))
    }

    pub fn id(&self) -> ObjectId {
        ObjectId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    pub fn downgrade(&self) -> WeakObjectRef {
        WeakObjectRef(Rc::downgrade(&self.0))
    }

    pub fn is_proxy(&self) -> bool {
        matches!(&*self.0, Object::Proxy(_))
    }

    pub fn proxy_target(&self) -> Option<&ObjectRef> {
        match &*self.0 {
            Object::Proxy(proxy) => Some(proxy.target()),
            Object::Data(_) => None,
        }
    }

    /// Structural kind. A proxy reports the kind of the object it ultimately wraps.
    pub fn kind(&self) -> ObjectKind {
        match &*self.0 {
            Object::Data(data) => data.borrow().kind(),
            Object::Proxy(proxy) => proxy.target().kind(),
        }
    }

    pub fn type_tag(&self) -> String {
        self.kind().to_string()
    }

    pub fn get(&self, key: &PropertyKey) -> Result<Value, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow().get(key),
            Object::Proxy(proxy) => proxy.handler().get(proxy.target(), key),
        }
    }

    pub fn set(&self, key: PropertyKey, value: Value) -> Result<bool, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow_mut().set(key, value),
            Object::Proxy(proxy) => proxy.handler().set(proxy.target(), key, value),
        }
    }

    pub fn has(&self, key: &PropertyKey) -> Result<bool, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow().has(key),
            Object::Proxy(proxy) => proxy.handler().has(proxy.target(), key),
        }
    }

    pub fn delete(&self, key: &PropertyKey) -> Result<bool, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow_mut().delete(key),
            Object::Proxy(proxy) => proxy.handler().delete(proxy.target(), key),
        }
    }

    pub fn own_keys(&self) -> Result<Vec<PropertyKey>, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow().own_keys(),
            Object::Proxy(proxy) => proxy.handler().own_keys(proxy.target()),
        }
    }

    pub fn entry_get(&self, key: &Value) -> Result<Value, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow().entry_get(key),
            Object::Proxy(proxy) => proxy.handler().entry_get(proxy.target(), key),
        }
    }

    pub fn entry_has(&self, key: &Value) -> Result<bool, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow().entry_has(key),
            Object::Proxy(proxy) => proxy.handler().entry_has(proxy.target(), key),
        }
    }

    pub fn entry_set(&self, key: Value, value: Value) -> Result<bool, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow_mut().entry_set(key, value),
            Object::Proxy(proxy) => proxy.handler().entry_set(proxy.target(), key, value),
        }
    }

    /// Adds a member to a set, returns `true` if it was not already a member.
    pub fn entry_add(&self, value: Value) -> Result<bool, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow_mut().entry_add(value),
            Object::Proxy(proxy) => proxy.handler().entry_add(proxy.target(), value),
        }
    }

    pub fn entry_delete(&self, key: &Value) -> Result<bool, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow_mut().entry_delete(key),
            Object::Proxy(proxy) => proxy.handler().entry_delete(proxy.target(), key),
        }
    }

    /// Map keys or set members, in insertion order.
    pub fn entry_keys(&self) -> Result<Vec<Value>, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow().entry_keys(),
            Object::Proxy(proxy) => proxy.handler().entry_keys(proxy.target()),
        }
    }

    pub fn size(&self) -> Result<usize, ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow().size(),
            Object::Proxy(proxy) => proxy.handler().size(proxy.target()),
        }
    }

    pub fn clear(&self) -> Result<(), ObjectError> {
        match &*self.0 {
            Object::Data(data) => data.borrow_mut().clear(),
            Object::Proxy(proxy) => proxy.handler().clear(proxy.target()),
        }
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ObjectRef {}

impl Hash for ObjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state)
    }
}

impl Debug for ObjectRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // contents are not printed, objects may contain themselves
        let flavor = if self.is_proxy() { "Proxy" } else { "Object" };
        write!(f, "{}({}, {:#x})", flavor, self.kind(), self.id().0)
    }
}

/// Non-owning handle to an object.
#[derive(Clone)]
pub struct WeakObjectRef(Weak<Object>);

impl WeakObjectRef {
    pub fn upgrade(&self) -> Option<ObjectRef> {
        self.0
            .upgrade()
            .map(ObjectRef)
    }

    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    pub fn id(&self) -> ObjectId {
        ObjectId(Weak::as_ptr(&self.0) as *const () as usize)
    }
}

impl PartialEq for WeakObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for WeakObjectRef {}

impl Hash for WeakObjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state)
    }
}

impl Debug for WeakObjectRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "WeakObjectRef({:#x}, alive: {})", self.id().0, self.is_alive())
    }
}

impl ObjectData {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectData::Plain(_) => ObjectKind::Plain,
            ObjectData::Array(_) => ObjectKind::Array,
            ObjectData::Map(_) => ObjectKind::Map,
            ObjectData::Set(_) => ObjectKind::Set,
            ObjectData::WeakMap(_) => ObjectKind::WeakMap,
            ObjectData::WeakSet(_) => ObjectKind::WeakSet,
            ObjectData::Opaque(tag) => ObjectKind::Opaque(tag.clone()),
        }
    }

    fn incompatible(&self, operation: &'static str) -> ObjectError {
        ObjectError::IncompatibleReceiver {
            operation,
            kind: self.kind(),
        }
    }

    fn get(&self, key: &PropertyKey) -> Result<Value, ObjectError> {
        match self {
            ObjectData::Plain(properties) => Ok(properties
                .get(key)
                .cloned()
                .unwrap_or_default()),
            ObjectData::Array(elements) => {
                if is_length_key(key) {
                    return Ok(Value::Number(elements.len() as f64));
                }
                Ok(key
                    .as_index()
                    .and_then(|index| elements.get(index))
                    .cloned()
                    .unwrap_or_default())
            }
            _ => Err(self.incompatible("get")),
        }
    }

    fn set(&mut self, key: PropertyKey, value: Value) -> Result<bool, ObjectError> {
        match self {
            ObjectData::Plain(properties) => {
                properties.insert(key, value);
                Ok(true)
            }
            ObjectData::Array(elements) => {
                if is_length_key(&key) {
                    let length = dense_length(array_length(&value)?)?;
                    elements.resize(length, Value::Undefined);
                    return Ok(true);
                }
                let Some(index) = key.as_index() else {
                    return Err(ObjectError::UnsupportedArrayKey(key.to_string()));
                };
                if index >= elements.len() {
                    let length = index
                        .checked_add(1)
                        .ok_or(ObjectError::ArrayTooLarge(index))?;
                    elements.resize(dense_length(length)?, Value::Undefined);
                }
                elements[index] = value;
                Ok(true)
            }
            _ => Err(self.incompatible("set")),
        }
    }

    fn has(&self, key: &PropertyKey) -> Result<bool, ObjectError> {
        match self {
            ObjectData::Plain(properties) => Ok(properties.contains_key(key)),
            ObjectData::Array(elements) => Ok(is_length_key(key)
                || key
                    .as_index()
                    .is_some_and(|index| index < elements.len())),
            _ => Err(self.incompatible("has")),
        }
    }

    fn delete(&mut self, key: &PropertyKey) -> Result<bool, ObjectError> {
        match self {
            ObjectData::Plain(properties) => {
                properties.shift_remove(key);
                Ok(true)
            }
            ObjectData::Array(elements) => {
                if is_length_key(key) {
                    return Ok(false);
                }
                if let Some(element) = key
                    .as_index()
                    .and_then(|index| elements.get_mut(index))
                {
                    *element = Value::Undefined;
                }
                Ok(true)
            }
            _ => Err(self.incompatible("delete")),
        }
    }

    fn own_keys(&self) -> Result<Vec<PropertyKey>, ObjectError> {
        match self {
            ObjectData::Plain(properties) => Ok(properties.keys().cloned().collect()),
            ObjectData::Array(elements) => Ok((0..elements.len())
                .map(PropertyKey::from)
                .chain(std::iter::once(PropertyKey::string(LENGTH_KEY)))
                .collect()),
            _ => Err(self.incompatible("own_keys")),
        }
    }

    fn entry_get(&self, key: &Value) -> Result<Value, ObjectError> {
        match self {
            ObjectData::Map(entries) => Ok(entries
                .get(key)
                .cloned()
                .unwrap_or_default()),
            ObjectData::WeakMap(entries) => Ok(key
                .as_object()
                .and_then(|key| entries.get(key))
                .cloned()
                .unwrap_or_default()),
            _ => Err(self.incompatible("entry_get")),
        }
    }

    fn entry_has(&self, key: &Value) -> Result<bool, ObjectError> {
        match self {
            ObjectData::Map(entries) => Ok(entries.contains_key(key)),
            ObjectData::Set(members) => Ok(members.contains(key)),
            ObjectData::WeakMap(entries) => Ok(key
                .as_object()
                .is_some_and(|key| entries.contains(key))),
            ObjectData::WeakSet(members) => Ok(key
                .as_object()
                .is_some_and(|key| members.contains(key))),
            _ => Err(self.incompatible("entry_has")),
        }
    }

    fn entry_set(&mut self, key: Value, value: Value) -> Result<bool, ObjectError> {
        match self {
            ObjectData::Map(entries) => {
                entries.insert(key, value);
                Ok(true)
            }
            ObjectData::WeakMap(entries) => match key {
                Value::Object(key) => {
                    // values of collected keys go on every write
                    entries.sweep();
                    entries.insert(&key, value);
                    Ok(true)
                }
                key => Err(ObjectError::InvalidWeakKey(key.to_string())),
            },
            _ => Err(self.incompatible("entry_set")),
        }
    }

    fn entry_add(&mut self, value: Value) -> Result<bool, ObjectError> {
        match self {
            ObjectData::Set(members) => Ok(members.insert(value)),
            ObjectData::WeakSet(members) => match value {
                Value::Object(value) => Ok(members.insert(&value)),
                value => Err(ObjectError::InvalidWeakKey(value.to_string())),
            },
            _ => Err(self.incompatible("entry_add")),
        }
    }

    fn entry_delete(&mut self, key: &Value) -> Result<bool, ObjectError> {
        match self {
            ObjectData::Map(entries) => Ok(entries
                .shift_remove(key)
                .is_some()),
            ObjectData::Set(members) => Ok(members.shift_remove(key)),
            ObjectData::WeakMap(entries) => {
                entries.sweep();
                Ok(key
                    .as_object()
                    .and_then(|key| entries.remove(key))
                    .is_some())
            }
            ObjectData::WeakSet(members) => Ok(key
                .as_object()
                .is_some_and(|key| members.remove(key))),
            _ => Err(self.incompatible("entry_delete")),
        }
    }

    fn entry_keys(&self) -> Result<Vec<Value>, ObjectError> {
        match self {
            ObjectData::Map(entries) => Ok(entries.keys().cloned().collect()),
            ObjectData::Set(members) => Ok(members.iter().cloned().collect()),
            _ => Err(self.incompatible("entry_keys")),
        }
    }

    fn size(&self) -> Result<usize, ObjectError> {
        match self {
            ObjectData::Map(entries) => Ok(entries.len()),
            ObjectData::Set(members) => Ok(members.len()),
            _ => Err(self.incompatible("size")),
        }
    }

    fn clear(&mut self) -> Result<(), ObjectError> {
        match self {
            ObjectData::Map(entries) => entries.clear(),
            ObjectData::Set(members) => members.clear(),
            _ => return Err(self.incompatible("clear")),
        }
        Ok(())
    }
}

fn is_length_key(key: &PropertyKey) -> bool {
    matches!(key, PropertyKey::String(value) if &**value == LENGTH_KEY)
}

fn array_length(value: &Value) -> Result<usize, ObjectError> {
    match value {
        Value::Number(length) if *length >= 0.0 && length.fract() == 0.0 && *length <= u32::MAX as f64 => {
            Ok(*length as usize)
        }
        _ => Err(ObjectError::InvalidArrayLength(value.to_string())),
    }
}

fn dense_length(length: usize) -> Result<usize, ObjectError> {
    match length <= MAX_ARRAY_LENGTH {
        true => Ok(length),
        false => Err(ObjectError::ArrayTooLarge(length)),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn plain_properties() {
        let object = ObjectRef::plain_from([("n", 1)]);

        assert_eq!(object.get(&"n".into()), Ok(Value::Number(1.0)));
        assert_eq!(object.get(&"missing".into()), Ok(Value::Undefined));

        object
            .set("m".into(), Value::from("two"))
            .unwrap();
        assert_eq!(object.own_keys().unwrap(), vec![PropertyKey::from("n"), PropertyKey::from("m")]);

        assert!(object.delete(&"n".into()).unwrap());
        assert!(!object.has(&"n".into()).unwrap());
    }

    #[test]
    fn array_elements_and_length() {
        let array = ObjectRef::array(vec![Value::from(1), Value::from(2)]);

        assert_eq!(array.get(&"length".into()), Ok(Value::Number(2.0)));
        assert_eq!(array.get(&1usize.into()), Ok(Value::Number(2.0)));

        array
            .set(4usize.into(), Value::from(5))
            .unwrap();
        assert_eq!(array.get(&"length".into()), Ok(Value::Number(5.0)));
        assert_eq!(array.get(&3usize.into()), Ok(Value::Undefined));

        array
            .set("length".into(), Value::from(1))
            .unwrap();
        assert_eq!(array.own_keys().unwrap(), vec![PropertyKey::from(0usize), PropertyKey::from("length")]);
    }

    #[rstest]
    #[case(Value::from(-1))]
    #[case(Value::from(1.5))]
    #[case(Value::from("3"))]
    fn array_rejects_invalid_length(#[case] length: Value) {
        let array = ObjectRef::array(vec![]);

        assert!(matches!(
            array.set("length".into(), length),
            Err(ObjectError::InvalidArrayLength(_))
        ));
    }

    #[rstest]
    #[case("4294967294", ObjectError::ArrayTooLarge(4294967295))]
    #[case("4294967295", ObjectError::UnsupportedArrayKey("4294967295".to_string()))]
    #[case("18446744073709551615", ObjectError::UnsupportedArrayKey("18446744073709551615".to_string()))]
    fn large_array_keys_are_rejected(#[case] key: &str, #[case] expected_error: ObjectError) {
        let array = ObjectRef::array(vec![Value::from(1)]);

        assert_eq!(array.set(key.into(), Value::from(2)), Err(expected_error));
        assert_eq!(array.get(&"length".into()), Ok(Value::Number(1.0)));
    }

    #[test]
    fn array_length_is_bounded() {
        let array = ObjectRef::array(vec![]);

        assert_eq!(
            array.set("length".into(), Value::Number(u32::MAX as f64)),
            Err(ObjectError::ArrayTooLarge(u32::MAX as usize))
        );
        assert!(array
            .set(MAX_ARRAY_LENGTH.to_string().as_str().into(), Value::Null)
            .is_err());
        assert!(array
            .set((MAX_ARRAY_LENGTH - 1).into(), Value::Null)
            .is_ok());
        assert_eq!(array.get(&"length".into()), Ok(Value::Number(MAX_ARRAY_LENGTH as f64)));
    }

    #[test]
    fn map_entries() {
        let map = ObjectRef::map();
        let key = ObjectRef::plain();

        map.entry_set(Value::from(&key), Value::from("object key"))
            .unwrap();
        map.entry_set(Value::from(1), Value::from("number key"))
            .unwrap();

        assert_eq!(map.entry_get(&Value::from(&key)), Ok(Value::from("object key")));
        assert_eq!(map.entry_get(&Value::from(&ObjectRef::plain())), Ok(Value::Undefined));
        assert_eq!(map.size(), Ok(2));

        assert!(map.entry_delete(&Value::from(1)).unwrap());
        assert_eq!(map.entry_keys().unwrap(), vec![Value::from(&key)]);

        map.clear().unwrap();
        assert_eq!(map.size(), Ok(0));
    }

    #[test]
    fn set_members() {
        let set = ObjectRef::new_set();

        assert!(set.entry_add(Value::from("a")).unwrap());
        assert!(!set.entry_add(Value::from("a")).unwrap());
        assert!(set.entry_has(&Value::from("a")).unwrap());
        assert_eq!(set.size(), Ok(1));
    }

    #[test]
    fn weak_collections_require_object_keys() {
        let weak_map = ObjectRef::weak_map();
        let weak_set = ObjectRef::weak_set();

        assert!(matches!(
            weak_map.entry_set(Value::from(1), Value::Null),
            Err(ObjectError::InvalidWeakKey(_))
        ));
        assert!(matches!(
            weak_set.entry_add(Value::from("s")),
            Err(ObjectError::InvalidWeakKey(_))
        ));
        assert_eq!(weak_map.entry_has(&Value::from(1)), Ok(false));
    }

    #[test]
    fn weak_map_does_not_keep_keys_alive() {
        let weak_map = ObjectRef::weak_map();
        let key = ObjectRef::plain();
        let weak_key = key.downgrade();

        weak_map
            .entry_set(Value::from(&key), Value::from(1))
            .unwrap();
        assert!(weak_map.entry_has(&Value::from(&key)).unwrap());

        drop(key);

        assert!(!weak_key.is_alive());
    }

    #[test]
    fn weak_map_releases_values_of_collected_keys() {
        let weak_map = ObjectRef::weak_map();
        let key = ObjectRef::plain();
        let value = ObjectRef::plain();
        let weak_value = value.downgrade();
        weak_map
            .entry_set(Value::from(&key), Value::from(value))
            .unwrap();

        drop(key);
        assert!(weak_value.is_alive());

        let other = ObjectRef::plain();
        weak_map
            .entry_set(Value::from(&other), Value::Null)
            .unwrap();

        assert!(!weak_value.is_alive());
    }

    #[rstest]
    #[case(ObjectRef::map(), "get")]
    #[case(ObjectRef::opaque("Date"), "get")]
    fn keyed_access_on_non_keyed_objects(#[case] object: ObjectRef, #[case] operation: &str) {
        let result = object.get(&"key".into());

        assert!(matches!(
            result,
            Err(ObjectError::IncompatibleReceiver { operation: actual, .. }) if actual == operation
        ));
    }

    #[test]
    fn collection_access_on_plain_objects() {
        let object = ObjectRef::plain();

        assert_eq!(
            object.size(),
            Err(ObjectError::IncompatibleReceiver {
                operation: "size",
                kind: ObjectKind::Plain,
            })
        );
    }

    #[test]
    fn identity() {
        let a = ObjectRef::plain();
        let b = ObjectRef::plain();

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.downgrade().id(), a.id());
        assert_eq!(a.downgrade().upgrade(), Some(a.clone()));
    }

    #[test]
    fn type_tags() {
        assert_eq!(ObjectRef::plain().type_tag(), "Object");
        assert_eq!(ObjectRef::weak_set().type_tag(), "WeakSet");
        assert_eq!(ObjectRef::opaque("Date").type_tag(), "Date");
        assert_eq!(Value::from(ObjectRef::array(vec![])).to_string(), "[object Array]");
    }
}
