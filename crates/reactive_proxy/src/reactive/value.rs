use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::object::ObjectRef;

/// A dynamically-typed value.
///
/// Objects and symbols have identity: two handles are equal only when they refer to the same
/// allocation. Everything else compares by value.
///
/// Equality (and hashing) follows `SameValueZero`, so `NaN` equals `NaN` and `+0` equals `-0`.
/// This makes `Value` usable as a map or set key.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Symbol(Symbol),
    Object(ObjectRef),
}

impl Value {
    pub fn string(value: &str) -> Self {
        Self::String(Rc::from(value))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(value) => *value,
            Value::Number(value) => !(value.is_nan() || *value == 0.0),
            Value::String(value) => !value.is_empty(),
            Value::Symbol(_) | Value::Object(_) => true,
        }
    }

    /// Identity comparison, `Object.is` style: unlike `==`, `+0` and `-0` differ.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                (a.is_nan() && b.is_nan()) || (a == b && a.is_sign_negative() == b.is_sign_negative())
            }
            _ => self == other,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Undefined | Value::Null => {}
            Value::Bool(value) => value.hash(state),
            Value::Number(value) => {
                // must agree with `eq`: one bit pattern for NaN, one for zero
                let bits = if value.is_nan() {
                    f64::NAN.to_bits()
                } else if *value == 0.0 {
                    0
                } else {
                    value.to_bits()
                };
                bits.hash(state)
            }
            Value::String(value) => value.hash(state),
            Value::Symbol(value) => value.hash(state),
            Value::Object(value) => value.id().hash(state),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Number(value) => format_number(*value, f),
            Value::String(value) => f.write_str(value),
            Value::Symbol(symbol) => write!(f, "{}", symbol),
            Value::Object(object) => write!(f, "[object {}]", object.type_tag()),
        }
    }
}

fn format_number(value: f64, f: &mut Formatter<'_>) -> std::fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{}", value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Rc::from(value))
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Value::Object(value)
    }
}

impl From<&ObjectRef> for Value {
    fn from(value: &ObjectRef) -> Self {
        Value::Object(value.clone())
    }
}

/// A unique, identity-compared key. Two symbols with the same description are still distinct.
#[derive(Clone)]
pub struct Symbol(Rc<str>);

impl Symbol {
    pub fn new(description: &str) -> Self {
        Self(Rc::from(description))
    }

    pub fn description(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as *const u8 as usize).hash(state)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Key of a plain object property. Array elements use their decimal index as a string key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(Rc<str>),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn string(value: &str) -> Self {
        Self::String(Rc::from(value))
    }

    /// Parses the key as an array index, `"01"` and `"-1"` are not indices and neither is
    /// anything above `2^32 - 2`.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PropertyKey::String(value) => {
                if value.is_empty() || (value.len() > 1 && value.starts_with('0')) {
                    return None;
                }
                if !value.bytes().all(|byte| byte.is_ascii_digit()) {
                    return None;
                }
                value
                    .parse::<u32>()
                    .ok()
                    .filter(|index| *index < u32::MAX)
                    .map(|index| index as usize)
            }
            PropertyKey::Symbol(_) => None,
        }
    }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyKey::String(value) => f.write_str(value),
            PropertyKey::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(value: &str) -> Self {
        PropertyKey::string(value)
    }
}

impl From<usize> for PropertyKey {
    fn from(value: usize) -> Self {
        PropertyKey::String(Rc::from(value.to_string()))
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl From<PropertyKey> for Value {
    fn from(value: PropertyKey) -> Self {
        match value {
            PropertyKey::String(value) => Value::String(value),
            PropertyKey::Symbol(symbol) => Value::Symbol(symbol),
        }
    }
}
