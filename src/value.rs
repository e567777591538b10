//! Dynamic attribute values
//!
//! Attributes of a [`DynObject`] hold [`Value`]s: a closed set of scalar
//! kinds, a shared list, and [`Method`] for mixed-in behavior. Cloning is
//! shallow - `List` and `Method` clone their inner `Arc`, so a value copied
//! between objects during a merge stays aliased with the original. Mutation
//! through either alias is visible through the other; this matches the
//! by-reference assignment semantics of attribute copying and is intentional.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::errors::MixResult;
use crate::object::DynObject;

/// A dynamic attribute value
///
/// ```
/// use mixable::Value;
///
/// let v = Value::from(20);
/// assert_eq!(v.as_int(), Some(20));
/// assert_eq!(v.kind(), "Int");
/// ```
#[derive(Clone)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Owned string
    Str(String),
    /// Shared list; aliases across copies
    List(Arc<RwLock<Vec<Value>>>),
    /// Mixed-in behavior; aliases across copies
    Method(Method),
}

impl Value {
    /// Create a shared list value
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(RwLock::new(items)))
    }

    /// Create a method value from a closure over the target object
    pub fn method<F>(f: F) -> Self
    where
        F: Fn(&mut DynObject) -> MixResult<()> + Send + Sync + 'static,
    {
        Value::Method(Method::new(f))
    }

    /// The kind of this value, as a short name
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::List(_) => "List",
            Value::Method(_) => "Method",
        }
    }

    /// Get the boolean, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer, if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float, if this is a `Float`
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the string, if this is a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this value is callable
    pub fn is_method(&self) -> bool {
        matches!(self, Value::Method(_))
    }

    /// Run `f` over the shared list contents, if this is a `List`
    ///
    /// The list is locked for the duration of the closure. Poisoning is
    /// absorbed; list contents carry no invariants of their own.
    pub fn with_list<R>(&self, f: impl FnOnce(&mut Vec<Value>) -> R) -> Option<R> {
        match self {
            Value::List(items) => {
                let mut guard = items.write().unwrap_or_else(PoisonError::into_inner);
                Some(f(&mut guard))
            }
            _ => None,
        }
    }

    /// Whether two values alias the same shared storage
    ///
    /// Only `List` and `Method` values can alias; scalars are owned.
    pub fn aliases(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => Arc::ptr_eq(a, b),
            (Value::Method(a), Value::Method(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                if Arc::ptr_eq(a, b) {
                    return true;
                }
                let a = a.read().unwrap_or_else(PoisonError::into_inner);
                let b = b.read().unwrap_or_else(PoisonError::into_inner);
                *a == *b
            }
            // Behavior has no structural equality; compare identity
            (Value::Method(a), Value::Method(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(i) => write!(f, "Int({i})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(items) => {
                let items = items.read().unwrap_or_else(PoisonError::into_inner);
                f.debug_tuple("List").field(&*items).finish()
            }
            Value::Method(m) => fmt::Debug::fmt(m, f),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

type MethodFn = dyn Fn(&mut DynObject) -> MixResult<()> + Send + Sync;

/// Mixed-in behavior, dispatched by attribute name
///
/// A method is a shared closure over whatever object it ends up attached to.
/// Merging copies the `Arc`, never the closure, so the same behavior can live
/// on many composites at once.
#[derive(Clone)]
pub struct Method(Arc<MethodFn>);

impl Method {
    /// Create a method from a closure over the target object
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut DynObject) -> MixResult<()> + Send + Sync + 'static,
    {
        Method(Arc::new(f))
    }

    /// Invoke the method against `target`
    pub fn invoke(&self, target: &mut DynObject) -> MixResult<()> {
        (self.0)(target)
    }

    /// Whether two methods share the same underlying closure
    pub fn ptr_eq(&self, other: &Method) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method(..)")
    }
}
