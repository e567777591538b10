//! Type identity resolution for composition queries
//!
//! Rust has no ambient runtime facility that reports a nominal type name for an
//! arbitrary value, so composable types carry an explicit registered name
//! instead: every [`DynObject`] is constructed with one, and every typed
//! [`Mixin`] declares one. [`TypeRef`] is the uniform query over both forms -
//! a literal name, a type reference, or an instance all resolve to the same
//! canonical name string.

use crate::errors::{MixError, MixResult};
use crate::object::{DynObject, Mixin};

/// A composition query: either a literal type name or a dynamic object
///
/// Resolution is uniform across the three ways a caller can refer to a type:
///
/// ```
/// use mixable::{DynObject, TypeRef};
///
/// let obj = DynObject::new("Jumpable");
///
/// // Literal name and instance resolve identically
/// assert_eq!(TypeRef::from("Jumpable").resolve().unwrap(), "Jumpable");
/// assert_eq!(TypeRef::from(&obj).resolve().unwrap(), "Jumpable");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum TypeRef<'a> {
    /// A literal type name, used verbatim
    Name(&'a str),
    /// A dynamic object, resolved to its nominal type name
    Value(&'a DynObject),
}

impl<'a> TypeRef<'a> {
    /// Query by type reference for a typed mixin
    pub fn of<M: Mixin>() -> Self {
        TypeRef::Name(M::NAME)
    }

    /// Resolve the query to a canonical type name
    ///
    /// # Errors
    ///
    /// Returns [`MixError::UnresolvableType`] if the name is blank. A blank
    /// name means the value's nominal type cannot be determined; the original
    /// design left this undefined, here it is rejected explicitly.
    pub fn resolve(&self) -> MixResult<&'a str> {
        let name = match *self {
            TypeRef::Name(name) => name,
            TypeRef::Value(obj) => obj.type_name(),
        };
        if name.trim().is_empty() {
            return Err(MixError::unresolvable("blank type name"));
        }
        Ok(name)
    }
}

impl<'a> From<&'a str> for TypeRef<'a> {
    fn from(name: &'a str) -> Self {
        TypeRef::Name(name)
    }
}

impl<'a> From<&'a String> for TypeRef<'a> {
    fn from(name: &'a String) -> Self {
        TypeRef::Name(name)
    }
}

impl<'a> From<&'a DynObject> for TypeRef<'a> {
    fn from(obj: &'a DynObject) -> Self {
        TypeRef::Value(obj)
    }
}
