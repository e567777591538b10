//! Dynamic objects: the attribute-carrying values that composition operates on

use indexmap::IndexMap;
use tracing::trace;

use crate::errors::{MixError, MixResult};
use crate::identity::TypeRef;
use crate::mixable;
use crate::registry::MixinRegistry;
use crate::value::Value;

/// A dynamic object: a nominal type name plus an ordered attribute table
///
/// A `DynObject` starts as a plain aggregate of named [`Value`]s. Promoting it
/// with [`wrap`](crate::wrap) (directly, or implicitly via
/// [`merge`](crate::merge)) attaches a [`MixinRegistry`], turning it into a
/// composite that records every capability merged into it. All composition
/// operations mutate the object in place through `&mut`; no operation ever
/// produces a new object, so identity is preserved throughout.
///
/// The registry lives in a dedicated slot, not in the attribute table, so a
/// user attribute can never collide with it or shadow it.
///
/// No internal locking is provided. Mutation requires `&mut`, which makes the
/// external-serialization requirement for concurrent merges a compile-time
/// guarantee rather than a documented convention.
///
/// # Examples
///
/// ```
/// use mixable::{merge, DynObject, Value};
///
/// let mut player = DynObject::new("Player").with_attr("name", "p1");
/// let jumper = DynObject::new("Jumpable").with_attr("h", 10);
///
/// merge(&mut player, &jumper).unwrap();
/// assert!(player.is_instance("Jumpable"));
/// assert_eq!(player.attr("h").and_then(Value::as_int), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynObject {
    type_name: String,
    attrs: IndexMap<String, Value>,
    registry: Option<MixinRegistry>,
}

impl DynObject {
    /// Create a plain object with the given nominal type name
    ///
    /// The name stands in for what a reflection facility would report for the
    /// object's type; it must be non-blank by the time the object takes part
    /// in composition, or [`wrap`](crate::wrap) and [`merge`](crate::merge)
    /// will reject it.
    pub fn new(type_name: impl Into<String>) -> Self {
        DynObject {
            type_name: type_name.into(),
            attrs: IndexMap::new(),
            registry: None,
        }
    }

    /// Builder-style attribute assignment
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// The object's own nominal type name
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get an attribute by name
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Assign an attribute, overwriting any existing value
    ///
    /// Direct assignment always overwrites; the first-writer-wins policy
    /// belongs to [`copy_attributes`](crate::copy_attributes) alone.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Whether an attribute of the given name exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Iterate attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether the object has no attributes
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Get an integer attribute, erroring on absence or kind mismatch
    ///
    /// Convenience for method bodies that read counters off their target.
    pub fn int_attr(&self, name: &str) -> MixResult<i64> {
        let value = self.attr(name).ok_or_else(|| MixError::AttributeNotFound {
            name: name.to_owned(),
        })?;
        value.as_int().ok_or_else(|| MixError::TypeMismatch {
            attr: name.to_owned(),
            expected: "Int",
        })
    }

    /// The attached mixin registry, if the object has been promoted
    pub fn registry(&self) -> Option<&MixinRegistry> {
        self.registry.as_ref()
    }

    /// Mutable access to the attached mixin registry
    pub fn registry_mut(&mut self) -> Option<&mut MixinRegistry> {
        self.registry.as_mut()
    }

    pub(crate) fn attach_registry(&mut self, registry: MixinRegistry) {
        self.registry = Some(registry);
    }

    /// Whether this object carries the queried capability
    ///
    /// Resolves the query to a name and checks the registry, falling back to
    /// the object's own nominal type name. The fallback holds even when the
    /// registry has been cleared or was never attached, so an object always
    /// answers `true` for its own type. Unresolvable queries are `false`: a
    /// blank name can never have been registered.
    pub fn is_instance<'q>(&self, query: impl Into<TypeRef<'q>>) -> bool {
        let Ok(name) = query.into().resolve() else {
            return false;
        };
        self.registry
            .as_ref()
            .map_or(false, |registry| registry.contains(name))
            || self.type_name == name
    }

    /// Record the query's type name in this object's registry
    ///
    /// # Errors
    ///
    /// [`MixError::NotMixable`] if no registry is attached,
    /// [`MixError::UnresolvableType`] if the query's name is blank.
    pub fn add_instance<'q>(&mut self, query: impl Into<TypeRef<'q>>) -> MixResult<()> {
        let query = query.into();
        match self.registry.as_mut() {
            Some(registry) => registry.add_instance(query),
            None => Err(MixError::NotMixable {
                object: self.type_name.clone(),
            }),
        }
    }

    /// Mix a source object into `self`, returning `self` for chaining
    ///
    /// Instance-level sugar for [`merge(self, source)`](crate::merge).
    ///
    /// ```
    /// use mixable::{wrap, DynObject};
    ///
    /// let mut player = DynObject::new("Player");
    /// wrap(&mut player).unwrap();
    /// player
    ///     .mix(&DynObject::new("Jumpable").with_attr("h", 10))
    ///     .unwrap()
    ///     .mix(&DynObject::new("Movable").with_attr("x", 5))
    ///     .unwrap();
    /// assert!(player.is_instance("Jumpable") && player.is_instance("Movable"));
    /// ```
    pub fn mix(&mut self, source: &DynObject) -> MixResult<&mut Self> {
        mixable::merge(self, source)
    }

    /// Invoke a mixed-in method by attribute name
    ///
    /// The method runs against `self`, so behavior merged from a source reads
    /// and writes this object's attributes.
    ///
    /// # Errors
    ///
    /// [`MixError::MethodNotFound`] if no such attribute exists,
    /// [`MixError::NotCallable`] if the attribute is not a method, plus
    /// whatever the method itself returns.
    pub fn call(&mut self, name: &str) -> MixResult<()> {
        let method = match self.attr(name) {
            Some(Value::Method(method)) => method.clone(),
            Some(other) => {
                trace!(attr = name, kind = other.kind(), "call on non-method");
                return Err(MixError::NotCallable {
                    name: name.to_owned(),
                });
            }
            None => {
                return Err(MixError::MethodNotFound {
                    object: self.type_name.clone(),
                    name: name.to_owned(),
                })
            }
        };
        method.invoke(self)
    }
}

/// A typed Rust struct that can enter the dynamic composition world
///
/// Since Rust has no ambient runtime type-name reflection, composable types
/// declare their registered name explicitly and describe their attributes;
/// [`to_object`](Mixin::to_object) produces the [`DynObject`] rendition that
/// [`merge`](crate::merge) consumes.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use mixable::{DynObject, Mixin, Value};
///
/// struct Jumpable {
///     h: i64,
/// }
///
/// impl Mixin for Jumpable {
///     const NAME: &'static str = "Jumpable";
///
///     fn attributes(&self) -> IndexMap<String, Value> {
///         let mut attrs = IndexMap::new();
///         attrs.insert("h".to_string(), Value::from(self.h));
///         attrs
///     }
/// }
///
/// let obj = Jumpable { h: 10 }.to_object();
/// assert_eq!(obj.type_name(), "Jumpable");
/// ```
pub trait Mixin {
    /// The registered type name recorded when this mixin is merged
    const NAME: &'static str;

    /// The mixin's attributes, in declaration order
    fn attributes(&self) -> IndexMap<String, Value>;

    /// Produce the dynamic-object rendition of this mixin
    fn to_object(&self) -> DynObject {
        DynObject {
            type_name: Self::NAME.to_owned(),
            attrs: self.attributes(),
            registry: None,
        }
    }
}
