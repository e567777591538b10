//! The composition operations: wrapping, attribute copying, and merging

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::errors::MixResult;
use crate::identity::TypeRef;
use crate::object::{DynObject, Mixin};
use crate::registry::MixinRegistry;
use crate::value::Value;

/// The marker mixin whose name seeds every fresh registry
///
/// `Mixable` is the minimal capability: carrying a registry at all. Wrapping
/// an object records this sentinel name first, so `["Mixable", OwnType, ...]`
/// is the shape of every untampered registry. The marker itself is throwaway;
/// only its name survives in the registry.
pub struct Mixable;

impl Mixin for Mixable {
    const NAME: &'static str = "Mixable";

    fn attributes(&self) -> IndexMap<String, Value> {
        IndexMap::new()
    }
}

/// Whether `obj` carries a working mixin registry
///
/// A registry must be present *and* still answer for the [`Mixable`]
/// sentinel; a cleared registry no longer counts as working, so a later
/// [`wrap`] re-promotes the object with a fresh one.
pub fn is_mixable(obj: &DynObject) -> bool {
    obj.registry().is_some() && obj.is_instance(Mixable::NAME)
}

/// Copy every attribute of `source` onto `dest`, first writer wins
///
/// Attributes `dest` already owns are skipped, never overwritten; the value
/// introduced first stays, no matter how many later sources carry the same
/// name. Assignment is a shallow clone: reference-typed values
/// ([`Value::List`], [`Value::Method`]) stay shared between source and
/// destination, so mutation through one alias is visible through the other.
/// Registries are untouched.
///
/// ```
/// use mixable::{copy_attributes, DynObject, Value};
///
/// let mut dest = DynObject::new("AttrOwner1")
///     .with_attr("name", "AttrOwner1")
///     .with_attr("sex", "male");
/// let source = DynObject::new("AttrOwner2")
///     .with_attr("name", "AttrOwner2")
///     .with_attr("age", 20);
///
/// copy_attributes(&mut dest, &source);
/// assert_eq!(dest.attr("name").and_then(Value::as_str), Some("AttrOwner1"));
/// assert_eq!(dest.attr("age").and_then(Value::as_int), Some(20));
/// ```
pub fn copy_attributes<'a>(dest: &'a mut DynObject, source: &DynObject) -> &'a mut DynObject {
    for (name, value) in source.attrs() {
        if dest.has_attr(name) {
            trace!(attr = name, "attribute exists, keeping first writer");
            continue;
        }
        dest.set_attr(name, value.clone());
    }
    dest
}

/// Promote `obj` to a composite, idempotently
///
/// If `obj` is already mixable it is returned unchanged - same reference, no
/// mutation. Otherwise a fresh registry is attached, seeded with the
/// [`Mixable`] sentinel followed by `obj`'s own nominal type name.
///
/// The registry lives in a dedicated slot on [`DynObject`], so no attribute
/// of `obj` can collide with it; the promotion either succeeds completely or
/// fails loudly, never silently producing a non-functioning composite.
///
/// # Errors
///
/// [`MixError::UnresolvableType`](crate::MixError::UnresolvableType) if
/// `obj`'s own type name is blank. Nothing is attached in that case.
pub fn wrap(obj: &mut DynObject) -> MixResult<&mut DynObject> {
    if is_mixable(obj) {
        trace!(object = obj.type_name(), "already mixable, wrap is a no-op");
        return Ok(obj);
    }
    // Validate the own name before attaching anything
    let own_name = TypeRef::from(&*obj).resolve()?.to_owned();

    let mut registry = MixinRegistry::with_sentinel();
    registry.add_instance(own_name.as_str())?;
    obj.attach_registry(registry);

    debug!(object = %own_name, "promoted to mixable");
    Ok(obj)
}

/// Merge `source` into `dest`: the central composition operation
///
/// In order:
///
/// 1. `dest` is wrapped if it is not already mixable.
/// 2. If `source` is mixable, every name in its registry is folded into
///    `dest`'s registry - an idempotent union that keeps `dest`'s existing
///    order and appends new names in `source`'s order.
/// 3. `source`'s own nominal type name is registered (a no-op when step 2
///    already carried it).
/// 4. All of `source`'s attributes are copied onto `dest` via
///    [`copy_attributes`], first writer wins.
///
/// Returns `dest` with its identity preserved; `source` is never mutated. A
/// composite's capability set only ever grows - no merge sequence can remove
/// a recorded name.
///
/// # Errors
///
/// [`MixError::UnresolvableType`](crate::MixError::UnresolvableType) if
/// either object's own type name is blank.
pub fn merge<'a>(dest: &'a mut DynObject, source: &DynObject) -> MixResult<&'a mut DynObject> {
    wrap(dest)?;

    // Fold the source's accumulated capabilities before its own name, so a
    // pre-composed source transfers its history in order
    if is_mixable(source) {
        if let Some(registry) = source.registry() {
            for name in registry.iter() {
                dest.add_instance(name)?;
            }
        }
    }
    dest.add_instance(TypeRef::from(source))?;

    debug!(
        dest = dest.type_name(),
        source = source.type_name(),
        "merged mixin"
    );
    Ok(copy_attributes(dest, source))
}
