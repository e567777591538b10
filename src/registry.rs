//! The mixin registry attached to composite objects

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::errors::MixResult;
use crate::identity::TypeRef;
use crate::mixable::Mixable;
use crate::object::Mixin;

/// Ordered, deduplicated record of every type name merged into a composite
///
/// Names are unique by value and kept in first-seen merge order. The
/// composition path only ever appends; there is no remove operation, so a
/// composite's capability set grows monotonically. Each registry is owned
/// exclusively by one composite object.
///
/// Serializes as a plain array of names, useful for diagnostics:
///
/// ```
/// use mixable::MixinRegistry;
///
/// let mut registry = MixinRegistry::with_sentinel();
/// registry.add_instance("AttrOwner1").unwrap();
/// let snapshot = serde_json::to_string(&registry).unwrap();
/// assert_eq!(snapshot, r#"["Mixable","AttrOwner1"]"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MixinRegistry {
    names: IndexSet<String>,
}

impl MixinRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh registry seeded with the [`Mixable`] sentinel name
    ///
    /// Every registry attached by wrapping starts this way, so the sentinel
    /// is always the first entry of an untampered composite.
    pub fn with_sentinel() -> Self {
        let mut registry = Self::new();
        registry.names.insert(Mixable::NAME.to_owned());
        registry
    }

    /// Record the query's type name, if not already present
    ///
    /// Dedup is by value; the first-seen position is kept, so re-adding an
    /// existing name is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`MixError::UnresolvableType`](crate::MixError::UnresolvableType)
    /// if the query's name is blank.
    pub fn add_instance<'q>(&mut self, query: impl Into<TypeRef<'q>>) -> MixResult<()> {
        let name = query.into().resolve()?;
        if !self.names.contains(name) {
            self.names.insert(name.to_owned());
        }
        Ok(())
    }

    /// Whether the given name has been recorded
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate recorded names in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of recorded names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names are recorded
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Remove every recorded name
    ///
    /// Not part of the composition path - exists so external tampering can be
    /// modeled and tested. A composite with a cleared registry still answers
    /// [`is_instance`](crate::DynObject::is_instance) for its own nominal type
    /// name via the fallback check.
    pub fn clear(&mut self) {
        self.names.clear();
    }
}
