//! # Mixable
//!
//! Runtime mixin composition: merge state and behavior between dynamic
//! objects, and ask the result what it has become.
//!
//! Given any two [`DynObject`]s, [`merge`] folds the source into the
//! destination in place. The destination ends up with the union of both
//! objects' attributes (first writer wins on collisions) and a
//! [`MixinRegistry`]: an ordered, deduplicated record of every capability it
//! has absorbed, queryable at runtime through [`DynObject::is_instance`].
//!
//! - **Identity is preserved**: every operation mutates the destination
//!   through `&mut` and returns the same reference; nothing is ever copied
//!   into a new object.
//! - **Capabilities only grow**: the registry has no remove operation, and
//!   re-merging a type is a no-op in the registry.
//! - **Values alias**: reference-typed attribute values stay shared between
//!   source and destination after a merge, deliberately.
//! - **Behavior travels**: methods merged from a source dispatch against the
//!   destination via [`DynObject::call`].
//!
//! ## Example
//!
//! ```
//! use mixable::{wrap, DynObject, Value};
//!
//! let mut player = DynObject::new("Player").with_attr("name", "p1");
//! wrap(&mut player).unwrap();
//!
//! let jumpable = DynObject::new("Jumpable")
//!     .with_attr("h", 10)
//!     .with_attr("jump", Value::method(|obj| {
//!         let h = obj.int_attr("h")?;
//!         obj.set_attr("h", h + 1);
//!         Ok(())
//!     }));
//!
//! player.mix(&jumpable).unwrap();
//! player.call("jump").unwrap();
//!
//! assert!(player.is_instance("Jumpable"));
//! assert_eq!(player.int_attr("h"), Ok(11));
//! let names: Vec<&str> = player.registry().unwrap().iter().collect();
//! assert_eq!(names, vec!["Mixable", "Player", "Jumpable"]);
//! ```
//!
//! ## Concurrency
//!
//! Purely synchronous and in-memory. There is no internal locking; merging
//! requires `&mut DynObject`, so concurrent merges into one destination are
//! ruled out at compile time rather than by convention.

#![warn(missing_docs)]

mod errors;
mod identity;
mod mixable;
mod object;
mod registry;
mod value;

pub use errors::{MixError, MixResult};
pub use identity::TypeRef;
pub use mixable::{copy_attributes, is_mixable, merge, wrap, Mixable};
pub use object::{DynObject, Mixin};
pub use registry::MixinRegistry;
pub use value::{Method, Value};

// Re-exported for implementors of [`Mixin::attributes`]
pub use indexmap::IndexMap;
