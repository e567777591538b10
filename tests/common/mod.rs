//! Shared collaborator fixtures for composition tests
//!
//! These are opaque domain objects as far as the core is concerned; it only
//! ever sees their attribute sets and registered names.

use mixable::{DynObject, IndexMap, Mixin, Value};

/// Plain attribute owner: `name`, `sex`
pub struct AttrOwner1;

impl Mixin for AttrOwner1 {
    const NAME: &'static str = "AttrOwner1";

    fn attributes(&self) -> IndexMap<String, Value> {
        let mut attrs = IndexMap::new();
        attrs.insert("name".to_string(), Value::from("AttrOwner1"));
        attrs.insert("sex".to_string(), Value::from("male"));
        attrs
    }
}

/// Plain attribute owner: `name`, `age`
pub struct AttrOwner2;

impl Mixin for AttrOwner2 {
    const NAME: &'static str = "AttrOwner2";

    fn attributes(&self) -> IndexMap<String, Value> {
        let mut attrs = IndexMap::new();
        attrs.insert("name".to_string(), Value::from("AttrOwner2"));
        attrs.insert("age".to_string(), Value::from(20));
        attrs
    }
}

/// Behavior mixin: `x` starts at 5, `move` increments it
pub struct Movable;

impl Mixin for Movable {
    const NAME: &'static str = "Movable";

    fn attributes(&self) -> IndexMap<String, Value> {
        let mut attrs = IndexMap::new();
        attrs.insert("x".to_string(), Value::from(5));
        attrs.insert(
            "move".to_string(),
            Value::method(|obj: &mut DynObject| {
                let x = obj.int_attr("x")?;
                obj.set_attr("x", x + 1);
                Ok(())
            }),
        );
        attrs
    }
}

/// Behavior mixin: `h` starts at 10, `jump` increments it
pub struct Jumpable;

impl Mixin for Jumpable {
    const NAME: &'static str = "Jumpable";

    fn attributes(&self) -> IndexMap<String, Value> {
        let mut attrs = IndexMap::new();
        attrs.insert("h".to_string(), Value::from(10));
        attrs.insert(
            "jump".to_string(),
            Value::method(|obj: &mut DynObject| {
                let h = obj.int_attr("h")?;
                obj.set_attr("h", h + 1);
                Ok(())
            }),
        );
        attrs
    }
}

/// Registry contents of `obj`, in order
pub fn registry_names(obj: &DynObject) -> Vec<String> {
    obj.registry()
        .map(|registry| registry.iter().map(str::to_owned).collect())
        .unwrap_or_default()
}
