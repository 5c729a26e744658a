//! Collection predicates
//!
//! A predicate selects items out of a collection. Callers supply either a
//! callback or a partial-object pattern; the form is resolved once into a
//! [`Predicate`] at the call boundary, and matching loops only ever see the
//! resolved enum.

use serde_json::{json, Value};
use std::fmt;

/// A filter over collection items
///
/// Built from a closure via [`Predicate::callback`], or from a JSON value via
/// [`Predicate::pattern`] / `From<Value>`. Pattern matching is structural:
/// every field of an object pattern must deep-equal the corresponding item
/// field, extra item fields are ignored. A non-object pattern matches by
/// whole-value equality. An object pattern never matches a non-object item.
pub enum Predicate {
    /// Partial-object pattern, matched structurally
    Pattern(Value),
    /// Arbitrary test over the item
    Callback(Box<dyn Fn(&Value) -> bool>),
}

impl Predicate {
    /// Build a pattern predicate from a JSON value.
    pub fn pattern(pattern: impl Into<Value>) -> Self {
        Predicate::Pattern(pattern.into())
    }

    /// Build a callback predicate from a closure.
    pub fn callback(f: impl Fn(&Value) -> bool + 'static) -> Self {
        Predicate::Callback(Box::new(f))
    }

    /// Build the pattern `{"id": id}` used by the `find_by_id` family.
    pub fn by_id(id: impl Into<Value>) -> Self {
        Predicate::Pattern(json!({ "id": id.into() }))
    }

    /// Test one item against the predicate.
    pub fn matches(&self, item: &Value) -> bool {
        match self {
            Predicate::Callback(f) => f(item),
            Predicate::Pattern(pattern) => match pattern {
                Value::Object(fields) => match item {
                    Value::Object(obj) => fields.iter().all(|(k, v)| obj.get(k) == Some(v)),
                    _ => false,
                },
                other => other == item,
            },
        }
    }
}

impl From<Value> for Predicate {
    fn from(pattern: Value) -> Self {
        Predicate::Pattern(pattern)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Pattern(v) => f.debug_tuple("Pattern").field(v).finish(),
            Predicate::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}
