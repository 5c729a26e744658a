//! Operator over a single (non-array) JSON value

use crate::snapshot::Snapshot;
use serde_json::{Map, Value};
use silt_core::{Error, Result};

/// Operator over one scalar document value: an object, string, number,
/// boolean or null. Arrays are rejected at construction; use
/// [`Operator::new`](crate::Operator::new) when the shape is not known ahead
/// of time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarOperator {
    snapshot: Snapshot,
}

impl ScalarOperator {
    /// Wrap a scalar value. Fails with `TypeMismatch` when handed an array.
    pub fn new(value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        if value.is_array() {
            return Err(Error::TypeMismatch {
                expected: "scalar",
                found: "array",
            });
        }
        Ok(ScalarOperator {
            snapshot: Snapshot::new(value),
        })
    }

    /// Wrap a value already known not to be an array.
    pub(crate) fn from_checked(value: Value) -> Self {
        ScalarOperator {
            snapshot: Snapshot::new(value),
        }
    }

    /// Read-only view of the held snapshot.
    pub fn value(&self) -> &Value {
        self.snapshot.value()
    }

    /// Consume the operator, yielding the held snapshot.
    pub fn into_value(self) -> Value {
        self.snapshot.into_value()
    }

    /// Apply `f` to the snapshot and wrap the result in a new operator.
    ///
    /// `update` never widens back to a collection: a transform that returns
    /// an array fails with `TypeMismatch`, the same gate as [`Self::new`].
    pub fn update(&self, f: impl FnOnce(&Value) -> Value) -> Result<ScalarOperator> {
        ScalarOperator::new(f(self.value()))
    }

    /// Project the snapshot onto the listed fields.
    ///
    /// The result holds a new object containing exactly those listed keys
    /// present in the source object. Presence is what counts: `0`, `""`,
    /// `false` and `null` values survive projection. Picking from a
    /// non-object snapshot yields an empty object.
    pub fn pick(&self, fields: &[&str]) -> ScalarOperator {
        ScalarOperator {
            snapshot: Snapshot::new(pick_fields(self.value(), fields)),
        }
    }
}

/// Copy the listed fields out of `value` into a fresh object, skipping
/// fields the source does not have.
pub(crate) fn pick_fields(value: &Value, fields: &[&str]) -> Value {
    let mut picked = Map::new();
    if let Value::Object(obj) = value {
        for field in fields {
            if let Some(v) = obj.get(*field) {
                picked.insert((*field).to_string(), v.clone());
            }
        }
    }
    Value::Object(picked)
}
