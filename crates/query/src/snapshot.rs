//! Shared immutable value holder

use serde_json::Value;

/// One owned, immutable JSON value held by an operator.
///
/// Both operator kinds embed a `Snapshot`. No operator method mutates a held
/// snapshot; transformations build a new value and wrap it in a new operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    value: Value,
}

impl Snapshot {
    /// Wrap a value.
    pub fn new(value: impl Into<Value>) -> Self {
        Snapshot {
            value: value.into(),
        }
    }

    /// Read-only view of the held value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the snapshot, yielding the held value.
    pub fn into_value(self) -> Value {
        self.value
    }
}
