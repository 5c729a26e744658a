//! Operator factory and tagged union

use crate::collection::CollectionOperator;
use crate::scalar::ScalarOperator;
use serde_json::Value;
use silt_core::{type_name, Error, Result};

/// Either operator kind, tagged by the runtime shape of the wrapped value.
///
/// [`Operator::new`] is the only place in the crate that inspects a value's
/// shape. Everything downstream matches on the tag or narrows with the
/// `into_*` helpers instead of re-testing the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    /// A single value: object, string, number, boolean or null
    Scalar(ScalarOperator),
    /// An array of items
    Collection(CollectionOperator),
}

impl Operator {
    /// Wrap a value in the operator kind matching its runtime shape.
    ///
    /// Arrays become collections, everything else becomes a scalar. The
    /// constructor is total; the per-kind gates cannot fire here.
    pub fn new(value: impl Into<Value>) -> Operator {
        match value.into() {
            Value::Array(items) => Operator::Collection(CollectionOperator::from_items(items)),
            other => Operator::Scalar(ScalarOperator::from_checked(other)),
        }
    }

    /// Read-only view of the held snapshot.
    pub fn value(&self) -> &Value {
        match self {
            Operator::Scalar(op) => op.value(),
            Operator::Collection(op) => op.value(),
        }
    }

    /// Consume the operator, yielding the held snapshot.
    pub fn into_value(self) -> Value {
        match self {
            Operator::Scalar(op) => op.into_value(),
            Operator::Collection(op) => op.into_value(),
        }
    }

    /// Whether this wraps a non-array value.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Operator::Scalar(_))
    }

    /// Whether this wraps an array.
    pub fn is_collection(&self) -> bool {
        matches!(self, Operator::Collection(_))
    }

    /// Borrow the scalar operator, if that is the held kind.
    pub fn as_scalar(&self) -> Option<&ScalarOperator> {
        match self {
            Operator::Scalar(op) => Some(op),
            Operator::Collection(_) => None,
        }
    }

    /// Borrow the collection operator, if that is the held kind.
    pub fn as_collection(&self) -> Option<&CollectionOperator> {
        match self {
            Operator::Collection(op) => Some(op),
            Operator::Scalar(_) => None,
        }
    }

    /// Narrow to the scalar kind, failing with `TypeMismatch` on a
    /// collection.
    pub fn into_scalar(self) -> Result<ScalarOperator> {
        match self {
            Operator::Scalar(op) => Ok(op),
            Operator::Collection(_) => Err(Error::TypeMismatch {
                expected: "scalar",
                found: "array",
            }),
        }
    }

    /// Narrow to the collection kind, failing with `TypeMismatch` on a
    /// scalar.
    pub fn into_collection(self) -> Result<CollectionOperator> {
        match self {
            Operator::Collection(op) => Ok(op),
            Operator::Scalar(op) => Err(Error::TypeMismatch {
                expected: "array",
                found: type_name(op.value()),
            }),
        }
    }
}
