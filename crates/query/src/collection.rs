//! Operator over a JSON array

use crate::operator::Operator;
use crate::scalar::pick_fields;
use crate::snapshot::Snapshot;
use crate::sort::{self, SortSpec};
use serde_json::Value;
use silt_core::{type_name, Error, Predicate, Result};

/// Operator over one array snapshot.
///
/// Every method is a pure function from the held snapshot and its arguments
/// to a new operator; the receiver is untouched and stays usable after the
/// call. Items are matched with [`Predicate`]s, ordered with
/// [`SortSpec`]s, and projected with field lists.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionOperator {
    snapshot: Snapshot,
}

impl CollectionOperator {
    /// Wrap an array value. Fails with `TypeMismatch` for anything else.
    pub fn new(value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        if !value.is_array() {
            return Err(Error::TypeMismatch {
                expected: "array",
                found: type_name(&value),
            });
        }
        Ok(CollectionOperator {
            snapshot: Snapshot::new(value),
        })
    }

    /// Wrap items without re-running the shape gate.
    pub(crate) fn from_items(items: Vec<Value>) -> Self {
        CollectionOperator {
            snapshot: Snapshot::new(Value::Array(items)),
        }
    }

    /// The held items. The snapshot is an array by construction.
    fn items(&self) -> &[Value] {
        match self.snapshot.value() {
            Value::Array(items) => items,
            _ => &[],
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

    /// Number of items in the collection.
    pub fn size(&self) -> usize {
        self.items().len()
    }

    /// New collection with `item` appended.
    pub fn push(&self, item: impl Into<Value>) -> CollectionOperator {
        let mut items = self.items().to_vec();
        items.push(item.into());
        CollectionOperator::from_items(items)
    }

    /// First item matching the predicate, dispatched through the operator
    /// factory: a matched array comes back as a collection, anything else as
    /// a scalar. No match yields a scalar holding null.
    pub fn find_one(&self, predicate: impl Into<Predicate>) -> Operator {
        let predicate = predicate.into();
        match self.items().iter().find(|item| predicate.matches(item)) {
            Some(item) => Operator::new(item.clone()),
            None => Operator::new(Value::Null),
        }
    }

    /// All items matching the predicate, in their original order.
    pub fn find_all(&self, predicate: impl Into<Predicate>) -> CollectionOperator {
        let predicate = predicate.into();
        CollectionOperator::from_items(
            self.items()
                .iter()
                .filter(|item| predicate.matches(item))
                .cloned()
                .collect(),
        )
    }

    /// New collection of the same length where every item matching the
    /// predicate is replaced by `f(item)`. Non-matching items are copied
    /// unchanged.
    pub fn find_all_and_update(
        &self,
        predicate: impl Into<Predicate>,
        f: impl Fn(&Value) -> Value,
    ) -> CollectionOperator {
        let predicate = predicate.into();
        CollectionOperator::from_items(
            self.items()
                .iter()
                .map(|item| {
                    if predicate.matches(item) {
                        f(item)
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        )
    }

    /// New collection with every item matching the predicate removed.
    pub fn find_all_and_remove(&self, predicate: impl Into<Predicate>) -> CollectionOperator {
        let predicate = predicate.into();
        CollectionOperator::from_items(
            self.items()
                .iter()
                .filter(|item| !predicate.matches(item))
                .cloned()
                .collect(),
        )
    }

    /// First item whose `id` field equals `id`. Same dispatch as
    /// [`Self::find_one`].
    pub fn find_by_id(&self, id: impl Into<Value>) -> Operator {
        self.find_one(Predicate::by_id(id))
    }

    /// New collection without the items whose `id` field equals `id`.
    pub fn find_by_id_and_remove(&self, id: impl Into<Value>) -> CollectionOperator {
        self.find_all_and_remove(Predicate::by_id(id))
    }

    /// New collection where items whose `id` field equals `id` are replaced
    /// by `f(item)`.
    pub fn find_by_id_and_update(
        &self,
        id: impl Into<Value>,
        f: impl Fn(&Value) -> Value,
    ) -> CollectionOperator {
        self.find_all_and_update(Predicate::by_id(id), f)
    }

    /// New collection holding the items in sorted order.
    ///
    /// Field-list specifications compare ascending, fields left to right,
    /// and fail with `Error::Comparison` when two compared values are not
    /// both numbers or both strings. Comparator specifications cannot fail.
    /// The sort is stable: full ties keep their input order.
    pub fn sort(&self, spec: impl Into<SortSpec>) -> Result<CollectionOperator> {
        let spec = spec.into();
        let mut items = self.items().to_vec();
        sort::sort_items(&mut items, &spec)?;
        Ok(CollectionOperator::from_items(items))
    }

    /// One page of the collection in its current order.
    ///
    /// `page` is 1-based; the result is the slice
    /// `[(page - 1) * page_size, page * page_size)` clamped to the
    /// collection. Out-of-range pages, page 0 and a page size of 0 all yield
    /// an empty collection, never an error.
    pub fn page(&self, page: usize, page_size: usize) -> CollectionOperator {
        if page == 0 || page_size == 0 {
            return CollectionOperator::from_items(Vec::new());
        }
        let items = self.items();
        let start = (page - 1).saturating_mul(page_size);
        if start >= items.len() {
            return CollectionOperator::from_items(Vec::new());
        }
        let end = start.saturating_add(page_size).min(items.len());
        CollectionOperator::from_items(items[start..end].to_vec())
    }

    /// Project every item onto the listed fields, keeping the collection
    /// order. Each item follows the same presence rule as
    /// [`ScalarOperator::pick`](crate::ScalarOperator::pick).
    pub fn pick(&self, fields: &[&str]) -> CollectionOperator {
        CollectionOperator::from_items(
            self.items()
                .iter()
                .map(|item| pick_fields(item, fields))
                .collect(),
        )
    }
}
