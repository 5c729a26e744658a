//! Sort key specifications and value comparison

use serde_json::Value;
use silt_core::{type_name, Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// How a collection should be ordered.
///
/// Either a list of field names, compared left to right with the first
/// difference deciding, or an arbitrary comparator closure. Field-list sorts
/// are ascending and only defined over fields where both values are numbers
/// (compared numerically) or both are strings (compared lexicographically);
/// any other pairing fails the sort with `Error::Comparison`.
pub enum SortSpec {
    /// Field names, compared left to right
    Fields(Vec<String>),
    /// Arbitrary comparator over two items
    Comparator(Box<dyn Fn(&Value, &Value) -> Ordering>),
}

impl SortSpec {
    /// Build a field-list specification.
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SortSpec::Fields(fields.into_iter().map(Into::into).collect())
    }

    /// Build a comparator specification from a closure.
    pub fn comparator(f: impl Fn(&Value, &Value) -> Ordering + 'static) -> Self {
        SortSpec::Comparator(Box::new(f))
    }
}

impl<S: Into<String>> From<Vec<S>> for SortSpec {
    fn from(fields: Vec<S>) -> Self {
        SortSpec::fields(fields)
    }
}

impl<S: Into<String> + Clone> From<&[S]> for SortSpec {
    fn from(fields: &[S]) -> Self {
        SortSpec::fields(fields.iter().cloned())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for SortSpec {
    fn from(fields: [S; N]) -> Self {
        SortSpec::fields(fields)
    }
}

impl fmt::Debug for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortSpec::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            SortSpec::Comparator(_) => f.write_str("Comparator(..)"),
        }
    }
}

/// Order two field values of the same supported runtime type.
fn compare_values(a: &Value, b: &Value) -> Result<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => Ok(x.total_cmp(&y)),
            _ => Err(Error::Comparison {
                left: "number",
                right: "number",
            }),
        },
        (Value::String(x), Value::String(y)) => Ok(x.cmp(y)),
        _ => Err(Error::Comparison {
            left: type_name(a),
            right: type_name(b),
        }),
    }
}

/// Compare two items field by field; the first non-equal field decides.
/// A field missing on either side reads as null and fails [`compare_values`].
fn compare_by_fields(a: &Value, b: &Value, fields: &[String]) -> Result<Ordering> {
    for field in fields {
        let left = a.get(field).unwrap_or(&Value::Null);
        let right = b.get(field).unwrap_or(&Value::Null);
        match compare_values(left, right)? {
            Ordering::Equal => continue,
            decided => return Ok(decided),
        }
    }
    Ok(Ordering::Equal)
}

/// Stable-sort `items` in place according to `spec`.
///
/// Field-list comparison can fail; the first failure is captured and returned
/// after the sort finishes, and the slice contents must then be discarded.
/// Only pairs the sort actually compares can raise an error, so a field with
/// mixed types deeper in the list stays harmless while earlier fields decide.
pub(crate) fn sort_items(items: &mut [Value], spec: &SortSpec) -> Result<()> {
    match spec {
        SortSpec::Comparator(f) => {
            items.sort_by(|a, b| f(a, b));
            Ok(())
        }
        SortSpec::Fields(fields) => {
            let mut failure: Option<Error> = None;
            items.sort_by(|a, b| {
                if failure.is_some() {
                    return Ordering::Equal;
                }
                match compare_by_fields(a, b, fields) {
                    Ok(ordering) => ordering,
                    Err(err) => {
                        failure = Some(err);
                        Ordering::Equal
                    }
                }
            });
            match failure {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }
}
