//! Per-field failures of a whole-object validation

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::{Deserialize, Serialize};

/// Failure causes keyed by field name, in field declaration order.
///
/// Produced by `Schema::validate`: every failing field in
/// [`SchemaMode::All`](super::SchemaMode::All), exactly one in
/// [`SchemaMode::Strict`](super::SchemaMode::Strict).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaErrors<E> {
    by_field: IndexMap<String, E>,
}

impl<E> SchemaErrors<E> {
    pub(crate) fn new() -> Self {
        Self {
            by_field: IndexMap::new(),
        }
    }

    pub(crate) fn single(field: impl Into<String>, error: E) -> Self {
        let mut errors = Self::new();
        errors.insert(field, error);
        errors
    }

    pub(crate) fn insert(&mut self, field: impl Into<String>, error: E) {
        self.by_field.insert(field.into(), error);
    }

    /// Cause for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&E> {
        self.by_field.get(field)
    }

    /// `true` if `field` failed.
    pub fn contains(&self, field: &str) -> bool {
        self.by_field.contains_key(field)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    /// `true` if no field failed.
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Failing field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.by_field.keys().map(String::as_str)
    }

    /// `(field, cause)` pairs in declaration order.
    pub fn iter(&self) -> Iter<'_, String, E> {
        self.by_field.iter()
    }

    /// Unwraps into the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, E> {
        self.by_field
    }
}

impl<E> IntoIterator for SchemaErrors<E> {
    type Item = (String, E);
    type IntoIter = IntoIter<String, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_field.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a SchemaErrors<E> {
    type Item = (&'a String, &'a E);
    type IntoIter = Iter<'a, String, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_field.iter()
    }
}

impl<E: fmt::Display> fmt::Display for SchemaErrors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema validation failed ({} field", self.len())?;
        if self.len() != 1 {
            f.write_str("s")?;
        }
        f.write_str(")")?;
        for (i, (field, error)) in self.by_field.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for SchemaErrors<E> {}
