//! Formset rows.

use serde::{Deserialize, Serialize};

/// One row of a multi-row edit collection (attribute values, variant stock, ...).
///
/// `id` is an opaque key supplied by the caller, typically a server-side
/// primary key or slug. Ids must be unique within a formset; lookups take the
/// first match otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsetRow<D, V = String> {
    pub id: String,
    pub label: String,
    pub value: V,
    pub data: D,
}

impl<D, V> FormsetRow<D, V> {
    /// Creates a row.
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: V, data: D) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value,
            data,
        }
    }

    /// Returns a copy of this row with `value` replaced.
    #[must_use]
    pub fn with_value(&self, value: V) -> Self
    where
        D: Clone,
        V: Clone,
    {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            value,
            data: self.data.clone(),
        }
    }
}
