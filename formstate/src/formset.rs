//! Keyed rows of editable values.
//!
//! Used for multi-row edits such as attribute values or per-warehouse stock,
//! where every row carries a caller-assigned id, a label, the edited value
//! and opaque row data. Rows are located by id; their order never changes
//! through an edit.

use crate::sync::{SyncOptions, SyncOutcome, Synced};
use crate::{Error, Result};
use formstate_types::FormsetRow;
use tracing::warn;

/// Editable rows synced from upstream.
#[derive(Debug, Clone)]
pub struct FormsetStore<D, V = String> {
    rows: Synced<Vec<FormsetRow<D, V>>>,
}

impl<D, V> FormsetStore<D, V>
where
    D: Clone + PartialEq,
    V: Clone + PartialEq,
{
    /// Creates a formset over `initial`.
    pub fn new(initial: Vec<FormsetRow<D, V>>) -> Self {
        Self::with_options(initial, SyncOptions::new())
    }

    /// Creates a formset with explicit resync options.
    pub fn with_options(
        initial: Vec<FormsetRow<D, V>>,
        options: SyncOptions<Vec<FormsetRow<D, V>>>,
    ) -> Self {
        Self {
            rows: Synced::with_options(initial, options),
        }
    }

    /// Current rows.
    #[must_use]
    pub fn data(&self) -> &[FormsetRow<D, V>] {
        self.rows.state()
    }

    /// First row with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FormsetRow<D, V>> {
        self.rows.state().iter().find(|row| row.id == id)
    }

    /// Replaces the value of the row with the given id.
    ///
    /// Label, data and position of the row are kept.
    pub fn change(&mut self, id: &str, value: V) -> Result<()> {
        let Some(index) = self.position(id) else {
            warn!(id, "change on unknown formset row");
            return Err(Error::UnknownRow(id.to_owned()));
        };
        self.rows.update(|rows| rows[index].value = value);
        Ok(())
    }

    /// Appends a complete row.
    pub fn add(&mut self, row: FormsetRow<D, V>) -> Result<()> {
        if self.position(&row.id).is_some() {
            warn!(id = %row.id, "formset row already exists");
            return Err(Error::DuplicateRow(row.id));
        }
        self.rows.update(|rows| rows.push(row));
        Ok(())
    }

    /// Removes the row with the given id, returning it.
    pub fn remove(&mut self, id: &str) -> Option<FormsetRow<D, V>> {
        let index = self.position(id)?;
        let mut removed = None;
        self.rows.update(|rows| removed = Some(rows.remove(index)));
        removed
    }

    /// Replaces all rows.
    pub fn set(&mut self, rows: Vec<FormsetRow<D, V>>) {
        self.rows.set_state(rows);
    }

    /// Feeds freshly fetched upstream rows.
    ///
    /// A replacement drops every local edit, not only those of changed rows.
    pub fn observe(&mut self, initial: Vec<FormsetRow<D, V>>) -> SyncOutcome {
        self.rows.observe(initial)
    }

    /// Restores the last observed upstream rows.
    pub fn reset(&mut self) {
        self.rows.reset_to_upstream();
    }

    /// Returns true if the rows were edited since the last sync.
    #[must_use]
    pub fn is_diverged(&self) -> bool {
        self.rows.is_diverged()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.state().len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.state().is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rows.state().iter().position(|row| row.id == id)
    }
}
