//! Selected records under a caller-supplied equality.
//!
//! Unlike [`crate::SelectionStore`], members are full records and identity
//! is whatever the page says it is: two product rows may be "the same" when
//! their ids match even though their other columns differ.

use crate::lists;
use crate::sync::{SyncOptions, SyncOutcome, Synced};
use std::fmt;

/// Ordered selection of records, compared with `F`.
#[derive(Clone)]
pub struct ListActions<T, F> {
    items: Synced<Vec<T>>,
    eq: F,
}

impl<T, F> ListActions<T, F>
where
    T: Clone + PartialEq,
    F: Fn(&T, &T) -> bool,
{
    /// Creates a selection starting from `initial`.
    pub fn new(initial: Vec<T>, eq: F) -> Self {
        Self::with_options(initial, eq, SyncOptions::new())
    }

    /// Creates a selection with explicit resync options.
    pub fn with_options(initial: Vec<T>, eq: F, options: SyncOptions<Vec<T>>) -> Self {
        Self {
            items: Synced::with_options(initial, options),
            eq,
        }
    }

    /// Selected records.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.items.state()
    }

    /// Returns true if a record equal to `item` is selected.
    #[must_use]
    pub fn is_selected(&self, item: &T) -> bool {
        lists::is_selected(self.items.state(), item, &self.eq)
    }

    /// Appends `item`. Does not check for duplicates.
    pub fn add(&mut self, item: T) {
        let next = lists::add(self.items.state(), item);
        self.items.set_state(next);
    }

    /// Removes every record equal to `item`.
    pub fn remove(&mut self, item: &T) {
        let next = lists::remove(self.items.state(), item, &self.eq);
        self.items.set_state(next);
    }

    /// Selects `item` if unselected, unselects it otherwise.
    pub fn toggle(&mut self, item: T) {
        let next = lists::toggle(self.items.state(), item, &self.eq);
        self.items.set_state(next);
    }

    /// Replaces the selection.
    pub fn set(&mut self, items: Vec<T>) {
        self.items.set_state(items);
    }

    /// Unselects everything.
    pub fn clear(&mut self) {
        self.items.set_state(Vec::new());
    }

    /// Returns to the last observed upstream selection.
    pub fn reset_to_initial(&mut self) {
        self.items.reset_to_upstream();
    }

    /// Feeds a freshly fetched upstream selection.
    pub fn observe(&mut self, initial: Vec<T>) -> SyncOutcome {
        self.items.observe(initial)
    }

    /// Number of selected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.state().len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.state().is_empty()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for ListActions<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListActions")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
