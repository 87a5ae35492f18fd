//! Checkbox selection over a displayed list.

use crate::lists;
use serde::{Deserialize, Serialize};

/// Selected identifiers, in the order they were selected.
///
/// Members are compared with `PartialEq`. [`SelectionStore::add`] does not
/// check for duplicates; [`SelectionStore::toggle`] never creates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStore<I = String> {
    selected: Vec<I>,
    initial: Vec<I>,
}

impl<I: Clone + PartialEq> SelectionStore<I> {
    /// Creates a selection starting from `initial`.
    pub fn new(initial: Vec<I>) -> Self {
        Self {
            selected: initial.clone(),
            initial,
        }
    }

    /// Selected identifiers.
    #[must_use]
    pub fn selected(&self) -> &[I] {
        &self.selected
    }

    /// Returns true if `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &I) -> bool {
        lists::is_selected(&self.selected, id, PartialEq::eq)
    }

    /// Appends `id` to the selection.
    pub fn add(&mut self, id: I) {
        self.selected = lists::add(&self.selected, id);
    }

    /// Removes every occurrence of `id`.
    pub fn remove(&mut self, id: &I) {
        self.selected = lists::remove(&self.selected, id, PartialEq::eq);
    }

    /// Selects `id` if unselected, unselects it otherwise.
    pub fn toggle(&mut self, id: I) {
        self.selected = lists::toggle(&self.selected, id, PartialEq::eq);
    }

    /// Replaces the selection, e.g. for select-all.
    pub fn set(&mut self, ids: Vec<I>) {
        self.selected = ids;
    }

    /// Returns to the selection the store was created with.
    pub fn reset_to_initial(&mut self) {
        self.selected = self.initial.clone();
    }

    /// Unselects everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl<I: Clone + PartialEq> Default for SelectionStore<I> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
